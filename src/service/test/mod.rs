mod image;
mod news;
mod tag;
