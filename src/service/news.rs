//! News management: tag resolution, image storage, and persistence.

use chrono::{DateTime, Timelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{CreateNewsParams, News, PatchNewsParams, UpdateNewsParams},
    service::{
        image::{ImageKind, ImageStore, ImageUpload},
        tag::TagService,
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Creates a news item on behalf of the authenticated author. A missing
    /// publication date defaults to now, truncated to the minute.
    pub async fn create(
        &self,
        mut params: CreateNewsParams,
        image: Option<ImageUpload>,
    ) -> Result<News, AppError> {
        params.tag_ids = TagService::new(self.db).resolve(params.tag_ids).await?;
        params.date = Some(params.date.unwrap_or_else(default_publication_date));

        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::News, image).await?);
        }

        let news = NewsRepository::new(self.db).create(params).await?;

        Ok(news)
    }

    pub async fn get_all(&self) -> Result<Vec<News>, AppError> {
        let news = NewsRepository::new(self.db).get_all().await?;

        Ok(news)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, AppError> {
        let news = NewsRepository::new(self.db).find_by_id(id).await?;

        Ok(news)
    }

    /// Replaces a news item's fields. The author never changes; a new image
    /// supersedes the stored one.
    pub async fn update(
        &self,
        mut params: UpdateNewsParams,
        image: Option<ImageUpload>,
    ) -> Result<Option<News>, AppError> {
        let repo = NewsRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        params.tag_ids = TagService::new(self.db).resolve(params.tag_ids).await?;

        let replacing_image = image.is_some();
        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::News, image).await?);
        }

        let news = repo.update(params).await?;

        if replacing_image && news.is_some() {
            if let Some(old_url) = existing.image_url {
                self.images.remove(&old_url).await;
            }
        }

        Ok(news)
    }

    /// Applies a partial update; only submitted fields change.
    pub async fn patch(
        &self,
        mut params: PatchNewsParams,
        image: Option<ImageUpload>,
    ) -> Result<Option<News>, AppError> {
        let repo = NewsRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        if let Some(tag_ids) = params.tag_ids {
            params.tag_ids = Some(TagService::new(self.db).resolve(tag_ids).await?);
        }

        let replacing_image = image.is_some();
        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::News, image).await?);
        }

        let news = repo.patch(params).await?;

        if replacing_image && news.is_some() {
            if let Some(old_url) = existing.image_url {
                self.images.remove(&old_url).await;
            }
        }

        Ok(news)
    }

    /// Deletes a news item and removes its stored image from disk.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(news) = NewsRepository::new(self.db).delete(id).await? else {
            return Ok(false);
        };

        if let Some(image_url) = news.image_url {
            self.images.remove(&image_url).await;
        }

        Ok(true)
    }
}

fn default_publication_date() -> DateTime<Utc> {
    let now = Utc::now();

    now.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(now)
}
