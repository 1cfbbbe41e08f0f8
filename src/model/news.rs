//! News domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{dto::news::NewsDto, model::tag::Tag};

/// Published news item with its resolved tag set.
///
/// The author is fixed at creation to the authenticated caller and is not
/// reassignable through updates.
#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub date: DateTime<Utc>,
    pub body: String,
    pub author_id: i32,
    pub preview: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<Tag>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model, tags: Vec<entity::tag::Model>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            body: entity.body,
            author_id: entity.author_id,
            preview: entity.preview,
            image_url: entity.image_url,
            tags: tags.into_iter().map(Tag::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            date: self.date,
            body: self.body,
            author_id: self.author_id,
            preview: self.preview,
            image_url: self.image_url,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

/// Parameters for creating a news item. `author_id` comes from the
/// authenticated caller, never from the payload.
#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub body: String,
    pub author_id: i32,
    pub preview: Option<String>,
    pub tag_ids: Vec<i32>,
    pub image_url: Option<String>,
}

/// Parameters for a full news update. The author is not touched.
#[derive(Debug, Clone)]
pub struct UpdateNewsParams {
    pub id: i32,
    pub title: String,
    pub date: DateTime<Utc>,
    pub body: String,
    pub preview: Option<String>,
    pub tag_ids: Vec<i32>,
    pub image_url: Option<String>,
}

/// Parameters for a partial news update.
#[derive(Debug, Clone, Default)]
pub struct PatchNewsParams {
    pub id: i32,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub body: Option<String>,
    pub preview: Option<String>,
    pub tag_ids: Option<Vec<i32>>,
    pub image_url: Option<String>,
}
