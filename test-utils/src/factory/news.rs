//! News factory for creating test news rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test news with customizable fields.
///
/// News rows require an existing author; pass the id of a user created with
/// the user factory.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    date: DateTime<Utc>,
    body: String,
    author_id: i32,
    preview: Option<String>,
    image_url: Option<String>,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {id}"),
            date: Utc::now(),
            body: format!("Test news body {id}"),
            author_id,
            preview: None,
            image_url: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            date: ActiveValue::Set(self.date),
            body: ActiveValue::Set(self.body),
            author_id: ActiveValue::Set(self.author_id),
            preview: ActiveValue::Set(self.preview),
            image_url: ActiveValue::Set(self.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news item with default values for the given author.
pub async fn create_news(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db, author_id).build().await
}

/// Attaches a tag to a news item through the junction table.
pub async fn attach_tag(
    db: &DatabaseConnection,
    news_id: i32,
    tag_id: i32,
) -> Result<(), DbErr> {
    entity::tag_news::ActiveModel {
        tag_id: ActiveValue::Set(tag_id),
        news_id: ActiveValue::Set(news_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
