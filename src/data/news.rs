//! News data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::news::{CreateNewsParams, News, PatchNewsParams, UpdateNewsParams};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a news item and attaches the given tags.
    ///
    /// The `tag_ids` must already be validated against existing tags. The
    /// publication date is expected to be resolved by the caller; a missing
    /// one falls back to the current time.
    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let txn = self.db.begin().await?;

        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            date: ActiveValue::Set(params.date.unwrap_or_else(Utc::now)),
            body: ActiveValue::Set(params.body),
            author_id: ActiveValue::Set(params.author_id),
            preview: ActiveValue::Set(params.preview),
            image_url: ActiveValue::Set(params.image_url),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::replace_tags(&txn, news.id, &params.tag_ids).await?;

        let tags = Self::fetch_tags(&txn, &params.tag_ids).await?;

        txn.commit().await?;

        Ok(News::from_entity(news, tags))
    }

    /// Gets all news with their tag sets, newest first.
    ///
    /// The two-many consolidation groups rows by the news primary key, so
    /// the date ordering is applied to the assembled list rather than the
    /// query.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let entities = entity::prelude::News::find()
            .find_with_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        let mut news: Vec<News> = entities
            .into_iter()
            .map(|(news, tags)| News::from_entity(news, tags))
            .collect();
        news.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(news)
    }

    /// Finds a news item by id with its tag set.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let Some(news) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags = news.find_related(entity::prelude::Tag).all(self.db).await?;

        Ok(Some(News::from_entity(news, tags)))
    }

    /// Gets all news authored by the given user, without tag sets. Used to
    /// collect stored image paths before an author account is deleted.
    pub async fn find_by_author(&self, author_id: i32) -> Result<Vec<entity::news::Model>, DbErr> {
        entity::prelude::News::find()
            .filter(entity::news::Column::AuthorId.eq(author_id))
            .all(self.db)
            .await
    }

    /// Replaces a news item's fields and tag set. The author is never
    /// touched; `image_url` is only written when present.
    pub async fn update(&self, params: UpdateNewsParams) -> Result<Option<News>, DbErr> {
        let Some(entity) = entity::prelude::News::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active_model: entity::news::ActiveModel = entity.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.date = ActiveValue::Set(params.date);
        active_model.body = ActiveValue::Set(params.body);
        active_model.preview = ActiveValue::Set(params.preview);
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        let news = active_model.update(&txn).await?;

        entity::prelude::TagNews::delete_many()
            .filter(entity::tag_news::Column::NewsId.eq(params.id))
            .exec(&txn)
            .await?;

        Self::replace_tags(&txn, params.id, &params.tag_ids).await?;

        let tags = Self::fetch_tags(&txn, &params.tag_ids).await?;

        txn.commit().await?;

        Ok(Some(News::from_entity(news, tags)))
    }

    /// Applies a partial update. `None` fields keep their stored values;
    /// `tag_ids: Some` replaces the tag set.
    pub async fn patch(&self, params: PatchNewsParams) -> Result<Option<News>, DbErr> {
        let Some(entity) = entity::prelude::News::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active_model: entity::news::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(date) = params.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(body) = params.body {
            active_model.body = ActiveValue::Set(body);
        }
        if let Some(preview) = params.preview {
            active_model.preview = ActiveValue::Set(Some(preview));
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        let news = active_model.update(&txn).await?;

        if let Some(tag_ids) = &params.tag_ids {
            entity::prelude::TagNews::delete_many()
                .filter(entity::tag_news::Column::NewsId.eq(params.id))
                .exec(&txn)
                .await?;

            Self::replace_tags(&txn, params.id, tag_ids).await?;
        }

        let tags = news.find_related(entity::prelude::Tag).all(&txn).await?;

        txn.commit().await?;

        Ok(Some(News::from_entity(news, tags)))
    }

    /// Deletes a news item together with its tag associations.
    ///
    /// # Returns
    /// - `Ok(Some(News))` - The deleted item, so the caller can clean up
    ///   its stored image
    /// - `Ok(None)` - No news with that id exists
    pub async fn delete(&self, id: i32) -> Result<Option<News>, DbErr> {
        let Some(news) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        entity::prelude::TagNews::delete_many()
            .filter(entity::tag_news::Column::NewsId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::News::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(news))
    }

    async fn replace_tags<C: ConnectionTrait>(
        conn: &C,
        news_id: i32,
        tag_ids: &[i32],
    ) -> Result<(), DbErr> {
        for tag_id in tag_ids {
            entity::tag_news::ActiveModel {
                tag_id: ActiveValue::Set(*tag_id),
                news_id: ActiveValue::Set(news_id),
            }
            .insert(conn)
            .await?;
        }

        Ok(())
    }

    async fn fetch_tags<C: ConnectionTrait>(
        conn: &C,
        tag_ids: &[i32],
    ) -> Result<Vec<entity::tag::Model>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Id)
            .all(conn)
            .await
    }
}
