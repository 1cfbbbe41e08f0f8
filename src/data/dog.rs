//! Dog data repository for database operations.
//!
//! This module provides the `DogRepository` for managing shelter dogs and
//! their tag associations. The tag set is stored in the `tag_dog` junction
//! table and replaced wholesale on update; all multi-table writes run in a
//! transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::dog::{CreateDogParams, Dog, PatchDogParams, UpdateDogParams};

pub struct DogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new dog and attaches the given tags.
    ///
    /// The `tag_ids` must already be validated against existing tags.
    ///
    /// # Returns
    /// - `Ok(Dog)` - The created dog with its resolved tag set
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateDogParams) -> Result<Dog, DbErr> {
        let txn = self.db.begin().await?;

        let dog = entity::dog::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            breed: ActiveValue::Set(params.breed),
            description: ActiveValue::Set(params.description),
            intake_date: ActiveValue::Set(params.intake_date),
            veterinary_passport: ActiveValue::Set(params.veterinary_passport),
            gender: ActiveValue::Set(params.gender),
            image_url: ActiveValue::Set(params.image_url),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::replace_tags(&txn, dog.id, &params.tag_ids).await?;

        let tags = Self::fetch_tags(&txn, &params.tag_ids).await?;

        txn.commit().await?;

        Ok(Dog::from_entity(dog, tags))
    }

    /// Gets all dogs with their tag sets, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Dog>, DbErr> {
        let entities = entity::prelude::Dog::find()
            .find_with_related(entity::prelude::Tag)
            .order_by_asc(entity::dog::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|(dog, tags)| Dog::from_entity(dog, tags))
            .collect())
    }

    /// Finds a dog by id with its tag set.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, DbErr> {
        let Some(dog) = entity::prelude::Dog::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags = dog.find_related(entity::prelude::Tag).all(self.db).await?;

        Ok(Some(Dog::from_entity(dog, tags)))
    }

    /// Counts all dogs.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Dog::find().count(self.db).await
    }

    /// Replaces a dog's fields and tag set.
    ///
    /// `image_url` is only written when present, so an update without a new
    /// upload keeps the stored image.
    ///
    /// # Returns
    /// - `Ok(Some(Dog))` - The updated dog with its resolved tag set
    /// - `Ok(None)` - No dog with that id exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateDogParams) -> Result<Option<Dog>, DbErr> {
        let Some(entity) = entity::prelude::Dog::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active_model: entity::dog::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.age = ActiveValue::Set(params.age);
        active_model.breed = ActiveValue::Set(params.breed);
        active_model.description = ActiveValue::Set(params.description);
        active_model.intake_date = ActiveValue::Set(params.intake_date);
        active_model.veterinary_passport = ActiveValue::Set(params.veterinary_passport);
        active_model.gender = ActiveValue::Set(params.gender);
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        let dog = active_model.update(&txn).await?;

        entity::prelude::TagDog::delete_many()
            .filter(entity::tag_dog::Column::DogId.eq(params.id))
            .exec(&txn)
            .await?;

        Self::replace_tags(&txn, params.id, &params.tag_ids).await?;

        let tags = Self::fetch_tags(&txn, &params.tag_ids).await?;

        txn.commit().await?;

        Ok(Some(Dog::from_entity(dog, tags)))
    }

    /// Applies a partial update. `None` fields keep their stored values;
    /// `tag_ids: Some` replaces the tag set, including clearing it with an
    /// empty list.
    pub async fn patch(&self, params: PatchDogParams) -> Result<Option<Dog>, DbErr> {
        let Some(entity) = entity::prelude::Dog::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active_model: entity::dog::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(breed) = params.breed {
            active_model.breed = ActiveValue::Set(breed);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(intake_date) = params.intake_date {
            active_model.intake_date = ActiveValue::Set(Some(intake_date));
        }
        if let Some(veterinary_passport) = params.veterinary_passport {
            active_model.veterinary_passport = ActiveValue::Set(veterinary_passport);
        }
        if let Some(gender) = params.gender {
            active_model.gender = ActiveValue::Set(gender);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        let dog = active_model.update(&txn).await?;

        if let Some(tag_ids) = &params.tag_ids {
            entity::prelude::TagDog::delete_many()
                .filter(entity::tag_dog::Column::DogId.eq(params.id))
                .exec(&txn)
                .await?;

            Self::replace_tags(&txn, params.id, tag_ids).await?;
        }

        let tags = dog.find_related(entity::prelude::Tag).all(&txn).await?;

        txn.commit().await?;

        Ok(Some(Dog::from_entity(dog, tags)))
    }

    /// Deletes a dog together with its tag associations.
    ///
    /// # Returns
    /// - `Ok(Some(Dog))` - The deleted dog, so the caller can clean up its
    ///   stored image
    /// - `Ok(None)` - No dog with that id exists
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Dog>, DbErr> {
        let Some(dog) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        entity::prelude::TagDog::delete_many()
            .filter(entity::tag_dog::Column::DogId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Dog::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(dog))
    }

    async fn replace_tags<C: ConnectionTrait>(
        conn: &C,
        dog_id: i32,
        tag_ids: &[i32],
    ) -> Result<(), DbErr> {
        for tag_id in tag_ids {
            entity::tag_dog::ActiveModel {
                tag_id: ActiveValue::Set(*tag_id),
                dog_id: ActiveValue::Set(dog_id),
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
