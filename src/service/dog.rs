//! Dog management: tag resolution, image storage, and persistence.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::dog::DogRepository,
    error::AppError,
    model::dog::{CreateDogParams, Dog, PatchDogParams, UpdateDogParams},
    service::{
        image::{ImageKind, ImageStore, ImageUpload},
        tag::TagService,
    },
};

pub struct DogService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> DogService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Creates a dog. Referenced tag ids are validated first and the image,
    /// when present, is stored before the row is written. A missing intake
    /// date defaults to the day of creation.
    pub async fn create(
        &self,
        mut params: CreateDogParams,
        image: Option<ImageUpload>,
    ) -> Result<Dog, AppError> {
        params.tag_ids = TagService::new(self.db).resolve(params.tag_ids).await?;
        params.intake_date = Some(
            params
                .intake_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        );

        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::Dog, image).await?);
        }

        let dog = DogRepository::new(self.db).create(params).await?;

        Ok(dog)
    }

    pub async fn get_all(&self) -> Result<Vec<Dog>, AppError> {
        let dogs = DogRepository::new(self.db).get_all().await?;

        Ok(dogs)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, AppError> {
        let dog = DogRepository::new(self.db).find_by_id(id).await?;

        Ok(dog)
    }

    /// Replaces a dog's fields. A new image supersedes the stored one,
    /// whose file is removed after the update commits.
    pub async fn update(
        &self,
        mut params: UpdateDogParams,
        image: Option<ImageUpload>,
    ) -> Result<Option<Dog>, AppError> {
        let repo = DogRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        params.tag_ids = TagService::new(self.db).resolve(params.tag_ids).await?;

        let replacing_image = image.is_some();
        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::Dog, image).await?);
        }

        let dog = repo.update(params).await?;

        if replacing_image && dog.is_some() {
            if let Some(old_url) = existing.image_url {
                self.images.remove(&old_url).await;
            }
        }

        Ok(dog)
    }

    /// Applies a partial update; only submitted fields change.
    pub async fn patch(
        &self,
        mut params: PatchDogParams,
        image: Option<ImageUpload>,
    ) -> Result<Option<Dog>, AppError> {
        let repo = DogRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        if let Some(tag_ids) = params.tag_ids {
            params.tag_ids = Some(TagService::new(self.db).resolve(tag_ids).await?);
        }

        let replacing_image = image.is_some();
        if let Some(image) = image {
            params.image_url = Some(self.images.save(ImageKind::Dog, image).await?);
        }

        let dog = repo.patch(params).await?;

        if replacing_image && dog.is_some() {
            if let Some(old_url) = existing.image_url {
                self.images.remove(&old_url).await;
            }
        }

        Ok(dog)
    }

    /// Deletes a dog and removes its stored image from disk.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(dog) = DogRepository::new(self.db).delete(id).await? else {
            return Ok(false);
        };

        if let Some(image_url) = dog.image_url {
            self.images.remove(&image_url).await;
        }

        Ok(true)
    }
}
