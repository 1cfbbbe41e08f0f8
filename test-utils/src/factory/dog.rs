//! Dog factory for creating test dog rows.

use chrono::NaiveDate;
use entity::enums::Gender;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test dogs with customizable fields.
pub struct DogFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    breed: String,
    description: String,
    intake_date: Option<NaiveDate>,
    veterinary_passport: bool,
    gender: Gender,
    image_url: Option<String>,
}

impl<'a> DogFactory<'a> {
    /// Creates a new DogFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dog {id}"` where id is auto-incremented
    /// - age: `3`, breed: `"Mixed"`, gender: `Male`
    /// - no intake date, no veterinary passport, no image
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dog {id}"),
            age: 3,
            breed: "Mixed".to_string(),
            description: format!("Test dog {id}"),
            intake_date: None,
            veterinary_passport: false,
            gender: Gender::Male,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn intake_date(mut self, intake_date: NaiveDate) -> Self {
        self.intake_date = Some(intake_date);
        self
    }

    pub fn veterinary_passport(mut self, veterinary_passport: bool) -> Self {
        self.veterinary_passport = veterinary_passport;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::dog::Model, DbErr> {
        entity::dog::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            breed: ActiveValue::Set(self.breed),
            description: ActiveValue::Set(self.description),
            intake_date: ActiveValue::Set(self.intake_date),
            veterinary_passport: ActiveValue::Set(self.veterinary_passport),
            gender: ActiveValue::Set(self.gender),
            image_url: ActiveValue::Set(self.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dog with default values.
pub async fn create_dog(db: &DatabaseConnection) -> Result<entity::dog::Model, DbErr> {
    DogFactory::new(db).build().await
}

/// Attaches a tag to a dog through the junction table.
pub async fn attach_tag(
    db: &DatabaseConnection,
    dog_id: i32,
    tag_id: i32,
) -> Result<(), DbErr> {
    entity::tag_dog::ActiveModel {
        tag_id: ActiveValue::Set(tag_id),
        dog_id: ActiveValue::Set(dog_id),
    }
    .insert(db)
    .await?;

    Ok(())
}
