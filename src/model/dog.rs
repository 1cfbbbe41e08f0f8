//! Dog domain models and parameters.

use chrono::NaiveDate;
use entity::enums::Gender;

use crate::{dto::dog::DogDto, model::tag::Tag};

/// Shelter dog with its resolved tag set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
    pub intake_date: Option<NaiveDate>,
    pub veterinary_passport: bool,
    pub gender: Gender,
    pub image_url: Option<String>,
    pub tags: Vec<Tag>,
}

impl Dog {
    /// Converts an entity model plus its loaded tag rows at the repository
    /// boundary.
    pub fn from_entity(entity: entity::dog::Model, tags: Vec<entity::tag::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            breed: entity.breed,
            description: entity.description,
            intake_date: entity.intake_date,
            veterinary_passport: entity.veterinary_passport,
            gender: entity.gender,
            image_url: entity.image_url,
            tags: tags.into_iter().map(Tag::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> DogDto {
        DogDto {
            id: self.id,
            name: self.name,
            age: self.age,
            breed: self.breed,
            description: self.description,
            intake_date: self.intake_date,
            veterinary_passport: self.veterinary_passport,
            gender: self.gender,
            image_url: self.image_url,
            tags: self.tags.into_iter().map(Tag::into_dto).collect(),
        }
    }
}

/// Parameters for creating a dog.
///
/// `tag_ids` must already be validated against existing tags; `image_url`
/// is filled in by the service after the upload is stored.
#[derive(Debug, Clone)]
pub struct CreateDogParams {
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
    pub intake_date: Option<NaiveDate>,
    pub veterinary_passport: bool,
    pub gender: Gender,
    pub tag_ids: Vec<i32>,
    pub image_url: Option<String>,
}

/// Parameters for a full dog update. The tag set is replaced wholesale.
#[derive(Debug, Clone)]
pub struct UpdateDogParams {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
    pub intake_date: Option<NaiveDate>,
    pub veterinary_passport: bool,
    pub gender: Gender,
    pub tag_ids: Vec<i32>,
    pub image_url: Option<String>,
}

/// Parameters for a partial dog update.
///
/// `None` leaves the stored field untouched. `tag_ids: Some(vec![])` clears
/// all tag associations; `tag_ids: None` leaves them unchanged.
#[derive(Debug, Clone, Default)]
pub struct PatchDogParams {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub description: Option<String>,
    pub intake_date: Option<NaiveDate>,
    pub veterinary_passport: Option<bool>,
    pub gender: Option<Gender>,
    pub tag_ids: Option<Vec<i32>>,
    pub image_url: Option<String>,
}
