//! Dog API types and multipart form parsing.

use axum::extract::Multipart;
use chrono::NaiveDate;
use entity::enums::Gender;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::tag::TagDto,
    error::AppError,
    model::dog::{CreateDogParams, PatchDogParams, UpdateDogParams},
    service::image::ImageUpload,
    util::parse,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DogDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
    pub intake_date: Option<NaiveDate>,
    pub veterinary_passport: bool,
    pub gender: Gender,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
}

/// Raw dog form as collected from a multipart body. Every value is still
/// text at this point; typing happens in the `into_*` conversions.
#[derive(Debug, Default)]
pub struct DogForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub breed: Option<String>,
    pub description: Option<String>,
    pub intake_date: Option<String>,
    pub veterinary_passport: Option<String>,
    pub gender: Option<String>,
    pub tag_ids: Option<String>,
    pub image: Option<ImageUpload>,
}

impl DogForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => form.image = ImageUpload::from_field(field).await?,
                "name" => form.name = Some(field.text().await?),
                "age" => form.age = Some(field.text().await?),
                "breed" => form.breed = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "intake_date" => form.intake_date = Some(field.text().await?),
                "veterinary_passport" => form.veterinary_passport = Some(field.text().await?),
                "gender" => form.gender = Some(field.text().await?),
                "tag_ids" => form.tag_ids = Some(field.text().await?),
                other => {
                    return Err(AppError::BadRequest(format!(
                        "Unknown form field {other}"
                    )))
                }
            }
        }

        Ok(form)
    }

    /// Converts into creation parameters plus the image to store. The
    /// service fills `image_url` in after the upload is written to disk.
    pub fn into_create(self) -> Result<(CreateDogParams, Option<ImageUpload>), AppError> {
        let params = CreateDogParams {
            name: require("name", self.name)?,
            age: parse::parse_i32("age", &require("age", self.age)?)?,
            breed: require("breed", self.breed)?,
            description: require("description", self.description)?,
            intake_date: self
                .intake_date
                .as_deref()
                .map(|value| parse::parse_date("intake_date", value))
                .transpose()?,
            veterinary_passport: self
                .veterinary_passport
                .as_deref()
                .map(|value| parse::parse_bool("veterinary_passport", value))
                .transpose()?
                .unwrap_or(false),
            gender: parse::parse_enum("gender", &require("gender", self.gender)?)?,
            tag_ids: self
                .tag_ids
                .as_deref()
                .map(|value| parse::parse_id_list("tag_ids", value))
                .transpose()?
                .unwrap_or_default(),
            image_url: None,
        };

        Ok((params, self.image))
    }

    pub fn into_update(self, id: i32) -> Result<(UpdateDogParams, Option<ImageUpload>), AppError> {
        let params = UpdateDogParams {
            id,
            name: require("name", self.name)?,
            age: parse::parse_i32("age", &require("age", self.age)?)?,
            breed: require("breed", self.breed)?,
            description: require("description", self.description)?,
            intake_date: self
                .intake_date
                .as_deref()
                .map(|value| parse::parse_date("intake_date", value))
                .transpose()?,
            veterinary_passport: self
                .veterinary_passport
                .as_deref()
                .map(|value| parse::parse_bool("veterinary_passport", value))
                .transpose()?
                .unwrap_or(false),
            gender: parse::parse_enum("gender", &require("gender", self.gender)?)?,
            tag_ids: self
                .tag_ids
                .as_deref()
                .map(|value| parse::parse_id_list("tag_ids", value))
                .transpose()?
                .unwrap_or_default(),
            image_url: None,
        };

        Ok((params, self.image))
    }

    /// Converts into patch parameters. Absent fields stay `None` and leave
    /// the stored values untouched; `tag_ids=""` clears the tag set.
    pub fn into_patch(self, id: i32) -> Result<(PatchDogParams, Option<ImageUpload>), AppError> {
        let params = PatchDogParams {
            id,
            name: self.name,
            age: self
                .age
                .as_deref()
                .map(|value| parse::parse_i32("age", value))
                .transpose()?,
            breed: self.breed,
            description: self.description,
            intake_date: self
                .intake_date
                .as_deref()
                .map(|value| parse::parse_date("intake_date", value))
                .transpose()?,
            veterinary_passport: self
                .veterinary_passport
                .as_deref()
                .map(|value| parse::parse_bool("veterinary_passport", value))
                .transpose()?,
            gender: self
                .gender
                .as_deref()
                .map(|value| parse::parse_enum("gender", value))
                .transpose()?,
            tag_ids: self
                .tag_ids
                .as_deref()
                .map(|value| parse::parse_id_list("tag_ids", value))
                .transpose()?,
            image_url: None,
        };

        Ok((params, self.image))
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing form field {field}")))
}
