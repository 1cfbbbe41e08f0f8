//! News API types and multipart form parsing.

use axum::extract::Multipart;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::tag::TagDto,
    error::AppError,
    model::news::{CreateNewsParams, PatchNewsParams, UpdateNewsParams},
    service::image::ImageUpload,
    util::parse,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub date: DateTime<Utc>,
    pub body: String,
    pub author_id: i32,
    pub preview: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<TagDto>,
}

/// Raw news form as collected from a multipart body.
#[derive(Debug, Default)]
pub struct NewsForm {
    pub title: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
    pub preview: Option<String>,
    pub tag_ids: Option<String>,
    pub image: Option<ImageUpload>,
}

impl NewsForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => form.image = ImageUpload::from_field(field).await?,
                "title" => form.title = Some(field.text().await?),
                "date" => form.date = Some(field.text().await?),
                "body" => form.body = Some(field.text().await?),
                "preview" => form.preview = Some(field.text().await?),
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
    /// publication date is optional; the service defaults it to now.
    pub fn into_create(
        self,
        author_id: i32,
    ) -> Result<(CreateNewsParams, Option<ImageUpload>), AppError> {
        let params = CreateNewsParams {
            title: require("title", self.title)?,
            date: self
                .date
                .as_deref()
                .map(|value| parse::parse_datetime("date", value))
                .transpose()?,
            body: require("body", self.body)?,
            author_id,
            preview: self.preview,
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

    pub fn into_update(self, id: i32) -> Result<(UpdateNewsParams, Option<ImageUpload>), AppError> {
        let params = UpdateNewsParams {
            id,
            title: require("title", self.title)?,
            date: parse::parse_datetime("date", &require("date", self.date)?)?,
            body: require("body", self.body)?,
            preview: self.preview,
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

    pub fn into_patch(self, id: i32) -> Result<(PatchNewsParams, Option<ImageUpload>), AppError> {
        let params = PatchNewsParams {
            id,
            title: self.title,
            date: self
                .date
                .as_deref()
                .map(|value| parse::parse_datetime("date", value))
                .transpose()?,
            body: self.body,
            preview: self.preview,
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
