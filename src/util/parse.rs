//! Typed parsing for multipart form fields.
//!
//! The dog and news endpoints take multipart bodies, where every value
//! arrives as text. These helpers convert the text into the same types the
//! JSON endpoints use and turn failures into 400 responses naming the field.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Parses an enum field through its serde wire representation, so form
/// values use the same spelling as JSON bodies.
pub fn parse_enum<T: DeserializeOwned>(field: &str, value: &str) -> Result<T, AppError> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).map_err(|_| {
        AppError::BadRequest(format!("Invalid value {value:?} for field {field}"))
    })
}

pub fn parse_i32(field: &str, value: &str) -> Result<i32, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::BadRequest(format!("Invalid integer {value:?} for field {field}"))
    })
}

pub fn parse_bool(field: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::BadRequest(format!(
            "Invalid boolean {value:?} for field {field}"
        ))),
    }
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid date {value:?} for field {field}, expected YYYY-MM-DD"
        ))
    })
}

pub fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid datetime {value:?} for field {field}, expected RFC 3339"
            ))
        })
}

/// Parses a comma separated id list such as `"1,2,3"`. An empty or
/// whitespace-only value yields an empty list.
pub fn parse_id_list(field: &str, value: &str) -> Result<Vec<i32>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_i32(field, part))
        .collect()
}
