//! Active enums stored as strings in the database.
//!
//! The serde representation and the database string value are identical
//! (SCREAMING_SNAKE_CASE), so the same types serve entity columns, API
//! payloads, and the OpenAPI schema.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dog gender.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
}

/// Lifecycle status of an adoption/guardianship request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// Discriminant for the request detail sub-type.
///
/// The detail row attached to a request must always agree with this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    #[sea_orm(string_value = "ADOPTION_REQUEST")]
    AdoptionRequest,
    #[sea_orm(string_value = "GUARDIAN_REQUEST")]
    GuardianRequest,
}

/// Household composition of an adoption applicant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyMemberCount {
    #[sea_orm(string_value = "ONE")]
    One,
    #[sea_orm(string_value = "WITH_CHILDREN")]
    WithChildren,
    #[sea_orm(string_value = "COUPLE")]
    Couple,
}

/// Prior pet-keeping experience of an adoption applicant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetExperience {
    #[sea_orm(string_value = "FIRST_PET")]
    FirstPet,
    #[sea_orm(string_value = "HAD_PETS_BEFORE")]
    HadPetsBefore,
    #[sea_orm(string_value = "CURRENTLY_HAVE_PETS")]
    CurrentlyHavePets,
}

/// Declared purpose of an adoption.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionPurpose {
    #[sea_orm(string_value = "FOR_SELF")]
    ForSelf,
    #[sea_orm(string_value = "AS_GIFT")]
    AsGift,
}

/// Housing situation of an adoption applicant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HousingType {
    #[sea_orm(string_value = "RENTED")]
    Rented,
    #[sea_orm(string_value = "APARTMENT")]
    Apartment,
    #[sea_orm(string_value = "HOUSE")]
    House,
}

/// Floor area of the applicant's housing.
///
/// The digit-bearing variants are renamed explicitly because the derived
/// SCREAMING_SNAKE_CASE spelling drops the underscores around the numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum HousingArea {
    #[sea_orm(string_value = "UP_TO_40")]
    #[serde(rename = "UP_TO_40")]
    UpTo40,
    #[sea_orm(string_value = "BETWEEN_40_60")]
    #[serde(rename = "BETWEEN_40_60")]
    Between40And60,
    #[sea_orm(string_value = "OVER_60")]
    #[serde(rename = "OVER_60")]
    Over60,
}
