//! Request domain models and parameters.
//!
//! The detail record attached to a request is modeled as the tagged variant
//! [`RequestDetails`], owned by the request. The data layer keeps the two
//! detail tables in sync with the request's type column; above that boundary
//! the "populated relation disagrees with the type" state cannot exist.

use chrono::{DateTime, Utc};
use entity::enums::{
    AdoptionPurpose, FamilyMemberCount, HousingArea, HousingType, PetExperience, RequestStatus,
    RequestType,
};

use crate::{
    dto::request::{AdoptionDetailsDto, GuardianDetailsDto, RequestDto},
    error::AppError,
};

/// Adoption questionnaire attached 1:1 to an adoption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdoptionDetails {
    pub family_member_count: FamilyMemberCount,
    pub had_experience_adoption_pet: PetExperience,
    pub adoption_purpose: AdoptionPurpose,
    pub housing_type: HousingType,
    pub housing_area: HousingArea,
}

impl AdoptionDetails {
    pub fn from_entity(entity: &entity::adoption_request::Model) -> Self {
        Self {
            family_member_count: entity.family_member_count,
            had_experience_adoption_pet: entity.had_experience_adoption_pet,
            adoption_purpose: entity.adoption_purpose,
            housing_type: entity.housing_type,
            housing_area: entity.housing_area,
        }
    }
}

/// Type-specific detail record owned by a request.
///
/// Guardianship carries no extra data, so its variant is a bare marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDetails {
    Adoption(AdoptionDetails),
    Guardian,
}

impl RequestDetails {
    /// The type column value this detail corresponds to.
    pub fn request_type(&self) -> RequestType {
        match self {
            Self::Adoption(_) => RequestType::AdoptionRequest,
            Self::Guardian => RequestType::GuardianRequest,
        }
    }
}

/// Adoption or guardianship request submitted for a shelter dog.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: i32,
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub details: RequestDetails,
}

impl Request {
    /// Converts a request row plus its loaded detail rows at the repository
    /// boundary.
    ///
    /// Fails with an internal error when the stored detail rows disagree
    /// with the request's type column — the repository keeps them in sync
    /// transactionally, so a mismatch indicates corrupted data.
    pub fn from_entity(
        entity: entity::request::Model,
        adoption: Option<entity::adoption_request::Model>,
        guardian: Option<entity::guardian_request::Model>,
    ) -> Result<Self, AppError> {
        let details = match (entity.r#type, &adoption, &guardian) {
            (RequestType::AdoptionRequest, Some(detail), None) => {
                RequestDetails::Adoption(AdoptionDetails::from_entity(detail))
            }
            (RequestType::GuardianRequest, None, Some(_)) => RequestDetails::Guardian,
            _ => {
                return Err(AppError::InternalError(format!(
                    "Request {} detail rows disagree with its type {:?}",
                    entity.id, entity.r#type
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            dog_id: entity.dog_id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            status: entity.status,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            details,
        })
    }

    pub fn into_dto(self) -> RequestDto {
        let r#type = self.details.request_type();
        let (adoption, guardian) = match self.details {
            RequestDetails::Adoption(details) => (Some(AdoptionDetailsDto::from(details)), None),
            RequestDetails::Guardian => (None, Some(GuardianDetailsDto {})),
        };

        RequestDto {
            id: self.id,
            dog_id: self.dog_id,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            r#type,
            created_at: self.created_at,
            closed_at: self.closed_at,
            adoption_request: adoption,
            guardian_request: guardian,
        }
    }
}

/// Parameters for creating a request; the detail variant is already
/// validated against the declared type at the DTO boundary.
#[derive(Debug, Clone)]
pub struct CreateRequestParams {
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub details: RequestDetails,
}

/// Parameters for a full request update.
///
/// When the detail variant's type differs from the stored one, the stale
/// detail row is discarded and replaced; otherwise the detail is updated in
/// place.
#[derive(Debug, Clone)]
pub struct UpdateRequestParams {
    pub id: i32,
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub details: RequestDetails,
}

/// Partial adoption detail patch, merged field-by-field into an existing
/// adoption row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdoptionDetailsPatch {
    pub family_member_count: Option<FamilyMemberCount>,
    pub had_experience_adoption_pet: Option<PetExperience>,
    pub adoption_purpose: Option<AdoptionPurpose>,
    pub housing_type: Option<HousingType>,
    pub housing_area: Option<HousingArea>,
}

impl AdoptionDetailsPatch {
    /// Returns the complete detail set when every field is present, as
    /// required when retyping a request to adoption.
    pub fn complete(&self) -> Option<AdoptionDetails> {
        Some(AdoptionDetails {
            family_member_count: self.family_member_count?,
            had_experience_adoption_pet: self.had_experience_adoption_pet?,
            adoption_purpose: self.adoption_purpose?,
            housing_type: self.housing_type?,
            housing_area: self.housing_area?,
        })
    }
}

/// Parameters for a partial request update.
///
/// A detail retype happens only when `r#type` is present and differs from
/// the stored type. Adoption detail fields are merged into the existing row
/// when the current type is adoption, and ignored otherwise.
#[derive(Debug, Clone, Default)]
pub struct PatchRequestParams {
    pub id: i32,
    pub dog_id: Option<i32>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<RequestStatus>,
    pub r#type: Option<RequestType>,
    pub adoption_details: Option<AdoptionDetailsPatch>,
}
