//! Request API types and the detail mutual-exclusivity validation.

use chrono::{DateTime, Utc};
use entity::enums::{
    AdoptionPurpose, FamilyMemberCount, HousingArea, HousingType, PetExperience, RequestStatus,
    RequestType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    model::request::{
        AdoptionDetails, AdoptionDetailsPatch, CreateRequestParams, PatchRequestParams,
        RequestDetails, UpdateRequestParams,
    },
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AdoptionDetailsDto {
    pub family_member_count: FamilyMemberCount,
    pub had_experience_adoption_pet: PetExperience,
    pub adoption_purpose: AdoptionPurpose,
    pub housing_type: HousingType,
    pub housing_area: HousingArea,
}

impl From<AdoptionDetails> for AdoptionDetailsDto {
    fn from(details: AdoptionDetails) -> Self {
        Self {
            family_member_count: details.family_member_count,
            had_experience_adoption_pet: details.had_experience_adoption_pet,
            adoption_purpose: details.adoption_purpose,
            housing_type: details.housing_type,
            housing_area: details.housing_area,
        }
    }
}

impl From<AdoptionDetailsDto> for AdoptionDetails {
    fn from(dto: AdoptionDetailsDto) -> Self {
        Self {
            family_member_count: dto.family_member_count,
            had_experience_adoption_pet: dto.had_experience_adoption_pet,
            adoption_purpose: dto.adoption_purpose,
            housing_type: dto.housing_type,
            housing_area: dto.housing_area,
        }
    }
}

/// Guardianship carries no extra attributes; the object is an empty marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct GuardianDetailsDto {}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestDto {
    pub id: i32,
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub r#type: RequestType,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub adoption_request: Option<AdoptionDetailsDto>,
    pub guardian_request: Option<GuardianDetailsDto>,
}

/// Resolves the detail payload against the declared type.
///
/// Rules, applied before any persistence:
/// - both detail objects present is always invalid;
/// - a populated detail must match the declared type;
/// - an adoption request requires `adoption_details`;
/// - a guardian request synthesizes the empty default when
///   `guardian_details` is absent.
fn resolve_details(
    r#type: RequestType,
    adoption: Option<AdoptionDetailsDto>,
    guardian: Option<GuardianDetailsDto>,
) -> Result<RequestDetails, AppError> {
    if adoption.is_some() && guardian.is_some() {
        return Err(AppError::BadRequest(
            "adoption_details and guardian_details cannot both be provided".to_string(),
        ));
    }

    match r#type {
        RequestType::AdoptionRequest => {
            if guardian.is_some() {
                return Err(AppError::BadRequest(
                    "guardian_details provided for a request of type ADOPTION_REQUEST".to_string(),
                ));
            }
            let details = adoption.ok_or_else(|| {
                AppError::BadRequest(
                    "adoption_details are required for a request of type ADOPTION_REQUEST"
                        .to_string(),
                )
            })?;
            Ok(RequestDetails::Adoption(details.into()))
        }
        RequestType::GuardianRequest => {
            if adoption.is_some() {
                return Err(AppError::BadRequest(
                    "adoption_details provided for a request of type GUARDIAN_REQUEST".to_string(),
                ));
            }
            Ok(RequestDetails::Guardian)
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RequestCreateDto {
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub r#type: RequestType,
    #[serde(default)]
    pub adoption_details: Option<AdoptionDetailsDto>,
    #[serde(default)]
    pub guardian_details: Option<GuardianDetailsDto>,
}

impl RequestCreateDto {
    pub fn into_params(self) -> Result<CreateRequestParams, AppError> {
        let details = resolve_details(self.r#type, self.adoption_details, self.guardian_details)?;

        Ok(CreateRequestParams {
            dog_id: self.dog_id,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            details,
        })
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RequestUpdateDto {
    pub dog_id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub status: RequestStatus,
    pub r#type: RequestType,
    #[serde(default)]
    pub adoption_details: Option<AdoptionDetailsDto>,
    #[serde(default)]
    pub guardian_details: Option<GuardianDetailsDto>,
}

impl RequestUpdateDto {
    pub fn into_params(self, id: i32) -> Result<UpdateRequestParams, AppError> {
        let details = resolve_details(self.r#type, self.adoption_details, self.guardian_details)?;

        Ok(UpdateRequestParams {
            id,
            dog_id: self.dog_id,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            details,
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AdoptionDetailsPatchDto {
    #[serde(default)]
    pub family_member_count: Option<FamilyMemberCount>,
    #[serde(default)]
    pub had_experience_adoption_pet: Option<PetExperience>,
    #[serde(default)]
    pub adoption_purpose: Option<AdoptionPurpose>,
    #[serde(default)]
    pub housing_type: Option<HousingType>,
    #[serde(default)]
    pub housing_area: Option<HousingArea>,
}

impl From<AdoptionDetailsPatchDto> for AdoptionDetailsPatch {
    fn from(dto: AdoptionDetailsPatchDto) -> Self {
        Self {
            family_member_count: dto.family_member_count,
            had_experience_adoption_pet: dto.had_experience_adoption_pet,
            adoption_purpose: dto.adoption_purpose,
            housing_type: dto.housing_type,
            housing_area: dto.housing_area,
        }
    }
}

/// Explicit per-field patch payload; unknown keys are rejected rather than
/// silently accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RequestPatchDto {
    #[serde(default)]
    pub dog_id: Option<i32>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub r#type: Option<RequestType>,
    #[serde(default)]
    pub adoption_details: Option<AdoptionDetailsPatchDto>,
    #[serde(default)]
    pub guardian_details: Option<GuardianDetailsDto>,
}

impl RequestPatchDto {
    /// Validates the detail payload against the declared type, when one is
    /// declared. Detail fields for the non-current type without an explicit
    /// retype are resolved later against the stored request.
    pub fn into_params(self, id: i32) -> Result<PatchRequestParams, AppError> {
        if self.adoption_details.is_some() && self.guardian_details.is_some() {
            return Err(AppError::BadRequest(
                "adoption_details and guardian_details cannot both be provided".to_string(),
            ));
        }

        match self.r#type {
            Some(RequestType::AdoptionRequest) if self.guardian_details.is_some() => {
                return Err(AppError::BadRequest(
                    "guardian_details provided for a request of type ADOPTION_REQUEST".to_string(),
                ));
            }
            Some(RequestType::GuardianRequest) if self.adoption_details.is_some() => {
                return Err(AppError::BadRequest(
                    "adoption_details provided for a request of type GUARDIAN_REQUEST".to_string(),
                ));
            }
            _ => {}
        }

        Ok(PatchRequestParams {
            id,
            dog_id: self.dog_id,
            full_name: self.full_name,
            phone: self.phone,
            email: self.email,
            status: self.status,
            r#type: self.r#type,
            adoption_details: self.adoption_details.map(Into::into),
        })
    }
}
