use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{
        AdoptionDetails, AdoptionDetailsPatch, CreateRequestParams, PatchRequestParams,
        RequestDetails, UpdateRequestParams,
    },
};
use entity::enums::{
    AdoptionPurpose, FamilyMemberCount, HousingArea, HousingType, PetExperience, RequestStatus,
    RequestType,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod patch;
mod update;

/// Builds a test context with the request tables.
async fn request_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Request)
        .with_table(entity::prelude::AdoptionRequest)
        .with_table(entity::prelude::GuardianRequest)
        .build()
        .await
        .unwrap()
}

fn sample_adoption_details() -> AdoptionDetails {
    AdoptionDetails {
        family_member_count: FamilyMemberCount::Couple,
        had_experience_adoption_pet: PetExperience::HadPetsBefore,
        adoption_purpose: AdoptionPurpose::ForSelf,
        housing_type: HousingType::House,
        housing_area: HousingArea::Over60,
    }
}

fn sample_create(details: RequestDetails) -> CreateRequestParams {
    CreateRequestParams {
        dog_id: 1,
        full_name: "Jordan Smith".to_string(),
        phone: "+15550001".to_string(),
        email: "jordan@example.com".to_string(),
        status: RequestStatus::New,
        details,
    }
}
