//! Request factory for creating test request rows with their detail rows.

use chrono::Utc;
use entity::enums::{
    AdoptionPurpose, FamilyMemberCount, HousingArea, HousingType, PetExperience, RequestStatus,
    RequestType,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test requests.
///
/// A request row always needs a matching detail row, so the factory builds
/// both: call `build_adoption()` or `build_guardian()` depending on the
/// type under test.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    dog_id: i32,
    full_name: String,
    phone: String,
    email: String,
    status: RequestStatus,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - dog_id: auto-incremented (the column is not a foreign key, so no
    ///   dog row is required)
    /// - full_name: `"Applicant {id}"`, phone: `"+1000000{id}"`
    /// - status: `New`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dog_id: id,
            full_name: format!("Applicant {id}"),
            phone: format!("+1000000{id}"),
            email: format!("applicant{id}@example.com"),
            status: RequestStatus::New,
        }
    }

    pub fn dog_id(mut self, dog_id: i32) -> Self {
        self.dog_id = dog_id;
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Inserts an adoption request with a default questionnaire.
    pub async fn build_adoption(
        self,
    ) -> Result<(entity::request::Model, entity::adoption_request::Model), DbErr> {
        let request = self.insert_request(RequestType::AdoptionRequest).await?;

        let details = entity::adoption_request::ActiveModel {
            request_id: ActiveValue::Set(request.id),
            family_member_count: ActiveValue::Set(FamilyMemberCount::One),
            had_experience_adoption_pet: ActiveValue::Set(PetExperience::FirstPet),
            adoption_purpose: ActiveValue::Set(AdoptionPurpose::ForSelf),
            housing_type: ActiveValue::Set(HousingType::Apartment),
            housing_area: ActiveValue::Set(HousingArea::UpTo40),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((request, details))
    }

    /// Inserts a guardianship request with its marker detail row.
    pub async fn build_guardian(
        self,
    ) -> Result<(entity::request::Model, entity::guardian_request::Model), DbErr> {
        let request = self.insert_request(RequestType::GuardianRequest).await?;

        let details = entity::guardian_request::ActiveModel {
            request_id: ActiveValue::Set(request.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((request, details))
    }

    async fn insert_request(
        &self,
        r#type: RequestType,
    ) -> Result<entity::request::Model, DbErr> {
        let now = Utc::now();
        let closed_at = (self.status == RequestStatus::Completed).then_some(now);

        entity::request::ActiveModel {
            dog_id: ActiveValue::Set(self.dog_id),
            full_name: ActiveValue::Set(self.full_name.clone()),
            phone: ActiveValue::Set(self.phone.clone()),
            email: ActiveValue::Set(self.email.clone()),
            status: ActiveValue::Set(self.status),
            r#type: ActiveValue::Set(r#type),
            created_at: ActiveValue::Set(now),
            closed_at: ActiveValue::Set(closed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
