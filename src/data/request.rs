//! Request data repository for database operations.
//!
//! This module provides the `RequestRepository` for adoption and
//! guardianship requests. A request row always owns exactly one detail row
//! matching its type column; every write that can change the type runs in a
//! transaction that removes the stale detail row and inserts the new one,
//! so the pair can never be observed out of sync.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use entity::enums::{RequestStatus, RequestType};

use crate::{
    error::AppError,
    model::request::{
        AdoptionDetails, CreateRequestParams, PatchRequestParams, Request, RequestDetails,
        UpdateRequestParams,
    },
};

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a request together with its detail row.
    ///
    /// `created_at` is stamped server-side. A request created directly in
    /// the completed status gets `closed_at` stamped as well.
    ///
    /// # Returns
    /// - `Ok(Request)` - The created request with its detail
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, params: CreateRequestParams) -> Result<Request, AppError> {
        let now = Utc::now();
        let closed_at = (params.status == RequestStatus::Completed).then_some(now);

        let txn = self.db.begin().await?;

        let request = entity::request::ActiveModel {
            dog_id: ActiveValue::Set(params.dog_id),
            full_name: ActiveValue::Set(params.full_name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            status: ActiveValue::Set(params.status),
            r#type: ActiveValue::Set(params.details.request_type()),
            created_at: ActiveValue::Set(now),
            closed_at: ActiveValue::Set(closed_at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::insert_details(&txn, request.id, &params.details).await?;

        txn.commit().await?;

        Ok(Self::assemble(request, params.details))
    }

    /// Gets all requests with their details, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Request>, AppError> {
        let requests = entity::prelude::Request::find()
            .order_by_asc(entity::request::Column::Id)
            .all(self.db)
            .await?;

        let mut adoptions: HashMap<i32, entity::adoption_request::Model> =
            entity::prelude::AdoptionRequest::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|detail| (detail.request_id, detail))
                .collect();

        let mut guardians: HashMap<i32, entity::guardian_request::Model> =
            entity::prelude::GuardianRequest::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|detail| (detail.request_id, detail))
                .collect();

        requests
            .into_iter()
            .map(|request| {
                let adoption = adoptions.remove(&request.id);
                let guardian = guardians.remove(&request.id);
                Request::from_entity(request, adoption, guardian)
            })
            .collect()
    }

    /// Finds a request by id with its detail.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Request>, AppError> {
        let Some(request) = entity::prelude::Request::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let adoption = request
            .find_related(entity::prelude::AdoptionRequest)
            .one(self.db)
            .await?;
        let guardian = request
            .find_related(entity::prelude::GuardianRequest)
            .one(self.db)
            .await?;

        Ok(Some(Request::from_entity(request, adoption, guardian)?))
    }

    /// Counts requests in the given status.
    pub async fn count_by_status(&self, status: RequestStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Request::find()
            .filter(entity::request::Column::Status.eq(status))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Replaces a request's fields and detail.
    ///
    /// When the new detail's type differs from the stored one, both detail
    /// tables are cleared for this request and the new detail row is
    /// inserted; a same-type adoption detail is updated in place.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The updated request
    /// - `Ok(None)` - No request with that id exists
    /// - `Err(AppError)` - Database error during update
    pub async fn update(&self, params: UpdateRequestParams) -> Result<Option<Request>, AppError> {
        let Some(entity) = entity::prelude::Request::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let old_status = entity.status;
        let old_closed_at = entity.closed_at;
        let old_type = entity.r#type;
        let new_type = params.details.request_type();

        let txn = self.db.begin().await?;

        if new_type != old_type {
            Self::delete_details(&txn, params.id).await?;
            Self::insert_details(&txn, params.id, &params.details).await?;
        } else if let RequestDetails::Adoption(details) = params.details {
            Self::write_adoption_details(&txn, params.id, details).await?;
        }

        let mut active_model: entity::request::ActiveModel = entity.into();
        active_model.dog_id = ActiveValue::Set(params.dog_id);
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.email = ActiveValue::Set(params.email);
        active_model.status = ActiveValue::Set(params.status);
        active_model.r#type = ActiveValue::Set(new_type);
        active_model.closed_at =
            ActiveValue::Set(next_closed_at(old_status, params.status, old_closed_at));
        let request = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Self::assemble(request, params.details)))
    }

    /// Applies a partial update.
    ///
    /// A type change only happens when the patch names a type differing
    /// from the stored one; retyping to adoption requires a complete
    /// adoption detail set in the same patch. Adoption detail fields are
    /// merged into the existing row when the request stays an adoption
    /// request, and ignored when it stays a guardianship request.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The patched request
    /// - `Ok(None)` - No request with that id exists
    /// - `Err(AppError::BadRequest)` - Incomplete details for a retype
    /// - `Err(AppError)` - Database error during update
    pub async fn patch(&self, params: PatchRequestParams) -> Result<Option<Request>, AppError> {
        let Some(entity) = entity::prelude::Request::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let old_type = entity.r#type;
        let new_type = params.r#type.unwrap_or(old_type);

        // Validate the retype before touching anything.
        let retype_details = if new_type != old_type {
            match new_type {
                RequestType::AdoptionRequest => {
                    let details = params
                        .adoption_details
                        .as_ref()
                        .and_then(|patch| patch.complete())
                        .ok_or_else(|| {
                            AppError::BadRequest(
                                "Retyping a request to ADOPTION_REQUEST requires complete \
                                 adoption_details"
                                    .to_string(),
                            )
                        })?;
                    Some(RequestDetails::Adoption(details))
                }
                RequestType::GuardianRequest => Some(RequestDetails::Guardian),
            }
        } else {
            None
        };

        let txn = self.db.begin().await?;

        let details = if let Some(details) = retype_details {
            Self::delete_details(&txn, params.id).await?;
            Self::insert_details(&txn, params.id, &details).await?;
            details
        } else {
            match old_type {
                RequestType::AdoptionRequest => {
                    let existing = entity::prelude::AdoptionRequest::find()
                        .filter(entity::adoption_request::Column::RequestId.eq(params.id))
                        .one(&txn)
                        .await?
                        .ok_or_else(|| {
                            AppError::InternalError(format!(
                                "Request {} detail rows disagree with its type {:?}",
                                params.id, old_type
                            ))
                        })?;

                    let mut details = AdoptionDetails::from_entity(&existing);
                    if let Some(patch) = params.adoption_details {
                        details = AdoptionDetails {
                            family_member_count: patch
                                .family_member_count
                                .unwrap_or(details.family_member_count),
                            had_experience_adoption_pet: patch
                                .had_experience_adoption_pet
                                .unwrap_or(details.had_experience_adoption_pet),
                            adoption_purpose: patch
                                .adoption_purpose
                                .unwrap_or(details.adoption_purpose),
                            housing_type: patch.housing_type.unwrap_or(details.housing_type),
                            housing_area: patch.housing_area.unwrap_or(details.housing_area),
                        };

                        let mut active_model: entity::adoption_request::ActiveModel =
                            existing.into();
                        active_model.family_member_count =
                            ActiveValue::Set(details.family_member_count);
                        active_model.had_experience_adoption_pet =
                            ActiveValue::Set(details.had_experience_adoption_pet);
                        active_model.adoption_purpose = ActiveValue::Set(details.adoption_purpose);
                        active_model.housing_type = ActiveValue::Set(details.housing_type);
                        active_model.housing_area = ActiveValue::Set(details.housing_area);
                        active_model.update(&txn).await?;
                    }

                    RequestDetails::Adoption(details)
                }
                RequestType::GuardianRequest => RequestDetails::Guardian,
            }
        };

        let old_status = entity.status;
        let old_closed_at = entity.closed_at;

        let mut active_model: entity::request::ActiveModel = entity.into();
        if let Some(dog_id) = params.dog_id {
            active_model.dog_id = ActiveValue::Set(dog_id);
        }
        if let Some(full_name) = params.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
            active_model.closed_at =
                ActiveValue::Set(next_closed_at(old_status, status, old_closed_at));
        }
        active_model.r#type = ActiveValue::Set(new_type);
        let request = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Self::assemble(request, details)))
    }

    /// Deletes a request together with its detail row.
    ///
    /// # Returns
    /// - `Ok(true)` - Request deleted
    /// - `Ok(false)` - No request with that id exists
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        Self::delete_details(&txn, id).await?;

        let result = entity::prelude::Request::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_details<C: ConnectionTrait>(
        conn: &C,
        request_id: i32,
        details: &RequestDetails,
    ) -> Result<(), AppError> {
        match details {
            RequestDetails::Adoption(details) => {
                entity::adoption_request::ActiveModel {
                    request_id: ActiveValue::Set(request_id),
                    family_member_count: ActiveValue::Set(details.family_member_count),
                    had_experience_adoption_pet: ActiveValue::Set(
                        details.had_experience_adoption_pet,
                    ),
                    adoption_purpose: ActiveValue::Set(details.adoption_purpose),
                    housing_type: ActiveValue::Set(details.housing_type),
                    housing_area: ActiveValue::Set(details.housing_area),
                    ..Default::default()
                }
                .insert(conn)
                .await?;
            }
            RequestDetails::Guardian => {
                entity::guardian_request::ActiveModel {
                    request_id: ActiveValue::Set(request_id),
                    ..Default::default()
                }
                .insert(conn)
                .await?;
            }
        }

        Ok(())
    }

    async fn delete_details<C: ConnectionTrait>(conn: &C, request_id: i32) -> Result<(), AppError> {
        entity::prelude::AdoptionRequest::delete_many()
            .filter(entity::adoption_request::Column::RequestId.eq(request_id))
            .exec(conn)
            .await?;

        entity::prelude::GuardianRequest::delete_many()
            .filter(entity::guardian_request::Column::RequestId.eq(request_id))
            .exec(conn)
            .await?;

        Ok(())
    }

    async fn write_adoption_details<C: ConnectionTrait>(
        conn: &C,
        request_id: i32,
        details: AdoptionDetails,
    ) -> Result<(), AppError> {
        let existing = entity::prelude::AdoptionRequest::find()
            .filter(entity::adoption_request::Column::RequestId.eq(request_id))
            .one(conn)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Request {request_id} detail rows disagree with its type {:?}",
                    RequestType::AdoptionRequest
                ))
            })?;

        let mut active_model: entity::adoption_request::ActiveModel = existing.into();
        active_model.family_member_count = ActiveValue::Set(details.family_member_count);
        active_model.had_experience_adoption_pet =
            ActiveValue::Set(details.had_experience_adoption_pet);
        active_model.adoption_purpose = ActiveValue::Set(details.adoption_purpose);
        active_model.housing_type = ActiveValue::Set(details.housing_type);
        active_model.housing_area = ActiveValue::Set(details.housing_area);
        active_model.update(conn).await?;

        Ok(())
    }

    fn assemble(entity: entity::request::Model, details: RequestDetails) -> Request {
        Request {
            id: entity.id,
            dog_id: entity.dog_id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            status: entity.status,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            details,
        }
    }
}

/// Computes the `closed_at` value for a status transition. Entering the
/// completed status stamps the current time, leaving it clears the stamp,
/// staying completed keeps the original stamp.
fn next_closed_at(
    old_status: RequestStatus,
    new_status: RequestStatus,
    old_closed_at: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match (old_status, new_status) {
        (RequestStatus::Completed, RequestStatus::Completed) => old_closed_at,
        (_, RequestStatus::Completed) => Some(Utc::now()),
        _ => None,
    }
}
