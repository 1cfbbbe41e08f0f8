use crate::{data::tag::TagRepository, model::tag::UpsertTagParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_ids;
mod update;
