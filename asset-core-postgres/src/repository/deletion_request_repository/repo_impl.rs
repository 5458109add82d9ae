use asset_core_db::models::deletion_request::DeletionRequestModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct DeletionRequestRepositoryImpl {
    pub(crate) executor: Executor,
}

impl DeletionRequestRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for DeletionRequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(DeletionRequestModel {
            id: row.get("id"),
            asset_id: row.try_get("asset_id").ok(),
            asset_name: get_heapless_string(row, "asset_name")?,
            asset_cost: row.get("asset_cost"),
            requested_by: row.get("requested_by"),
            justification: get_heapless_string(row, "justification")?,
            status: row.get("status"),
            reviewed_by: row.try_get("reviewed_by").ok(),
            reviewer_email: get_optional_heapless_string(row, "reviewer_email")?,
            review_comment: get_optional_heapless_string(row, "review_comment")?,
            reviewed_at: row.try_get("reviewed_at").ok(),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
