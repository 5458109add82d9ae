use asset_core_db::models::asset::AssetModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};

pub struct AssetRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AssetRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AssetModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AssetModel {
            id: row.get("id"),
            name: get_heapless_string(row, "name")?,
            category_id: row.get("category_id"),
            department_id: row.get("department_id"),
            purchase_date: row.get("purchase_date"),
            cost: row.get("cost"),
            created_by: row.get("created_by"),
            updated_by: row.get("updated_by"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
