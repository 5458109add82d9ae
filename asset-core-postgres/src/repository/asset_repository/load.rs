use asset_core_db::models::asset::AssetModel;
use asset_core_db::repository::load::Load;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &AssetRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<AssetModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, name, category_id, department_id, purchase_date, cost, created_by, updated_by, created_at, updated_at
            FROM assets
            WHERE id = $1
            "#,
        )
        .bind(id);

        let mut tx = repo.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_optional(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        row.as_ref().map(AssetModel::try_from_row).transpose()
    }
}

#[async_trait]
impl Load<Postgres, AssetModel> for AssetRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<AssetModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
