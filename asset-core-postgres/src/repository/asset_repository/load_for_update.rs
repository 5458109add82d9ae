use asset_core_db::models::asset::AssetModel;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    /// Loads an asset and takes a row lock on it for the remainder of the
    /// open transaction. Callers must already hold any deletion-request row
    /// lock they need; the workflow locks request rows before asset rows.
    pub async fn load_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<AssetModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, name, category_id, department_id, purchase_date, cost, created_by, updated_by, created_at, updated_at
            FROM assets
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id);

        let mut tx = self.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_optional(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        row.as_ref().map(AssetModel::try_from_row).transpose()
    }
}
