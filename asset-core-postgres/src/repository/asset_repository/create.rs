use asset_core_db::models::asset::AssetModel;
use asset_core_db::repository::create::Create;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AssetRepositoryImpl,
        item: AssetModel,
    ) -> Result<AssetModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO assets (id, name, category_id, department_id, purchase_date, cost, created_by, updated_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.category_id)
        .bind(item.department_id)
        .bind(item.purchase_date)
        .bind(item.cost)
        .bind(item.created_by)
        .bind(item.updated_by)
        .bind(item.created_at)
        .bind(item.updated_at);

        let mut tx = repo.executor.tx.lock().await;
        if let Some(transaction) = tx.as_mut() {
            query.execute(&mut **transaction).await?;
        } else {
            return Err("Transaction has been consumed".into());
        }

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, AssetModel> for AssetRepositoryImpl {
    async fn create(&self, item: AssetModel) -> Result<AssetModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
