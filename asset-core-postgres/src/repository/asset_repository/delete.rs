use asset_core_db::repository::delete::Delete;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AssetRepositoryImpl;

impl AssetRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &AssetRepositoryImpl,
        id: Uuid,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"DELETE FROM assets WHERE id = $1"#).bind(id);

        let mut tx = repo.executor.tx.lock().await;
        let result = if let Some(transaction) = tx.as_mut() {
            query.execute(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl Delete<Postgres> for AssetRepositoryImpl {
    async fn delete(&self, id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::create_test_asset;
    use crate::test_helper::setup_test_context;
    use asset_core_db::repository::create::Create;
    use asset_core_db::repository::delete::Delete;
    use asset_core_db::repository::load::Load;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_delete_asset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;

        let asset = asset_repo.create(create_test_asset(Uuid::new_v4())).await?;

        let deleted = asset_repo.delete(asset.id).await?;
        assert_eq!(deleted, 1);
        assert!(asset_repo.load(asset.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_asset_affects_nothing(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;

        let deleted = asset_repo.delete(Uuid::new_v4()).await?;
        assert_eq!(deleted, 0);

        Ok(())
    }
}
