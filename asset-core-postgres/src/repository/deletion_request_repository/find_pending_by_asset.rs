use asset_core_db::models::deletion_request::DeletionRequestModel;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    /// Finds the pending request for an asset, if any, and locks its row.
    ///
    /// The partial unique index guarantees at most one matching row. The
    /// workflow calls this before locking the asset row, keeping the lock
    /// order fixed across all operations.
    pub async fn find_pending_by_asset(
        &self,
        asset_id: Uuid,
    ) -> Result<Option<DeletionRequestModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, asset_id, asset_name, asset_cost, requested_by, justification, status, reviewed_by, reviewer_email, review_comment, reviewed_at, created_at, updated_at
            FROM deletion_requests
            WHERE asset_id = $1 AND status = 'pending'
            FOR UPDATE
            "#,
        )
        .bind(asset_id);

        let mut tx = self.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_optional(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        row.as_ref().map(DeletionRequestModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::asset_repository::test_utils::create_test_asset;
    use crate::repository::deletion_request_repository::test_utils::create_test_request;
    use crate::test_helper::setup_test_context;
    use asset_core_db::repository::create::Create;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_find_pending_by_asset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;
        let request_repo = &ctx.repos.deletion_request_repository;

        let owner = Uuid::new_v4();
        let asset = asset_repo.create(create_test_asset(owner)).await?;

        assert!(request_repo.find_pending_by_asset(asset.id).await?.is_none());

        let request = request_repo.create(create_test_request(&asset, owner)).await?;

        let found = request_repo
            .find_pending_by_asset(asset.id)
            .await?
            .expect("pending request should be found");
        assert_eq!(found.id, request.id);

        Ok(())
    }
}
