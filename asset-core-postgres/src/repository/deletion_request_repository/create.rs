use asset_core_db::models::deletion_request::DeletionRequestModel;
use asset_core_db::repository::create::Create;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &DeletionRequestRepositoryImpl,
        item: DeletionRequestModel,
    ) -> Result<DeletionRequestModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO deletion_requests
            (id, asset_id, asset_name, asset_cost, requested_by, justification, status, reviewed_by, reviewer_email, review_comment, reviewed_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(item.id)
        .bind(item.asset_id)
        .bind(item.asset_name.as_str())
        .bind(item.asset_cost)
        .bind(item.requested_by)
        .bind(item.justification.as_str())
        .bind(item.status)
        .bind(item.reviewed_by)
        .bind(item.reviewer_email.as_deref())
        .bind(item.review_comment.as_deref())
        .bind(item.reviewed_at)
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
impl Create<Postgres, DeletionRequestModel> for DeletionRequestRepositoryImpl {
    async fn create(
        &self,
        item: DeletionRequestModel,
    ) -> Result<DeletionRequestModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::asset_repository::test_utils::create_test_asset;
    use crate::repository::deletion_request_repository::test_utils::create_test_request;
    use crate::test_helper::setup_test_context;
    use asset_core_api::domain::DeletionRequestStatus;
    use asset_core_db::repository::create::Create;
    use asset_core_db::repository::load::Load;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_deletion_request() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;
        let request_repo = &ctx.repos.deletion_request_repository;

        let owner = Uuid::new_v4();
        let asset = asset_repo.create(create_test_asset(owner)).await?;
        let request = request_repo.create(create_test_request(&asset, owner)).await?;

        let loaded = request_repo
            .load(request.id)
            .await?
            .expect("request should exist");
        assert_eq!(loaded.status, DeletionRequestStatus::Pending);
        assert_eq!(loaded.asset_id, Some(asset.id));
        assert_eq!(loaded.asset_name, asset.name);
        assert_eq!(loaded.asset_cost, asset.cost);
        assert_eq!(loaded.review_comment, None);
        assert_eq!(loaded.reviewed_by, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_second_pending_request_for_same_asset_is_rejected(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;
        let request_repo = &ctx.repos.deletion_request_repository;

        let owner = Uuid::new_v4();
        let asset = asset_repo.create(create_test_asset(owner)).await?;
        request_repo.create(create_test_request(&asset, owner)).await?;

        // Partial unique index: only one pending request per asset.
        let result = request_repo.create(create_test_request(&asset, owner)).await;
        assert!(result.is_err());

        Ok(())
    }
}
