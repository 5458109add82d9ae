use asset_core_db::models::deletion_request::DeletionRequestModel;
use asset_core_db::repository::load::Load;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &DeletionRequestRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<DeletionRequestModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, asset_id, asset_name, asset_cost, requested_by, justification, status, reviewed_by, reviewer_email, review_comment, reviewed_at, created_at, updated_at
            FROM deletion_requests
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

        row.as_ref().map(DeletionRequestModel::try_from_row).transpose()
    }
}

#[async_trait]
impl Load<Postgres, DeletionRequestModel> for DeletionRequestRepositoryImpl {
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<DeletionRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
