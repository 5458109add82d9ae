use asset_core_db::models::deletion_request::DeletionRequestModel;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    /// Loads a request and takes a row lock on it for the remainder of the
    /// open transaction. Two reviewers racing on the same request serialize
    /// here; the loser re-reads a resolved status and fails the transition.
    pub async fn load_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<DeletionRequestModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, asset_id, asset_name, asset_cost, requested_by, justification, status, reviewed_by, reviewer_email, review_comment, reviewed_at, created_at, updated_at
            FROM deletion_requests
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

        row.as_ref().map(DeletionRequestModel::try_from_row).transpose()
    }
}
