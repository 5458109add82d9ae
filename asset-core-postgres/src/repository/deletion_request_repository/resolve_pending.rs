use asset_core_db::models::deletion_request::DeletionRequestModel;
use std::error::Error;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    /// Persists a request that left `pending` for a terminal state.
    ///
    /// The `status = 'pending'` guard makes the check-and-act atomic: a
    /// request resolved by a concurrent transaction matches zero rows, and
    /// the caller reports the conflict instead of double-processing.
    pub async fn resolve_pending(
        &self,
        request: &DeletionRequestModel,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE deletion_requests
            SET asset_id = $2, status = $3, reviewed_by = $4, reviewer_email = $5,
                review_comment = $6, reviewed_at = $7, updated_at = $8
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(request.id)
        .bind(request.asset_id)
        .bind(request.status)
        .bind(request.reviewed_by)
        .bind(request.reviewer_email.as_deref())
        .bind(request.review_comment.as_deref())
        .bind(request.reviewed_at)
        .bind(request.updated_at);

        let mut tx = self.executor.tx.lock().await;
        let result = if let Some(transaction) = tx.as_mut() {
            query.execute(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        Ok(result.rows_affected() as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::asset_repository::test_utils::create_test_asset;
    use crate::repository::deletion_request_repository::test_utils::create_test_request;
    use crate::test_helper::{admin_actor, setup_test_context};
    use asset_core_api::domain::DeletionRequestEvent;
    use asset_core_db::repository::create::Create;
    use asset_core_db::repository::load::Load;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_resolve_pending_guards_against_double_resolution(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let asset_repo = &ctx.repos.asset_repository;
        let request_repo = &ctx.repos.deletion_request_repository;

        let owner = Uuid::new_v4();
        let asset = asset_repo.create(create_test_asset(owner)).await?;
        let request = request_repo.create(create_test_request(&asset, owner)).await?;

        let reviewer = admin_actor();
        let approved = request
            .transition(
                DeletionRequestEvent::Approve { comment: None },
                &reviewer,
                Utc::now(),
            )?;

        assert_eq!(request_repo.resolve_pending(&approved).await?, 1);

        let stored = request_repo
            .load(approved.id)
            .await?
            .expect("request should exist");
        assert_eq!(stored.status, approved.status);
        assert_eq!(stored.reviewed_by, Some(reviewer.person_id));
        assert_eq!(stored.review_comment, None);

        // The row is no longer pending; a second resolution matches nothing.
        assert_eq!(request_repo.resolve_pending(&approved).await?, 0);

        Ok(())
    }
}
