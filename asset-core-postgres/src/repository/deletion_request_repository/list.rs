use asset_core_db::models::deletion_request::DeletionRequestModel;
use asset_core_db::repository::filter::DeletionRequestFilter;
use asset_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::DeletionRequestRepositoryImpl;

impl DeletionRequestRepositoryImpl {
    /// Lists requests matching the filter, newest first. Pure read.
    pub async fn list(
        &self,
        filter: &DeletionRequestFilter,
        page: PageRequest,
    ) -> Result<Page<DeletionRequestModel>, Box<dyn Error + Send + Sync>> {
        let count_query = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM deletion_requests
            WHERE ($1::deletion_request_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR requested_by = $2)
            "#,
        )
        .bind(filter.status)
        .bind(filter.requested_by);

        let page_query = sqlx::query(
            r#"
            SELECT id, asset_id, asset_name, asset_cost, requested_by, justification, status, reviewed_by, reviewer_email, review_comment, reviewed_at, created_at, updated_at
            FROM deletion_requests
            WHERE ($1::deletion_request_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR requested_by = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.status)
        .bind(filter.requested_by)
        .bind(page.limit as i64)
        .bind(page.offset as i64);

        let mut tx = self.executor.tx.lock().await;
        let (total, rows) = if let Some(transaction) = tx.as_mut() {
            let total = count_query.fetch_one(&mut **transaction).await?;
            let rows = page_query.fetch_all(&mut **transaction).await?;
            (total, rows)
        } else {
            return Err("Transaction has been consumed".into());
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(DeletionRequestModel::try_from_row(row)?);
        }

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
