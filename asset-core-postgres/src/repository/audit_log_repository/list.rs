use asset_core_db::models::audit::AuditLogEntryModel;
use asset_core_db::repository::filter::AuditLogFilter;
use asset_core_db::repository::pagination::{Page, PageRequest};
use std::error::Error;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    /// Lists audit entries matching the filter, newest first. Pure read.
    pub async fn list(
        &self,
        filter: &AuditLogFilter,
        page: PageRequest,
    ) -> Result<Page<AuditLogEntryModel>, Box<dyn Error + Send + Sync>> {
        let count_query = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM audit_logs
            WHERE ($1::audit_action IS NULL OR action = $1)
              AND ($2::audit_entity_type IS NULL OR entity_type = $2)
              AND ($3::uuid IS NULL OR entity_id = $3)
              AND ($4::uuid IS NULL OR performed_by = $4)
            "#,
        )
        .bind(filter.action)
        .bind(filter.entity_type)
        .bind(filter.entity_id)
        .bind(filter.performed_by);

        let page_query = sqlx::query_as::<_, AuditLogEntryModel>(
            r#"
            SELECT id, action, entity_type, entity_id, snapshot, performed_by, hash, created_at
            FROM audit_logs
            WHERE ($1::audit_action IS NULL OR action = $1)
              AND ($2::audit_entity_type IS NULL OR entity_type = $2)
              AND ($3::uuid IS NULL OR entity_id = $3)
              AND ($4::uuid IS NULL OR performed_by = $4)
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(filter.action)
        .bind(filter.entity_type)
        .bind(filter.entity_id)
        .bind(filter.performed_by)
        .bind(page.limit as i64)
        .bind(page.offset as i64);

        let mut tx = self.executor.tx.lock().await;
        let (total, items) = if let Some(transaction) = tx.as_mut() {
            let total = count_query.fetch_one(&mut **transaction).await?;
            let items = page_query.fetch_all(&mut **transaction).await?;
            (total, items)
        } else {
            return Err("Transaction has been consumed".into());
        };

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}
