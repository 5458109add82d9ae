use asset_core_db::models::audit::{AuditLogEntryModel, NewAuditLogEntry};
use asset_core_db::utils::hash_as_i64;
use sqlx::Row;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    /// Appends one entry, assigning its identifier, content hash and
    /// server timestamp. The timestamp comes from `clock_timestamp()` so
    /// entries written by the same transaction stay ordered.
    pub async fn append(
        &self,
        entry: NewAuditLogEntry,
    ) -> Result<AuditLogEntryModel, Box<dyn Error + Send + Sync>> {
        let id = Uuid::new_v4();
        let hash = hash_as_i64(&(id, &entry))?;

        let query = sqlx::query(
            r#"
            INSERT INTO audit_logs (id, action, entity_type, entity_id, snapshot, performed_by, hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, clock_timestamp())
            RETURNING created_at
            "#,
        )
        .bind(id)
        .bind(entry.action)
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(&entry.snapshot)
        .bind(entry.performed_by)
        .bind(hash);

        let mut tx = self.executor.tx.lock().await;
        let row = if let Some(transaction) = tx.as_mut() {
            query.fetch_one(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        };

        Ok(AuditLogEntryModel {
            id,
            action: entry.action,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            snapshot: entry.snapshot,
            performed_by: entry.performed_by,
            hash,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use asset_core_db::models::audit::{AuditAction, AuditEntityType, NewAuditLogEntry};
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_assigns_id_hash_and_timestamp(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_repo = &ctx.repos.audit_log_repository;

        let entity_id = Uuid::new_v4();
        let entry = audit_repo
            .append(NewAuditLogEntry {
                action: AuditAction::AssetDeleted,
                entity_type: AuditEntityType::Asset,
                entity_id,
                snapshot: json!({ "asset": { "id": entity_id } }),
                performed_by: Uuid::new_v4(),
            })
            .await?;

        assert_ne!(entry.id, Uuid::nil());
        assert_ne!(entry.hash, 0);
        assert_eq!(entry.entity_id, entity_id);

        Ok(())
    }

    #[tokio::test]
    async fn test_entries_in_one_transaction_stay_ordered(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let audit_repo = &ctx.repos.audit_log_repository;

        let performed_by = Uuid::new_v4();
        let first = audit_repo
            .append(NewAuditLogEntry {
                action: AuditAction::AssetDeleted,
                entity_type: AuditEntityType::Asset,
                entity_id: Uuid::new_v4(),
                snapshot: json!({}),
                performed_by,
            })
            .await?;
        let second = audit_repo
            .append(NewAuditLogEntry {
                action: AuditAction::DeletionRequestApproved,
                entity_type: AuditEntityType::DeletionRequest,
                entity_id: Uuid::new_v4(),
                snapshot: json!({}),
                performed_by,
            })
            .await?;

        assert!(second.created_at >= first.created_at);

        Ok(())
    }
}
