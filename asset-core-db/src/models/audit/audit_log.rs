use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit_action::{deserialize_audit_action, serialize_audit_action, AuditAction};
use super::audit_entity_type::{
    deserialize_audit_entity_type, serialize_audit_entity_type, AuditEntityType,
};
use crate::models::identifiable::Identifiable;

/// Immutable record of a state-changing action.
///
/// Rows are written only inside the transaction that performed the action
/// they document, so the entry commits or rolls back with it. Never updated
/// or deleted after creation. `created_at` is server-assigned and `hash` is
/// the blake3 content hash of the entry's identifier and payload, giving
/// each record a tamper-evidence fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntryModel {
    pub id: Uuid,
    #[serde(
        serialize_with = "serialize_audit_action",
        deserialize_with = "deserialize_audit_action"
    )]
    pub action: AuditAction,
    #[serde(
        serialize_with = "serialize_audit_entity_type",
        deserialize_with = "deserialize_audit_entity_type"
    )]
    pub entity_type: AuditEntityType,
    pub entity_id: Uuid,
    /// Structured snapshot of the relevant state at the time of the action.
    pub snapshot: serde_json::Value,
    pub performed_by: Uuid,
    pub hash: i64,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for AuditLogEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// A fully formed entry as supplied by the caller; the writer assigns the
/// identifier, content hash and server timestamp on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuditLogEntry {
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: Uuid,
    pub snapshot: serde_json::Value,
    pub performed_by: Uuid,
}
