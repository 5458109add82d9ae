use serde::{Deserialize, Serialize};
use sqlx::Type;

/// The state-changing action an audit entry documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "audit_action", rename_all = "snake_case")]
pub enum AuditAction {
    AssetDeleted,
    DeletionRequestSubmitted,
    DeletionRequestApproved,
    DeletionRequestRejected,
    DeletionRequestCancelled,
}

impl From<AuditAction> for &str {
    fn from(val: AuditAction) -> Self {
        match val {
            AuditAction::AssetDeleted => "asset_deleted",
            AuditAction::DeletionRequestSubmitted => "deletion_request_submitted",
            AuditAction::DeletionRequestApproved => "deletion_request_approved",
            AuditAction::DeletionRequestRejected => "deletion_request_rejected",
            AuditAction::DeletionRequestCancelled => "deletion_request_cancelled",
        }
    }
}

pub fn serialize_audit_action<S>(action: &AuditAction, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str((*action).into())
}

pub fn deserialize_audit_action<'de, D>(deserializer: D) -> Result<AuditAction, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "asset_deleted" => Ok(AuditAction::AssetDeleted),
        "deletion_request_submitted" => Ok(AuditAction::DeletionRequestSubmitted),
        "deletion_request_approved" => Ok(AuditAction::DeletionRequestApproved),
        "deletion_request_rejected" => Ok(AuditAction::DeletionRequestRejected),
        "deletion_request_cancelled" => Ok(AuditAction::DeletionRequestCancelled),
        _ => Err(serde::de::Error::custom(format!("Unknown audit action: {s}"))),
    }
}
