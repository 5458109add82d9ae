use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a deletion request reached its `approved` state.
///
/// Recorded in audit snapshots so downstream analytics can distinguish a
/// reviewed approval from the auto-resolution performed when an admin
/// deletes the asset directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionPath {
    ExplicitReview,
    DirectAdminDeletion,
}

impl ResolutionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPath::ExplicitReview => "explicit_review",
            ResolutionPath::DirectAdminDeletion => "direct_admin_deletion",
        }
    }
}

/// Result of a successful approval, reported back to the caller.
///
/// `asset_name` and `asset_cost` are the snapshot captured at request time,
/// so the caller can display what was removed even though the asset row is
/// gone. `asset_deleted` is false when a concurrent direct deletion removed
/// the asset before the approval ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    pub request_id: Uuid,
    pub asset_id: Option<Uuid>,
    pub asset_name: HeaplessString<100>,
    pub asset_cost: Decimal,
    pub asset_deleted: bool,
    pub resolution: ResolutionPath,
    pub reviewed_at: DateTime<Utc>,
}
