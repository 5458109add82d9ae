use asset_core_api::domain::DeletionRequestStatus;
use uuid::Uuid;

use crate::models::audit::{AuditAction, AuditEntityType};

/// Read-side filter for listing deletion requests.
///
/// All fields are optional; `None` means "any". Consumed by the display
/// layer, which filters but never mutates through this path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionRequestFilter {
    pub status: Option<DeletionRequestStatus>,
    pub requested_by: Option<Uuid>,
}

/// Read-side filter for listing audit log entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditLogFilter {
    pub action: Option<AuditAction>,
    pub entity_type: Option<AuditEntityType>,
    pub entity_id: Option<Uuid>,
    pub performed_by: Option<Uuid>,
}
