use uuid::Uuid;

use crate::domain::{Actor, DeletionRequestStatus};

/// Authorization predicates for the deletion workflow.
///
/// Pure functions over caller-supplied state snapshots; no database access.
/// The workflow layer evaluates these before touching any row, and the state
/// machine re-validates actor constraints inside the transaction, so a
/// denial here is never the only line of defense.
pub struct PolicyGuard;

impl PolicyGuard {
    /// An actor may submit a deletion request for an asset they own (admins
    /// may act as owner), provided no pending request already targets it.
    pub fn can_submit(actor: &Actor, asset_owner: Uuid, has_pending_request: bool) -> bool {
        (actor.person_id == asset_owner || actor.is_admin()) && !has_pending_request
    }

    /// Only the original requester may cancel, and only while pending.
    pub fn can_cancel(actor: &Actor, requested_by: Uuid, status: DeletionRequestStatus) -> bool {
        actor.person_id == requested_by && status == DeletionRequestStatus::Pending
    }

    pub fn can_review(actor: &Actor) -> bool {
        actor.is_admin()
    }

    pub fn can_directly_delete(actor: &Actor) -> bool {
        actor.is_admin()
    }
}
