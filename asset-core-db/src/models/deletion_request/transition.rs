use asset_core_api::domain::{Actor, DeletionRequestEvent, DeletionRequestStatus};
use asset_core_api::error::CoreError;
use chrono::{DateTime, Utc};

use super::model::DeletionRequestModel;

impl DeletionRequestModel {
    /// Applies a lifecycle event, returning the updated request.
    ///
    /// Legal transitions: `pending -> approved | rejected | cancelled`.
    /// Anything attempted against a terminal request fails with
    /// `StaleStateError` and leaves the value untouched, which is how a
    /// reviewer that lost a race observes the conflict. Approve/reject
    /// require an admin actor; cancel requires the original requester.
    ///
    /// Callers that persist the result must do so inside the same
    /// transaction that re-read the request, with the row locked.
    pub fn transition(
        mut self,
        event: DeletionRequestEvent,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if self.status.is_terminal() {
            let status: &str = self.status.into();
            return Err(CoreError::StaleStateError(format!(
                "deletion request {} is already {status}",
                self.id
            )));
        }

        match event {
            DeletionRequestEvent::Approve { comment } => {
                self.review(actor, comment, DeletionRequestStatus::Approved, now)
            }
            DeletionRequestEvent::Reject { comment } => {
                self.review(actor, comment, DeletionRequestStatus::Rejected, now)
            }
            DeletionRequestEvent::Cancel => {
                if actor.person_id != self.requested_by {
                    return Err(CoreError::AuthorizationError(format!(
                        "only the original requester may cancel deletion request {}",
                        self.id
                    )));
                }
                self.status = DeletionRequestStatus::Cancelled;
                self.updated_at = now;
                Ok(self)
            }
        }
    }

    fn review(
        mut self,
        actor: &Actor,
        comment: Option<heapless::String<200>>,
        status: DeletionRequestStatus,
        now: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if !actor.is_admin() {
            let verb: &str = status.into();
            return Err(CoreError::AuthorizationError(format!(
                "only an admin may mark deletion request {} as {verb}",
                self.id
            )));
        }
        self.status = status;
        self.reviewed_by = Some(actor.person_id);
        self.reviewer_email = Some(actor.email.clone());
        self.review_comment = comment;
        self.reviewed_at = Some(now);
        self.updated_at = now;
        Ok(self)
    }
}
