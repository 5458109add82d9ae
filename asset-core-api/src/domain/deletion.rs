use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a deletion request.
///
/// `Pending` is the only non-terminal state. Once a request reaches
/// `Approved`, `Rejected` or `Cancelled` no further mutation is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "deletion_request_status", rename_all = "snake_case")
)]
pub enum DeletionRequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl DeletionRequestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeletionRequestStatus::Pending)
    }
}

impl From<DeletionRequestStatus> for &str {
    fn from(val: DeletionRequestStatus) -> Self {
        match val {
            DeletionRequestStatus::Pending => "pending",
            DeletionRequestStatus::Approved => "approved",
            DeletionRequestStatus::Rejected => "rejected",
            DeletionRequestStatus::Cancelled => "cancelled",
        }
    }
}

pub fn serialize_deletion_request_status<S>(
    status: &DeletionRequestStatus,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str((*status).into())
}

pub fn deserialize_deletion_request_status<'de, D>(
    deserializer: D,
) -> Result<DeletionRequestStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "pending" => Ok(DeletionRequestStatus::Pending),
        "approved" => Ok(DeletionRequestStatus::Approved),
        "rejected" => Ok(DeletionRequestStatus::Rejected),
        "cancelled" => Ok(DeletionRequestStatus::Cancelled),
        _ => Err(serde::de::Error::custom(format!(
            "Unknown deletion request status: {s}"
        ))),
    }
}

/// Review/cancel events accepted by a `pending` request.
///
/// `review_comment` is optional on both approval and rejection; `None` must
/// survive round-trips as an explicit null, distinct from an empty string.
#[derive(Debug, Clone)]
pub enum DeletionRequestEvent {
    Approve { comment: Option<HeaplessString<200>> },
    Reject { comment: Option<HeaplessString<200>> },
    Cancel,
}

/// Input for submitting a new deletion request.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct SubmitDeletionRequest {
    pub asset_id: Uuid,
    #[validate(length(min = 10, message = "justification must be at least 10 characters"))]
    pub justification: String,
}
