use asset_core_api::domain::{
    deserialize_deletion_request_status, serialize_deletion_request_status, DeletionRequestStatus,
};
use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Represents a pending or resolved request to remove an asset.
///
/// `asset_name` and `asset_cost` are captured when the request is submitted
/// so history survives the asset's deletion; `asset_id` is nulled once the
/// asset row is gone. At most one `pending` request may reference a live
/// asset, enforced by a partial unique index.
///
/// `reviewed_by`, `reviewer_email` and `reviewed_at` are set if and only if
/// the request was approved or rejected. `review_comment` is optional on
/// both paths and round-trips as an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionRequestModel {
    pub id: Uuid,
    pub asset_id: Option<Uuid>,
    pub asset_name: HeaplessString<100>,
    pub asset_cost: Decimal,
    pub requested_by: Uuid,
    pub justification: HeaplessString<500>,
    #[serde(
        serialize_with = "serialize_deletion_request_status",
        deserialize_with = "deserialize_deletion_request_status"
    )]
    pub status: DeletionRequestStatus,
    pub reviewed_by: Option<Uuid>,
    pub reviewer_email: Option<HeaplessString<100>>,
    pub review_comment: Option<HeaplessString<200>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for DeletionRequestModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
