use asset_core_api::domain::DeletionRequestStatus;
use asset_core_db::models::asset::AssetModel;
use asset_core_db::models::deletion_request::DeletionRequestModel;
use chrono::Utc;
use heapless::String as HeaplessString;
use uuid::Uuid;

pub fn create_test_request(asset: &AssetModel, requested_by: Uuid) -> DeletionRequestModel {
    let now = Utc::now();
    DeletionRequestModel {
        id: Uuid::new_v4(),
        asset_id: Some(asset.id),
        asset_name: asset.name.clone(),
        asset_cost: asset.cost,
        requested_by,
        justification: HeaplessString::try_from("no longer needed").unwrap(),
        status: DeletionRequestStatus::Pending,
        reviewed_by: None,
        reviewer_email: None,
        review_comment: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}
