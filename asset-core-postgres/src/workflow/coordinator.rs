//! In-transaction sequences for the deletion workflow.
//!
//! Every function here runs against an already-open unit of work and leaves
//! commit/rollback to the caller. Row locks are always taken in the same
//! order, deletion-request row first, asset row second, so two concurrent
//! reviewers cannot deadlock.

use asset_core_api::domain::{
    Actor, ApprovalOutcome, DeletionRequestEvent, DeletionRequestStatus, ResolutionPath,
};
use asset_core_api::error::{CoreError, CoreResult};
use asset_core_api::service::PolicyGuard;
use asset_core_db::models::asset::AssetModel;
use asset_core_db::models::audit::{AuditAction, AuditEntityType, NewAuditLogEntry};
use asset_core_db::models::deletion_request::DeletionRequestModel;
use asset_core_db::repository::create::Create;
use asset_core_db::repository::delete::Delete;
use chrono::Utc;
use heapless::String as HeaplessString;
use serde_json::json;
use uuid::Uuid;

use crate::postgres_repositories::WorkflowRepositories;

use super::map_storage_error;

/// Comment attached when a direct admin deletion auto-resolves a pending
/// request.
pub const AUTO_APPROVAL_COMMENT: &str = "auto-approved via direct admin deletion";

pub(crate) async fn submit(
    repos: &WorkflowRepositories,
    requester: &Actor,
    asset_id: Uuid,
    justification: HeaplessString<500>,
) -> CoreResult<DeletionRequestModel> {
    let pending = repos
        .deletion_request_repository
        .find_pending_by_asset(asset_id)
        .await
        .map_err(map_storage_error)?;
    let asset = repos
        .asset_repository
        .load_for_update(asset_id)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| CoreError::NotFoundError(format!("asset {asset_id}")))?;

    if !PolicyGuard::can_submit(requester, asset.created_by, pending.is_some()) {
        return Err(CoreError::AuthorizationError(if pending.is_some() {
            format!("a pending deletion request already exists for asset {asset_id}")
        } else {
            format!("only the owner of asset {asset_id} may request its deletion")
        }));
    }

    let now = Utc::now();
    let request = DeletionRequestModel {
        id: Uuid::new_v4(),
        asset_id: Some(asset.id),
        asset_name: asset.name.clone(),
        asset_cost: asset.cost,
        requested_by: requester.person_id,
        justification,
        status: DeletionRequestStatus::Pending,
        reviewed_by: None,
        reviewer_email: None,
        review_comment: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    };

    let created = repos
        .deletion_request_repository
        .create(request)
        .await
        .map_err(map_storage_error)?;
    append_request_event(
        repos,
        AuditAction::DeletionRequestSubmitted,
        &created,
        requester.person_id,
        None,
    )
    .await?;

    Ok(created)
}

pub(crate) async fn cancel(
    repos: &WorkflowRepositories,
    actor: &Actor,
    request_id: Uuid,
) -> CoreResult<DeletionRequestModel> {
    let request = load_request_for_update(repos, request_id).await?;

    if !PolicyGuard::can_cancel(actor, request.requested_by, request.status) {
        if request.status.is_terminal() {
            let status: &str = request.status.into();
            return Err(CoreError::StaleStateError(format!(
                "deletion request {request_id} is already {status}"
            )));
        }
        return Err(CoreError::AuthorizationError(format!(
            "only the original requester may cancel deletion request {request_id}"
        )));
    }

    let cancelled = request.transition(DeletionRequestEvent::Cancel, actor, Utc::now())?;
    resolve(repos, &cancelled).await?;
    append_request_event(
        repos,
        AuditAction::DeletionRequestCancelled,
        &cancelled,
        actor.person_id,
        None,
    )
    .await?;

    Ok(cancelled)
}

/// The atomic approval sequence: delete the asset, mark the request
/// approved, and write the audit trail, all against the caller's open
/// transaction. A request whose asset is already gone is still marked
/// approved, recording that deletion occurred by some path.
pub(crate) async fn approve(
    repos: &WorkflowRepositories,
    reviewer: &Actor,
    request_id: Uuid,
    comment: Option<HeaplessString<200>>,
) -> CoreResult<ApprovalOutcome> {
    let request = load_request_for_update(repos, request_id).await?;
    let original_asset_id = request.asset_id;

    let now = Utc::now();
    let mut approved =
        request.transition(DeletionRequestEvent::Approve { comment }, reviewer, now)?;

    let mut asset_deleted = false;
    if let Some(asset_id) = approved.asset_id.take() {
        if let Some(asset) = repos
            .asset_repository
            .load_for_update(asset_id)
            .await
            .map_err(map_storage_error)?
        {
            repos
                .asset_repository
                .delete(asset_id)
                .await
                .map_err(map_storage_error)?;
            append_asset_deleted(repos, &asset, reviewer.person_id, ResolutionPath::ExplicitReview)
                .await?;
            asset_deleted = true;
        }
    }

    resolve(repos, &approved).await?;
    append_request_event(
        repos,
        AuditAction::DeletionRequestApproved,
        &approved,
        reviewer.person_id,
        Some(ResolutionPath::ExplicitReview),
    )
    .await?;

    Ok(ApprovalOutcome {
        request_id: approved.id,
        asset_id: original_asset_id,
        asset_name: approved.asset_name.clone(),
        asset_cost: approved.asset_cost,
        asset_deleted,
        resolution: ResolutionPath::ExplicitReview,
        reviewed_at: now,
    })
}

/// Same atomicity discipline as approval, minus the asset deletion.
pub(crate) async fn reject(
    repos: &WorkflowRepositories,
    reviewer: &Actor,
    request_id: Uuid,
    comment: Option<HeaplessString<200>>,
) -> CoreResult<DeletionRequestModel> {
    let request = load_request_for_update(repos, request_id).await?;

    let rejected =
        request.transition(DeletionRequestEvent::Reject { comment }, reviewer, Utc::now())?;
    resolve(repos, &rejected).await?;
    append_request_event(
        repos,
        AuditAction::DeletionRequestRejected,
        &rejected,
        reviewer.person_id,
        None,
    )
    .await?;

    Ok(rejected)
}

/// Deletes an asset without a review cycle. A pending request for the
/// asset, if one exists, is auto-resolved to approved in the same
/// transaction so no pending request ever points at a missing asset.
pub(crate) async fn delete_asset_directly(
    repos: &WorkflowRepositories,
    admin: &Actor,
    asset_id: Uuid,
) -> CoreResult<()> {
    let pending = repos
        .deletion_request_repository
        .find_pending_by_asset(asset_id)
        .await
        .map_err(map_storage_error)?;
    let asset = repos
        .asset_repository
        .load_for_update(asset_id)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| CoreError::NotFoundError(format!("asset {asset_id}")))?;

    if let Some(request) = pending {
        let comment = system_comment()?;
        let mut approved = request.transition(
            DeletionRequestEvent::Approve {
                comment: Some(comment),
            },
            admin,
            Utc::now(),
        )?;
        approved.asset_id = None;
        resolve(repos, &approved).await?;
        append_request_event(
            repos,
            AuditAction::DeletionRequestApproved,
            &approved,
            admin.person_id,
            Some(ResolutionPath::DirectAdminDeletion),
        )
        .await?;
    }

    repos
        .asset_repository
        .delete(asset_id)
        .await
        .map_err(map_storage_error)?;
    append_asset_deleted(repos, &asset, admin.person_id, ResolutionPath::DirectAdminDeletion)
        .await?;

    Ok(())
}

async fn load_request_for_update(
    repos: &WorkflowRepositories,
    request_id: Uuid,
) -> CoreResult<DeletionRequestModel> {
    repos
        .deletion_request_repository
        .load_for_update(request_id)
        .await
        .map_err(map_storage_error)?
        .ok_or_else(|| CoreError::NotFoundError(format!("deletion request {request_id}")))
}

async fn resolve(repos: &WorkflowRepositories, request: &DeletionRequestModel) -> CoreResult<()> {
    let updated = repos
        .deletion_request_repository
        .resolve_pending(request)
        .await
        .map_err(map_storage_error)?;
    if updated == 0 {
        return Err(CoreError::StaleStateError(format!(
            "deletion request {} was resolved concurrently",
            request.id
        )));
    }
    Ok(())
}

async fn append_asset_deleted(
    repos: &WorkflowRepositories,
    asset: &AssetModel,
    performed_by: Uuid,
    resolution: ResolutionPath,
) -> CoreResult<()> {
    repos
        .audit_log_repository
        .append(NewAuditLogEntry {
            action: AuditAction::AssetDeleted,
            entity_type: AuditEntityType::Asset,
            entity_id: asset.id,
            snapshot: json!({ "asset": asset, "resolution": resolution.as_str() }),
            performed_by,
        })
        .await
        .map_err(map_storage_error)?;
    Ok(())
}

async fn append_request_event(
    repos: &WorkflowRepositories,
    action: AuditAction,
    request: &DeletionRequestModel,
    performed_by: Uuid,
    resolution: Option<ResolutionPath>,
) -> CoreResult<()> {
    let snapshot = match resolution {
        Some(path) => json!({ "request": request, "resolution": path.as_str() }),
        None => json!({ "request": request }),
    };
    repos
        .audit_log_repository
        .append(NewAuditLogEntry {
            action,
            entity_type: AuditEntityType::DeletionRequest,
            entity_id: request.id,
            snapshot,
            performed_by,
        })
        .await
        .map_err(map_storage_error)?;
    Ok(())
}

fn system_comment() -> CoreResult<HeaplessString<200>> {
    HeaplessString::try_from(AUTO_APPROVAL_COMMENT).map_err(|_| {
        CoreError::ValidationError("system comment exceeds the review comment limit".to_string())
    })
}
