use asset_core_api::domain::{Actor, ApprovalOutcome, SubmitDeletionRequest};
use asset_core_api::error::{CoreError, CoreResult};
use asset_core_api::service::PolicyGuard;
use asset_core_db::models::audit::AuditLogEntryModel;
use asset_core_db::models::deletion_request::DeletionRequestModel;
use asset_core_db::repository::filter::{AuditLogFilter, DeletionRequestFilter};
use asset_core_db::repository::pagination::{Page, PageRequest};
use heapless::String as HeaplessString;
use uuid::Uuid;
use validator::Validate;

use crate::postgres_repositories::{PostgresRepositories, WorkflowRepositories};

use super::{coordinator, map_storage_error};

/// Boundary service for the asset deletion-request workflow.
///
/// Each operation validates input and authorization, opens one unit of
/// work, runs the coordinator sequence against it, and commits or rolls
/// back as a whole. No partial effects survive a failure; expected
/// conditions come back as `CoreError` values rather than panics.
pub struct DeletionWorkflowService {
    repositories: PostgresRepositories,
}

impl DeletionWorkflowService {
    pub fn new(repositories: PostgresRepositories) -> Self {
        Self { repositories }
    }

    pub async fn submit_deletion_request(
        &self,
        command: SubmitDeletionRequest,
        requester: &Actor,
    ) -> CoreResult<DeletionRequestModel> {
        require_identity(requester)?;
        command
            .validate()
            .map_err(|err| CoreError::ValidationError(err.to_string()))?;
        let justification = bounded_justification(&command.justification)?;

        let repos = self.begin().await?;
        let result =
            coordinator::submit(&repos, requester, command.asset_id, justification).await;
        let created = finish(repos, result).await?;

        tracing::info!(
            request_id = %created.id,
            asset_id = %command.asset_id,
            requested_by = %requester.person_id,
            "deletion request submitted"
        );
        Ok(created)
    }

    pub async fn cancel_deletion_request(
        &self,
        request_id: Uuid,
        actor: &Actor,
    ) -> CoreResult<()> {
        require_identity(actor)?;

        let repos = self.begin().await?;
        let result = coordinator::cancel(&repos, actor, request_id).await;
        finish(repos, result).await?;

        tracing::info!(request_id = %request_id, "deletion request cancelled");
        Ok(())
    }

    pub async fn approve_deletion_request(
        &self,
        request_id: Uuid,
        reviewer: &Actor,
        comment: Option<&str>,
    ) -> CoreResult<ApprovalOutcome> {
        require_identity(reviewer)?;
        if !PolicyGuard::can_review(reviewer) {
            tracing::warn!(request_id = %request_id, reviewer = %reviewer.person_id, "approval denied: reviewer is not an admin");
            return Err(CoreError::AuthorizationError(
                "only an admin may review deletion requests".to_string(),
            ));
        }
        let comment = bounded_comment(comment)?;

        let repos = self.begin().await?;
        let result = coordinator::approve(&repos, reviewer, request_id, comment).await;
        let outcome = finish(repos, result).await?;

        tracing::info!(
            request_id = %request_id,
            asset_deleted = outcome.asset_deleted,
            "deletion request approved"
        );
        Ok(outcome)
    }

    pub async fn reject_deletion_request(
        &self,
        request_id: Uuid,
        reviewer: &Actor,
        comment: Option<&str>,
    ) -> CoreResult<()> {
        require_identity(reviewer)?;
        if !PolicyGuard::can_review(reviewer) {
            tracing::warn!(request_id = %request_id, reviewer = %reviewer.person_id, "rejection denied: reviewer is not an admin");
            return Err(CoreError::AuthorizationError(
                "only an admin may review deletion requests".to_string(),
            ));
        }
        let comment = bounded_comment(comment)?;

        let repos = self.begin().await?;
        let result = coordinator::reject(&repos, reviewer, request_id, comment).await;
        finish(repos, result).await?;

        tracing::info!(request_id = %request_id, "deletion request rejected");
        Ok(())
    }

    pub async fn delete_asset_directly(&self, asset_id: Uuid, admin: &Actor) -> CoreResult<()> {
        require_identity(admin)?;
        if !PolicyGuard::can_directly_delete(admin) {
            tracing::warn!(asset_id = %asset_id, actor = %admin.person_id, "direct deletion denied: actor is not an admin");
            return Err(CoreError::AuthorizationError(
                "only an admin may delete an asset directly".to_string(),
            ));
        }

        let repos = self.begin().await?;
        let result = coordinator::delete_asset_directly(&repos, admin, asset_id).await;
        finish(repos, result).await?;

        tracing::info!(asset_id = %asset_id, "asset deleted directly");
        Ok(())
    }

    pub async fn list_deletion_requests(
        &self,
        filter: &DeletionRequestFilter,
        page: PageRequest,
    ) -> CoreResult<Page<DeletionRequestModel>> {
        let repos = self.begin().await?;
        let result = repos
            .deletion_request_repository
            .list(filter, page)
            .await
            .map_err(map_storage_error);
        let _ = repos.executor.rollback().await;
        result
    }

    pub async fn list_audit_logs(
        &self,
        filter: &AuditLogFilter,
        page: PageRequest,
    ) -> CoreResult<Page<AuditLogEntryModel>> {
        let repos = self.begin().await?;
        let result = repos
            .audit_log_repository
            .list(filter, page)
            .await
            .map_err(map_storage_error);
        let _ = repos.executor.rollback().await;
        result
    }

    async fn begin(&self) -> CoreResult<WorkflowRepositories> {
        self.repositories
            .begin_unit_of_work()
            .await
            .map_err(map_storage_error)
    }
}

/// Commits on success, rolls back on failure. The rollback result is logged
/// but never masks the original error.
async fn finish<T>(repos: WorkflowRepositories, result: CoreResult<T>) -> CoreResult<T> {
    match result {
        Ok(value) => {
            repos.executor.commit().await.map_err(map_storage_error)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = repos.executor.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback after failed operation also failed");
            }
            Err(err)
        }
    }
}

fn require_identity(actor: &Actor) -> CoreResult<()> {
    if actor.person_id.is_nil() {
        return Err(CoreError::ValidationError(
            "an identified actor is required".to_string(),
        ));
    }
    Ok(())
}

fn bounded_justification(justification: &str) -> CoreResult<HeaplessString<500>> {
    HeaplessString::try_from(justification).map_err(|_| {
        CoreError::ValidationError("justification is too long (max 500 characters)".to_string())
    })
}

fn bounded_comment(comment: Option<&str>) -> CoreResult<Option<HeaplessString<200>>> {
    comment
        .map(|text| {
            HeaplessString::try_from(text).map_err(|_| {
                CoreError::ValidationError(
                    "review comment is too long (max 200 characters)".to_string(),
                )
            })
        })
        .transpose()
}
