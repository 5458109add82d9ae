use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;

use crate::repository::asset_repository::AssetRepositoryImpl;
use crate::repository::audit_log_repository::AuditLogRepositoryImpl;
use crate::repository::deletion_request_repository::DeletionRequestRepositoryImpl;
use crate::unit_of_work::Executor;

/// Factory for transaction-scoped repository sets.
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Open a unit of work: one transaction shared by all repositories.
    ///
    /// The returned set must be finished with `executor.commit()` or
    /// `executor.rollback()`; dropping it uncommitted rolls back.
    pub async fn begin_unit_of_work(
        &self,
    ) -> Result<WorkflowRepositories, Box<dyn Error + Send + Sync>> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(WorkflowRepositories {
            asset_repository: Arc::new(AssetRepositoryImpl::new(executor.clone())),
            deletion_request_repository: Arc::new(DeletionRequestRepositoryImpl::new(
                executor.clone(),
            )),
            audit_log_repository: Arc::new(AuditLogRepositoryImpl::new(executor.clone())),
            executor,
        })
    }
}

/// Repositories sharing a single open transaction.
pub struct WorkflowRepositories {
    pub executor: Executor,
    pub asset_repository: Arc<AssetRepositoryImpl>,
    pub deletion_request_repository: Arc<DeletionRequestRepositoryImpl>,
    pub audit_log_repository: Arc<AuditLogRepositoryImpl>,
}
