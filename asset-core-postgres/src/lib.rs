pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;
pub mod workflow;

pub use postgres_repositories::{PostgresRepositories, WorkflowRepositories};
pub use repository::asset_repository::AssetRepositoryImpl;
pub use repository::audit_log_repository::AuditLogRepositoryImpl;
pub use repository::deletion_request_repository::DeletionRequestRepositoryImpl;
pub use workflow::DeletionWorkflowService;

#[cfg(test)]
pub mod test_helper;
