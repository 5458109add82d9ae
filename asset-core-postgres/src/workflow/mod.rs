pub mod coordinator;
pub mod service;

pub use service::DeletionWorkflowService;

use asset_core_api::error::CoreError;
use std::error::Error;

/// Translates repository-layer failures into the public taxonomy.
///
/// A unique violation on the pending partial index means two submitters
/// raced; that is a conflict the caller resolves by refreshing, not an
/// infrastructure failure. Everything else (connection loss, statement
/// timeouts) becomes a retryable `TransactionError`.
pub(crate) fn map_storage_error(err: Box<dyn Error + Send + Sync>) -> CoreError {
    if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
        if db_err.code().as_deref() == Some("23505") {
            return CoreError::StaleStateError(
                "a pending deletion request already exists for this asset".to_string(),
            );
        }
    }
    CoreError::TransactionError(err.to_string())
}
