use thiserror::Error;

/// Error taxonomy for the deletion workflow core.
///
/// Expected conditions (validation, authorization, stale state) are returned
/// as values; only infrastructure failures surface as `TransactionError`.
/// The UI layer owns the translation into user-visible messages.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authorization denied: {0}")]
    AuthorizationError(String),

    #[error("Stale state: {0}")]
    StaleStateError(String),

    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
