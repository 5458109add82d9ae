use crate::unit_of_work::Executor;

/// Append-only writer and reader for the audit trail.
///
/// Entries are written against the unit of work currently open, never as an
/// independently committed side effect, so an entry exists if and only if
/// the operation it documents committed.
pub struct AuditLogRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AuditLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
