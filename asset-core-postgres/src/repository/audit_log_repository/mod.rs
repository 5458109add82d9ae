pub mod append;
pub mod list;
pub mod repo_impl;

pub use repo_impl::AuditLogRepositoryImpl;
