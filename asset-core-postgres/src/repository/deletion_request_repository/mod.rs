pub mod create;
pub mod find_pending_by_asset;
pub mod list;
pub mod load;
pub mod load_for_update;
pub mod repo_impl;
pub mod resolve_pending;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::DeletionRequestRepositoryImpl;
