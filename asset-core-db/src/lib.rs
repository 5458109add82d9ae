pub mod models;
pub mod repository;
pub mod utils;

// Re-exports
pub use models::*;
pub use repository::*;
