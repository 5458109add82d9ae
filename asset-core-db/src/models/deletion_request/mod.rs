pub mod model;
pub mod transition;

// Re-exports
pub use model::*;
