use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating a single entity
///
/// The insert runs against the unit of work currently open on the
/// repository, so it commits or rolls back with the surrounding operation.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Persist a new entity
    ///
    /// # Arguments
    /// * `item` - The entity to create
    ///
    /// # Returns
    /// * `Ok(T)` - The created entity
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
