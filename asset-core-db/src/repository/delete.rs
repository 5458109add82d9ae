use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting an entity by its ID
///
/// The delete runs against the unit of work currently open on the
/// repository. Returns the number of rows removed so callers can detect a
/// row that was already gone.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait Delete<DB: Database>: Send + Sync {
    /// Delete an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of rows deleted (0 or 1)
    /// * `Err` - An error if the delete could not be executed
    async fn delete(&self, id: Uuid) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
