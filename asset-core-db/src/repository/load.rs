use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading an entity by its ID
///
/// This trait provides a standard interface for loading entities from a data store.
/// Any entity that implements the Identifiable trait can be loaded using this trait.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<Postgres, AssetModel> for AssetRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<Option<AssetModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to load
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The loaded entity
    /// * `Ok(None)` - No entity with that ID exists
    /// * `Err` - An error if the entity could not be loaded
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
