use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for deleting an entity by its ID
///
/// Cascade rules are a declared property of the persistence schema; deleting
/// a producer removes its parcels, marks and requests at the storage level.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement the Identifiable trait
#[async_trait]
pub trait Delete<DB: Database, T: Identifiable>: Send + Sync {
    /// Delete the entity with the given id
    async fn delete(&self, id: Uuid) -> RegistryResult<()>;
}
