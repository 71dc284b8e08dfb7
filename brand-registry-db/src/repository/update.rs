use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating an existing entity
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement the Identifiable trait
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Overwrite the stored entity and refresh its index record
    async fn update(&self, item: &T) -> RegistryResult<()>;
}
