use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for persisting a new entity
///
/// The application-level uniqueness checks are pre-flight only; a storage
/// constraint violation at commit time surfaces as `RegistryError::Conflict`.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement the Identifiable trait
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Persist a new entity together with its index record
    async fn create(&self, item: &T) -> RegistryResult<()>;
}
