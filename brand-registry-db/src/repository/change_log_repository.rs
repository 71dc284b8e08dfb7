use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use uuid::Uuid;

use super::{Page, PageRequest};
use crate::models::audit::{ChangeLogModel, EntityKind};

/// Repository boundary for the append-only change log.
///
/// Deliberately narrower than the other repositories: entries are written
/// once and only ever read back, so no update or delete is exposed.
#[async_trait]
pub trait ChangeLogRepository<DB: Database>: Send + Sync {
    /// Append one entry.
    async fn append(&self, entry: &ChangeLogModel) -> RegistryResult<()>;

    /// Entries ordered by timestamp descending.
    async fn list(&self, page: PageRequest) -> RegistryResult<Page<ChangeLogModel>>;

    /// History of one entity, ordered by timestamp descending.
    async fn find_by_entity(
        &self,
        entity_kind: EntityKind,
        entity_id: Uuid,
    ) -> RegistryResult<Vec<ChangeLogModel>>;
}
