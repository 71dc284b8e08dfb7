use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use std::sync::Arc;
use uuid::Uuid;

use super::authorization::{ensure, Action, Actor};
use crate::models::audit::{ChangeLogModel, EntityKind};
use crate::repository::{ChangeLogRepository, Page, PageRequest};

/// Read access to the append-only change log.
pub struct ChangeLogService<DB: Database> {
    change_log: Arc<dyn ChangeLogRepository<DB>>,
}

impl<DB: Database> ChangeLogService<DB> {
    pub fn new(change_log: Arc<dyn ChangeLogRepository<DB>>) -> Self {
        Self { change_log }
    }

    /// Entries ordered by timestamp descending.
    pub async fn list(&self, actor: &Actor, page: PageRequest) -> RegistryResult<Page<ChangeLogModel>> {
        ensure(actor, Action::View)?;
        self.change_log.list(page).await
    }

    /// Full history of one entity, newest first.
    pub async fn history(
        &self,
        actor: &Actor,
        entity_kind: EntityKind,
        entity_id: Uuid,
    ) -> RegistryResult<Vec<ChangeLogModel>> {
        ensure(actor, Action::View)?;
        self.change_log.find_by_entity(entity_kind, entity_id).await
    }
}

impl<DB: Database> Clone for ChangeLogService<DB> {
    fn clone(&self) -> Self {
        Self {
            change_log: self.change_log.clone(),
        }
    }
}
