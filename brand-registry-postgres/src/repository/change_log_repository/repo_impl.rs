use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::audit::{ChangeLogModel, EntityKind};
use brand_registry_db::repository::{ChangeLogRepository, Page, PageRequest};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{map_db_err, map_row_err, TryFromRow};

/// Append-only change log store: entries are inserted and read back, never
/// updated or deleted.
pub struct ChangeLogRepositoryImpl {
    pub pool: PgPool,
}

impl ChangeLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ChangeLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ChangeLogModel {
            id: row.get("id"),
            entity_kind: row.get("entity_kind"),
            entity_id: row.get("entity_id"),
            action: row.get("action"),
            actor_id: row.try_get("actor_id").ok(),
            recorded_at: row.get("recorded_at"),
            snapshot: row.get("snapshot"),
            snapshot_hash: row.get("snapshot_hash"),
        })
    }
}

#[async_trait]
impl ChangeLogRepository<Postgres> for ChangeLogRepositoryImpl {
    async fn append(&self, entry: &ChangeLogModel) -> RegistryResult<()> {
        Self::append_impl(self, entry).await
    }

    async fn list(&self, page: PageRequest) -> RegistryResult<Page<ChangeLogModel>> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM change_log")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_err("count change log", e))?
            .get("total");

        let rows = sqlx::query(
            "SELECT * FROM change_log ORDER BY recorded_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("list change log", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(
                ChangeLogModel::try_from_row(&row).map_err(|e| map_row_err("list change log", e))?,
            );
        }
        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }

    async fn find_by_entity(
        &self,
        entity_kind: EntityKind,
        entity_id: Uuid,
    ) -> RegistryResult<Vec<ChangeLogModel>> {
        let rows = sqlx::query(
            "SELECT * FROM change_log WHERE entity_kind = $1 AND entity_id = $2 ORDER BY recorded_at DESC",
        )
        .bind(entity_kind)
        .bind(entity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("load entity history", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(
                ChangeLogModel::try_from_row(&row)
                    .map_err(|e| map_row_err("load entity history", e))?,
            );
        }
        Ok(items)
    }
}
