use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::mark::MarkIdxModelCache;
use brand_registry_db::models::registry::{LivestockCounts, MarkIdxModel, MarkModel};
use brand_registry_db::repository::{MarkFilter, MarkRepository, Page, PageRequest};
use parking_lot::RwLock;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::utils::{
    get_heapless_string, get_optional_heapless_string, map_db_err, map_row_err, TryFromRow,
};

pub struct MarkRepositoryImpl {
    pub pool: PgPool,
    pub idx_cache: Arc<RwLock<MarkIdxModelCache>>,
}

impl MarkRepositoryImpl {
    /// Build the repository, seeding the index cache from the idx table.
    pub async fn new(pool: PgPool) -> RegistryResult<Self> {
        let rows = sqlx::query("SELECT * FROM mark_idx")
            .fetch_all(&pool)
            .await
            .map_err(|e| map_db_err("load mark index", e))?;

        let mut idx_models = Vec::with_capacity(rows.len());
        for row in rows {
            idx_models.push(
                MarkIdxModel::try_from_row(&row).map_err(|e| map_row_err("load mark index", e))?,
            );
        }

        Ok(Self {
            pool,
            idx_cache: Arc::new(RwLock::new(MarkIdxModelCache::new(idx_models))),
        })
    }
}

impl TryFromRow<PgRow> for MarkModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(MarkModel {
            id: row.get("id"),
            producer_id: row.get("producer_id"),
            parcel_id: row.get("parcel_id"),
            trade_type: row.get("trade_type"),
            order_number: row.get("order_number"),
            issued_on: row.get("issued_on"),
            expires_on: row.try_get("expires_on").ok(),
            brand_description: get_heapless_string(row, "brand_description")?,
            brand_image: row.try_get("brand_image").ok(),
            predefined_image_id: row.try_get("predefined_image_id").ok(),
            ear_mark_description: get_optional_heapless_string(row, "ear_mark_description")?,
            ear_side: row.try_get("ear_side").ok(),
            livestock: LivestockCounts {
                cattle: row.get("cattle"),
                horses: row.get("horses"),
                mules: row.get("mules"),
                donkeys: row.get("donkeys"),
                sheep: row.get("sheep"),
                goats: row.get("goats"),
            },
            stamp_value: row.try_get("stamp_value").ok(),
            state: row.get("state"),
            notes: get_optional_heapless_string(row, "notes")?,
            carnet_front_url: get_optional_heapless_string(row, "carnet_front_url")?,
            carnet_back_url: get_optional_heapless_string(row, "carnet_back_url")?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

impl TryFromRow<PgRow> for MarkIdxModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(MarkIdxModel {
            id: row.get("id"),
            order_number: row.get("order_number"),
            producer_id: row.get("producer_id"),
            parcel_id: row.get("parcel_id"),
        })
    }
}

#[async_trait]
impl MarkRepository<Postgres> for MarkRepositoryImpl {
    async fn list(
        &self,
        filter: &MarkFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<MarkModel>> {
        Self::list_impl(self, filter, page).await
    }

    async fn load_all(&self) -> RegistryResult<Vec<MarkModel>> {
        Self::load_all_impl(self).await
    }

    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<MarkModel>> {
        Self::find_by_producer_id_impl(self, producer_id).await
    }

    async fn find_by_order_number(&self, order_number: i64) -> RegistryResult<Vec<MarkIdxModel>> {
        let cache = self.idx_cache.read();
        Ok(cache.get_by_i64_index("order_number", &order_number))
    }

    async fn evict_for_producer(&self, producer_id: Uuid) -> RegistryResult<()> {
        let evicted = self
            .idx_cache
            .write()
            .remove_by_uuid_index("producer_id", &producer_id);
        tracing::debug!(producer = %producer_id, evicted, "mark index cache evicted");
        Ok(())
    }
}
