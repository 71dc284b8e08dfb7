use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::{ProducerIdxModel, ProducerModel};
use brand_registry_db::models::registry::producer::ProducerIdxModelCache;
use brand_registry_db::repository::{Page, PageRequest, ProducerFilter, ProducerRepository};
use parking_lot::RwLock;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{
    get_heapless_string, get_optional_heapless_string, map_db_err, map_row_err, TryFromRow,
};

pub struct ProducerRepositoryImpl {
    pub pool: PgPool,
    pub idx_cache: Arc<RwLock<ProducerIdxModelCache>>,
}

impl ProducerRepositoryImpl {
    /// Build the repository, seeding the index cache from the idx table.
    pub async fn new(pool: PgPool) -> RegistryResult<Self> {
        let rows = sqlx::query("SELECT * FROM producer_idx")
            .fetch_all(&pool)
            .await
            .map_err(|e| map_db_err("load producer index", e))?;

        let mut idx_models = Vec::with_capacity(rows.len());
        for row in rows {
            idx_models.push(
                ProducerIdxModel::try_from_row(&row)
                    .map_err(|e| map_row_err("load producer index", e))?,
            );
        }

        Ok(Self {
            pool,
            idx_cache: Arc::new(RwLock::new(ProducerIdxModelCache::new(idx_models))),
        })
    }
}

impl TryFromRow<PgRow> for ProducerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProducerModel {
            id: row.get("id"),
            first_name: get_heapless_string(row, "first_name")?,
            surname: get_heapless_string(row, "surname")?,
            national_id: get_heapless_string(row, "national_id")?,
            tax_id: get_optional_heapless_string(row, "tax_id")?,
            street: get_optional_heapless_string(row, "street")?,
            legacy_parcel_name: get_optional_heapless_string(row, "legacy_parcel_name")?,
            locality: get_heapless_string(row, "locality")?,
            municipality: get_optional_heapless_string(row, "municipality")?,
            department: get_optional_heapless_string(row, "department")?,
            province: get_heapless_string(row, "province")?,
            phone: get_optional_heapless_string(row, "phone")?,
            email: get_optional_heapless_string(row, "email")?,
            latitude: row.try_get("latitude").ok(),
            longitude: row.try_get("longitude").ok(),
            area_hectares: row.try_get("area_hectares").ok(),
            state: row.get("state"),
            registered_at: row.get("registered_at"),
            notes: get_optional_heapless_string(row, "notes")?,
        })
    }
}

impl TryFromRow<PgRow> for ProducerIdxModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProducerIdxModel {
            id: row.get("id"),
            national_id_hash: row.try_get("national_id_hash").ok(),
        })
    }
}

#[async_trait]
impl ProducerRepository<Postgres> for ProducerRepositoryImpl {
    async fn list(
        &self,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<ProducerModel>> {
        Self::list_impl(self, filter, page).await
    }

    async fn load_all(&self) -> RegistryResult<Vec<ProducerModel>> {
        Self::load_all_impl(self).await
    }

    async fn find_by_national_id_hash(&self, hash: i64) -> RegistryResult<Vec<ProducerIdxModel>> {
        Self::find_by_national_id_hash_impl(self, hash).await
    }

    async fn geolocated(&self) -> RegistryResult<Vec<ProducerModel>> {
        Self::geolocated_impl(self).await
    }
}
