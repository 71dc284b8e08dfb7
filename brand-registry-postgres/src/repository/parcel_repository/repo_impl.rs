use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::ParcelModel;
use brand_registry_db::repository::ParcelRepository;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{
    get_heapless_string, get_optional_heapless_string, map_db_err, map_row_err, TryFromRow,
};

pub struct ParcelRepositoryImpl {
    pub pool: PgPool,
}

impl ParcelRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ParcelModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ParcelModel {
            id: row.get("id"),
            producer_id: row.get("producer_id"),
            name: get_heapless_string(row, "name")?,
            district: get_heapless_string(row, "district")?,
            department: get_optional_heapless_string(row, "department")?,
            area_hectares: row.try_get("area_hectares").ok(),
            latitude: row.try_get("latitude").ok(),
            longitude: row.try_get("longitude").ok(),
            notes: get_optional_heapless_string(row, "notes")?,
        })
    }
}

#[async_trait]
impl ParcelRepository<Postgres> for ParcelRepositoryImpl {
    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<ParcelModel>> {
        let rows = sqlx::query("SELECT * FROM parcel WHERE producer_id = $1 ORDER BY name")
            .bind(producer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("list parcels", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ParcelModel::try_from_row(&row).map_err(|e| map_row_err("list parcels", e))?);
        }
        Ok(items)
    }

    async fn count(&self) -> RegistryResult<usize> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS total FROM parcel")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_err("count parcels", e))?
            .get("total");
        Ok(total as usize)
    }
}
