use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::PredefinedImageModel;
use brand_registry_db::repository::PredefinedImageRepository;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;

use crate::utils::{
    get_heapless_string, get_optional_heapless_string, map_db_err, map_row_err, TryFromRow,
};

pub struct PredefinedImageRepositoryImpl {
    pub pool: PgPool,
}

impl PredefinedImageRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PredefinedImageModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PredefinedImageModel {
            id: row.get("id"),
            name: get_heapless_string(row, "name")?,
            placement: row.get("placement"),
            description: get_optional_heapless_string(row, "description")?,
            image: row.get("image"),
            active: row.get("active"),
        })
    }
}

#[async_trait]
impl PredefinedImageRepository<Postgres> for PredefinedImageRepositoryImpl {
    async fn list_active(&self) -> RegistryResult<Vec<PredefinedImageModel>> {
        let rows = sqlx::query("SELECT * FROM predefined_image WHERE active ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("list predefined images", e))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(
                PredefinedImageModel::try_from_row(&row)
                    .map_err(|e| map_row_err("list predefined images", e))?,
            );
        }
        Ok(items)
    }
}
