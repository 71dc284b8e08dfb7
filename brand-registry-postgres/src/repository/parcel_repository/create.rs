use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::ParcelModel;
use brand_registry_db::repository::Create;
use sqlx::Postgres;

use super::repo_impl::ParcelRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Create<Postgres, ParcelModel> for ParcelRepositoryImpl {
    async fn create(&self, item: &ParcelModel) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO parcel
            (id, producer_id, name, district, department, area_hectares, latitude, longitude, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id)
        .bind(item.producer_id)
        .bind(item.name.as_str())
        .bind(item.district.as_str())
        .bind(item.department.as_deref())
        .bind(item.area_hectares)
        .bind(item.latitude)
        .bind(item.longitude)
        .bind(item.notes.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("create parcel", e))?;
        Ok(())
    }
}
