use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::ParcelModel;
use brand_registry_db::repository::Update;
use sqlx::Postgres;

use super::repo_impl::ParcelRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Update<Postgres, ParcelModel> for ParcelRepositoryImpl {
    async fn update(&self, item: &ParcelModel) -> RegistryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE parcel SET
                name = $2, district = $3, department = $4, area_hectares = $5,
                latitude = $6, longitude = $7, notes = $8
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.district.as_str())
        .bind(item.department.as_deref())
        .bind(item.area_hectares)
        .bind(item.latitude)
        .bind(item.longitude)
        .bind(item.notes.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("update parcel", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("parcel {}", item.id)));
        }
        Ok(())
    }
}
