use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::ProducerModel;
use brand_registry_db::models::IndexAware;
use brand_registry_db::repository::Update;
use sqlx::Postgres;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Update<Postgres, ProducerModel> for ProducerRepositoryImpl {
    async fn update(&self, item: &ProducerModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("update producer", e))?;

        let result = sqlx::query(
            r#"
            UPDATE producer SET
                first_name = $2, surname = $3, national_id = $4, tax_id = $5,
                street = $6, legacy_parcel_name = $7, locality = $8, municipality = $9,
                department = $10, province = $11, phone = $12, email = $13,
                latitude = $14, longitude = $15, area_hectares = $16, state = $17,
                notes = $18
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.first_name.as_str())
        .bind(item.surname.as_str())
        .bind(item.national_id.as_str())
        .bind(item.tax_id.as_deref())
        .bind(item.street.as_deref())
        .bind(item.legacy_parcel_name.as_deref())
        .bind(item.locality.as_str())
        .bind(item.municipality.as_deref())
        .bind(item.department.as_deref())
        .bind(item.province.as_str())
        .bind(item.phone.as_deref())
        .bind(item.email.as_deref())
        .bind(item.latitude)
        .bind(item.longitude)
        .bind(item.area_hectares)
        .bind(item.state)
        .bind(item.notes.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("update producer", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("producer {}", item.id)));
        }

        sqlx::query("UPDATE producer_idx SET national_id_hash = $2 WHERE id = $1")
            .bind(idx.id)
            .bind(idx.national_id_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_err("update producer index", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_err("update producer", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}
