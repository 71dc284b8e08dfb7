use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::ProducerModel;
use brand_registry_db::models::IndexAware;
use brand_registry_db::repository::Create;
use sqlx::Postgres;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Create<Postgres, ProducerModel> for ProducerRepositoryImpl {
    async fn create(&self, item: &ProducerModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("create producer", e))?;

        sqlx::query(
            r#"
            INSERT INTO producer
            (id, first_name, surname, national_id, tax_id, street, legacy_parcel_name, locality, municipality, department, province, phone, email, latitude, longitude, area_hectares, state, registered_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
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
        .bind(item.registered_at)
        .bind(item.notes.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("create producer", e))?;

        sqlx::query("INSERT INTO producer_idx (id, national_id_hash) VALUES ($1, $2)")
            .bind(idx.id)
            .bind(idx.national_id_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_err("create producer index", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_err("create producer", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}
