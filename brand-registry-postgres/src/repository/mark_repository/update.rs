use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::MarkModel;
use brand_registry_db::models::IndexAware;
use brand_registry_db::repository::Update;
use sqlx::Postgres;

use super::repo_impl::MarkRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Update<Postgres, MarkModel> for MarkRepositoryImpl {
    async fn update(&self, item: &MarkModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("update mark", e))?;

        let result = sqlx::query(
            r#"
            UPDATE mark SET
                producer_id = $2, parcel_id = $3, trade_type = $4, order_number = $5,
                issued_on = $6, expires_on = $7, brand_description = $8, brand_image = $9,
                predefined_image_id = $10, ear_mark_description = $11, ear_side = $12,
                cattle = $13, horses = $14, mules = $15, donkeys = $16, sheep = $17, goats = $18,
                stamp_value = $19, state = $20, notes = $21,
                carnet_front_url = $22, carnet_back_url = $23, updated_at = $24
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.producer_id)
        .bind(item.parcel_id)
        .bind(item.trade_type)
        .bind(item.order_number)
        .bind(item.issued_on)
        .bind(item.expires_on)
        .bind(item.brand_description.as_str())
        .bind(item.brand_image.as_deref())
        .bind(item.predefined_image_id)
        .bind(item.ear_mark_description.as_deref())
        .bind(item.ear_side)
        .bind(item.livestock.cattle)
        .bind(item.livestock.horses)
        .bind(item.livestock.mules)
        .bind(item.livestock.donkeys)
        .bind(item.livestock.sheep)
        .bind(item.livestock.goats)
        .bind(item.stamp_value)
        .bind(item.state)
        .bind(item.notes.as_deref())
        .bind(item.carnet_front_url.as_deref())
        .bind(item.carnet_back_url.as_deref())
        .bind(item.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("update mark", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("mark {}", item.id)));
        }

        sqlx::query(
            "UPDATE mark_idx SET order_number = $2, producer_id = $3, parcel_id = $4 WHERE id = $1",
        )
        .bind(idx.id)
        .bind(idx.order_number)
        .bind(idx.producer_id)
        .bind(idx.parcel_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("update mark index", e))?;

        tx.commit().await.map_err(|e| map_db_err("update mark", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}
