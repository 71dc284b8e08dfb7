use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::MarkModel;
use brand_registry_db::models::IndexAware;
use brand_registry_db::repository::Create;
use sqlx::Postgres;

use super::repo_impl::MarkRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Create<Postgres, MarkModel> for MarkRepositoryImpl {
    async fn create(&self, item: &MarkModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("create mark", e))?;

        sqlx::query(
            r#"
            INSERT INTO mark
            (id, producer_id, parcel_id, trade_type, order_number, issued_on, expires_on,
             brand_description, brand_image, predefined_image_id, ear_mark_description, ear_side,
             cattle, horses, mules, donkeys, sheep, goats,
             stamp_value, state, notes, carnet_front_url, carnet_back_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
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
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("create mark", e))?;

        sqlx::query(
            "INSERT INTO mark_idx (id, order_number, producer_id, parcel_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(idx.id)
        .bind(idx.order_number)
        .bind(idx.producer_id)
        .bind(idx.parcel_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("create mark index", e))?;

        tx.commit().await.map_err(|e| map_db_err("create mark", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}
