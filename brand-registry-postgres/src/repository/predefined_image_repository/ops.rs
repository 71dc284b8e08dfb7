use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::PredefinedImageModel;
use brand_registry_db::repository::{Create, Load, Update};
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::PredefinedImageRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, PredefinedImageModel> for PredefinedImageRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<PredefinedImageModel> {
        let row = sqlx::query("SELECT * FROM predefined_image WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load predefined image", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("predefined image {id}")))?;

        PredefinedImageModel::try_from_row(&row).map_err(|e| map_row_err("load predefined image", e))
    }
}

#[async_trait]
impl Create<Postgres, PredefinedImageModel> for PredefinedImageRepositoryImpl {
    async fn create(&self, item: &PredefinedImageModel) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO predefined_image (id, name, placement, description, image, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.placement)
        .bind(item.description.as_deref())
        .bind(item.image.as_slice())
        .bind(item.active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("create predefined image", e))?;
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, PredefinedImageModel> for PredefinedImageRepositoryImpl {
    async fn update(&self, item: &PredefinedImageModel) -> RegistryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE predefined_image SET
                name = $2, placement = $3, description = $4, image = $5, active = $6
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.placement)
        .bind(item.description.as_deref())
        .bind(item.image.as_slice())
        .bind(item.active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("update predefined image", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!(
                "predefined image {}",
                item.id
            )));
        }
        Ok(())
    }
}
