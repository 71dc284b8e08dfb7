use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::ProducerModel;
use brand_registry_db::repository::Load;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, ProducerModel> for ProducerRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<ProducerModel> {
        let row = sqlx::query("SELECT * FROM producer WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load producer", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("producer {id}")))?;

        ProducerModel::try_from_row(&row).map_err(|e| map_row_err("load producer", e))
    }
}
