use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::ProducerModel;
use brand_registry_db::repository::Delete;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::ProducerRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Delete<Postgres, ProducerModel> for ProducerRepositoryImpl {
    /// Parcels, marks, requests and the idx rows follow via the declared
    /// ON DELETE CASCADE rules.
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let result = sqlx::query("DELETE FROM producer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("delete producer", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("producer {id}")));
        }

        self.idx_cache.write().remove(&id);
        Ok(())
    }
}
