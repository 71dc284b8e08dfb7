use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::MarkModel;
use brand_registry_db::repository::Delete;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::MarkRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Delete<Postgres, MarkModel> for MarkRepositoryImpl {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let result = sqlx::query("DELETE FROM mark WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("delete mark", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("mark {id}")));
        }

        self.idx_cache.write().remove(&id);
        Ok(())
    }
}
