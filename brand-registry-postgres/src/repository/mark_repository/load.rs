use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::MarkModel;
use brand_registry_db::repository::Load;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::MarkRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, MarkModel> for MarkRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<MarkModel> {
        let row = sqlx::query("SELECT * FROM mark WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load mark", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("mark {id}")))?;

        MarkModel::try_from_row(&row).map_err(|e| map_row_err("load mark", e))
    }
}
