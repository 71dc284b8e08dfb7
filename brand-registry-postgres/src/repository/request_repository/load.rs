use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::RequestModel;
use brand_registry_db::repository::Load;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::RequestRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, RequestModel> for RequestRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<RequestModel> {
        let row = sqlx::query("SELECT * FROM request WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load request", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("request {id}")))?;

        RequestModel::try_from_row(&row).map_err(|e| map_row_err("load request", e))
    }
}
