use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::RequestModel;
use brand_registry_db::repository::{Delete, Update};
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::RequestRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Update<Postgres, RequestModel> for RequestRepositoryImpl {
    async fn update(&self, item: &RequestModel) -> RegistryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE request SET
                mark_id = $2, trade_type = $3, state = $4, attachment_url = $5, notes = $6
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.mark_id)
        .bind(item.trade_type)
        .bind(item.state)
        .bind(item.attachment_url.as_deref())
        .bind(item.notes.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("update request", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("request {}", item.id)));
        }
        Ok(())
    }
}

#[async_trait]
impl Delete<Postgres, RequestModel> for RequestRepositoryImpl {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let result = sqlx::query("DELETE FROM request WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("delete request", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("request {id}")));
        }
        Ok(())
    }
}
