use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::registry::RequestModel;
use brand_registry_db::repository::Create;
use sqlx::Postgres;

use super::repo_impl::RequestRepositoryImpl;
use crate::utils::map_db_err;

#[async_trait]
impl Create<Postgres, RequestModel> for RequestRepositoryImpl {
    async fn create(&self, item: &RequestModel) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO request
            (id, producer_id, mark_id, trade_type, state, submitted_on, attachment_url, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id)
        .bind(item.producer_id)
        .bind(item.mark_id)
        .bind(item.trade_type)
        .bind(item.state)
        .bind(item.submitted_on)
        .bind(item.attachment_url.as_deref())
        .bind(item.notes.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("create request", e))?;
        Ok(())
    }
}
