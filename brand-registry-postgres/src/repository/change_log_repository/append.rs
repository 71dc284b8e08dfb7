use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::audit::ChangeLogModel;

use super::repo_impl::ChangeLogRepositoryImpl;
use crate::utils::map_db_err;

impl ChangeLogRepositoryImpl {
    pub(super) async fn append_impl(&self, entry: &ChangeLogModel) -> RegistryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO change_log
            (id, entity_kind, entity_id, action, actor_id, recorded_at, snapshot, snapshot_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id)
        .bind(entry.entity_kind)
        .bind(entry.entity_id)
        .bind(entry.action)
        .bind(entry.actor_id)
        .bind(entry.recorded_at)
        .bind(&entry.snapshot)
        .bind(entry.snapshot_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("append change log", e))?;
        Ok(())
    }
}
