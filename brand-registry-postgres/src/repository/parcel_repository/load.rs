use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::registry::ParcelModel;
use brand_registry_db::repository::{Delete, Load};
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::ParcelRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, ParcelModel> for ParcelRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<ParcelModel> {
        let row = sqlx::query("SELECT * FROM parcel WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load parcel", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("parcel {id}")))?;

        ParcelModel::try_from_row(&row).map_err(|e| map_row_err("load parcel", e))
    }
}

#[async_trait]
impl Delete<Postgres, ParcelModel> for ParcelRepositoryImpl {
    async fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let result = sqlx::query("DELETE FROM parcel WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("delete parcel", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("parcel {id}")));
        }
        Ok(())
    }
}
