use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use brand_registry_db::models::account::user_profile::UserProfileIdxModelCache;
use brand_registry_db::models::account::{UserProfileIdxModel, UserProfileModel};
use brand_registry_db::repository::UserProfileRepository;
use parking_lot::RwLock;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;

use crate::utils::{
    get_heapless_string, get_optional_heapless_string, map_db_err, map_row_err, TryFromRow,
};

pub struct UserProfileRepositoryImpl {
    pub pool: PgPool,
    pub idx_cache: Arc<RwLock<UserProfileIdxModelCache>>,
}

impl UserProfileRepositoryImpl {
    /// Build the repository, seeding the index cache from the idx table.
    pub async fn new(pool: PgPool) -> RegistryResult<Self> {
        let rows = sqlx::query("SELECT * FROM user_profile_idx")
            .fetch_all(&pool)
            .await
            .map_err(|e| map_db_err("load user profile index", e))?;

        let mut idx_models = Vec::with_capacity(rows.len());
        for row in rows {
            idx_models.push(
                UserProfileIdxModel::try_from_row(&row)
                    .map_err(|e| map_row_err("load user profile index", e))?,
            );
        }

        Ok(Self {
            pool,
            idx_cache: Arc::new(RwLock::new(UserProfileIdxModelCache::new(idx_models))),
        })
    }
}

impl TryFromRow<PgRow> for UserProfileModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserProfileModel {
            id: row.get("id"),
            auth_user_id: row.get("auth_user_id"),
            username: get_heapless_string(row, "username")?,
            email: get_heapless_string(row, "email")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            role: row.get("role"),
            phone: get_optional_heapless_string(row, "phone")?,
            created_at: row.get("created_at"),
        })
    }
}

impl TryFromRow<PgRow> for UserProfileIdxModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserProfileIdxModel {
            id: row.get("id"),
            username_hash: row.try_get("username_hash").ok(),
            email_hash: row.try_get("email_hash").ok(),
        })
    }
}

#[async_trait]
impl UserProfileRepository<Postgres> for UserProfileRepositoryImpl {
    async fn find_by_username_hash(
        &self,
        hash: i64,
    ) -> RegistryResult<Vec<UserProfileIdxModel>> {
        let cache = self.idx_cache.read();
        Ok(cache.get_by_i64_index("username_hash", &hash))
    }

    async fn find_by_email_hash(&self, hash: i64) -> RegistryResult<Vec<UserProfileIdxModel>> {
        let cache = self.idx_cache.read();
        Ok(cache.get_by_i64_index("email_hash", &hash))
    }
}
