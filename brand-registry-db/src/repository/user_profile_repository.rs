use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;

use super::{Create, Load, Update};
use crate::models::account::{UserProfileIdxModel, UserProfileModel};

/// Repository boundary for user profiles.
#[async_trait]
pub trait UserProfileRepository<DB: Database>:
    Load<DB, UserProfileModel> + Create<DB, UserProfileModel> + Update<DB, UserProfileModel>
{
    /// Index entries whose username hashes to `hash`.
    async fn find_by_username_hash(&self, hash: i64)
        -> RegistryResult<Vec<UserProfileIdxModel>>;

    /// Index entries whose email hashes to `hash`.
    async fn find_by_email_hash(&self, hash: i64) -> RegistryResult<Vec<UserProfileIdxModel>>;
}
