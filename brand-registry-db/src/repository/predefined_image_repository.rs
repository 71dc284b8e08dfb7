use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;

use super::{Create, Load, Update};
use crate::models::registry::PredefinedImageModel;

/// Repository boundary for predefined brand reference images.
#[async_trait]
pub trait PredefinedImageRepository<DB: Database>:
    Load<DB, PredefinedImageModel> + Create<DB, PredefinedImageModel> + Update<DB, PredefinedImageModel>
{
    /// Active reference images, ordered by name.
    async fn list_active(&self) -> RegistryResult<Vec<PredefinedImageModel>>;
}
