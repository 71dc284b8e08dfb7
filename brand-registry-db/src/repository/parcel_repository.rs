use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use uuid::Uuid;

use super::{Create, Delete, Load, Update};
use crate::models::registry::ParcelModel;

/// Repository boundary for land parcels.
#[async_trait]
pub trait ParcelRepository<DB: Database>:
    Load<DB, ParcelModel> + Create<DB, ParcelModel> + Update<DB, ParcelModel> + Delete<DB, ParcelModel>
{
    /// Parcels owned by one producer, ordered by name.
    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<ParcelModel>>;

    /// Total parcel count (dashboard).
    async fn count(&self) -> RegistryResult<usize>;
}
