use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;

use super::{Create, Delete, Load, Page, PageRequest, Update};
use crate::models::registry::{ProducerIdxModel, ProducerModel, ProducerState};

/// List filters for producers.
#[derive(Debug, Clone, Default)]
pub struct ProducerFilter {
    /// Case-insensitive match over first name, surname, national id and the
    /// legacy parcel field.
    pub query: Option<String>,
    pub state: Option<ProducerState>,
    pub locality: Option<String>,
    pub department: Option<String>,
}

/// Repository boundary for producers.
///
/// Listings are ordered by surname then first name.
#[async_trait]
pub trait ProducerRepository<DB: Database>:
    Load<DB, ProducerModel>
    + Create<DB, ProducerModel>
    + Update<DB, ProducerModel>
    + Delete<DB, ProducerModel>
{
    async fn list(
        &self,
        filter: &ProducerFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<ProducerModel>>;

    /// Every producer, ordered by surname then first name.
    async fn load_all(&self) -> RegistryResult<Vec<ProducerModel>>;

    /// Index entries whose national id hashes to `hash`. Pre-flight
    /// uniqueness check only; the unique constraint is authoritative.
    async fn find_by_national_id_hash(&self, hash: i64) -> RegistryResult<Vec<ProducerIdxModel>>;

    /// Producers with both coordinates set, for the map and GeoJSON export.
    async fn geolocated(&self) -> RegistryResult<Vec<ProducerModel>>;
}
