use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use uuid::Uuid;

use super::{Create, Delete, Load, Page, PageRequest, Update};
use crate::models::registry::{RequestModel, RequestState, RequestTradeType};

/// List filters for administrative requests.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub state: Option<RequestState>,
    pub trade_type: Option<RequestTradeType>,
}

/// Repository boundary for administrative requests.
///
/// Listings are ordered by submission date descending.
#[async_trait]
pub trait RequestRepository<DB: Database>:
    Load<DB, RequestModel>
    + Create<DB, RequestModel>
    + Update<DB, RequestModel>
    + Delete<DB, RequestModel>
{
    async fn list(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RegistryResult<Page<RequestModel>>;

    /// Every request, ordered by submission date descending.
    async fn load_all(&self) -> RegistryResult<Vec<RequestModel>>;

    /// Requests of one producer, ordered by submission date descending.
    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<RequestModel>>;
}
