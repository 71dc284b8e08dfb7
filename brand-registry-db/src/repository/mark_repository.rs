use async_trait::async_trait;
use brand_registry_api::error::RegistryResult;
use sqlx::Database;
use uuid::Uuid;

use super::{Create, Delete, Load, Page, PageRequest, Update};
use crate::models::registry::{MarkIdxModel, MarkModel, MarkState, TradeType};

/// List filters for mark registrations.
#[derive(Debug, Clone, Default)]
pub struct MarkFilter {
    /// Case-insensitive match over the producer's names or the order number.
    pub query: Option<String>,
    pub state: Option<MarkState>,
    pub trade_type: Option<TradeType>,
}

/// Repository boundary for brand/ear-mark registrations.
///
/// Listings are ordered by issue date descending.
#[async_trait]
pub trait MarkRepository<DB: Database>:
    Load<DB, MarkModel> + Create<DB, MarkModel> + Update<DB, MarkModel> + Delete<DB, MarkModel>
{
    async fn list(&self, filter: &MarkFilter, page: PageRequest)
        -> RegistryResult<Page<MarkModel>>;

    /// Every mark, ordered by issue date descending.
    async fn load_all(&self) -> RegistryResult<Vec<MarkModel>>;

    /// Marks of one producer, ordered by issue date descending.
    async fn find_by_producer_id(&self, producer_id: Uuid) -> RegistryResult<Vec<MarkModel>>;

    /// Index entries holding an order number. Pre-flight uniqueness check
    /// only; the unique constraint is authoritative.
    async fn find_by_order_number(&self, order_number: i64) -> RegistryResult<Vec<MarkIdxModel>>;

    /// Drop cached index entries of a removed producer. The storage cascade
    /// already deleted the rows; this keeps the pre-flight cache honest.
    async fn evict_for_producer(&self, producer_id: Uuid) -> RegistryResult<()>;
}
