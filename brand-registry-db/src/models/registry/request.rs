use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::registry::common_enums::{RequestState, RequestTradeType};
use crate::models::Identifiable;

/// Database model for an administrative request (registration, renewal,
/// transfer, deregistration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestModel {
    pub id: Uuid,

    pub producer_id: Uuid,
    /// Optional mark the request concerns; must belong to the same producer.
    pub mark_id: Option<Uuid>,

    pub trade_type: RequestTradeType,
    pub state: RequestState,
    pub submitted_on: NaiveDate,

    pub attachment_url: Option<HeaplessString<200>>,
    pub notes: Option<HeaplessString<1000>>,
}

impl Identifiable for RequestModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
