use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// Database model for a land parcel ("campo") belonging to a producer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelModel {
    pub id: Uuid,

    /// Owning producer; removal of the producer cascades here.
    pub producer_id: Uuid,

    pub name: HeaplessString<200>,
    pub district: HeaplessString<100>,
    pub department: Option<HeaplessString<100>>,

    pub area_hectares: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,

    pub notes: Option<HeaplessString<1000>>,
}

impl Identifiable for ParcelModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
