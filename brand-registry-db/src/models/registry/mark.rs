use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::registry::common_enums::{EarSide, MarkState, TradeType};
use crate::models::{Identifiable, Index, IndexAware};
use crate::{HasPrimaryKey, Indexable};

/// Livestock head counts per species on a mark registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockCounts {
    pub cattle: i32,
    pub horses: i32,
    pub mules: i32,
    pub donkeys: i32,
    pub sheep: i32,
    pub goats: i32,
}

impl LivestockCounts {
    pub fn total(&self) -> i64 {
        [
            self.cattle,
            self.horses,
            self.mules,
            self.donkeys,
            self.sheep,
            self.goats,
        ]
        .iter()
        .map(|&c| c as i64)
        .sum()
    }
}

/// Database model for a brand/ear-mark registration
///
/// # Documentation
/// - The parcel must belong to the same producer as the mark.
/// - `order_number` is unique across marks.
/// - `brand_image` holds the record's own copy of the image bytes, whether
///   uploaded or copied from a predefined reference at save time.
/// - Carnet images live in the file store; only their URLs are kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkModel {
    pub id: Uuid,

    pub producer_id: Uuid,
    pub parcel_id: Uuid,
    pub trade_type: TradeType,

    pub order_number: i64,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,

    pub brand_description: HeaplessString<1000>,
    pub brand_image: Option<Vec<u8>>,
    pub predefined_image_id: Option<Uuid>,

    pub ear_mark_description: Option<HeaplessString<1000>>,
    pub ear_side: Option<EarSide>,

    pub livestock: LivestockCounts,

    pub stamp_value: Option<Decimal>,
    pub state: MarkState,
    pub notes: Option<HeaplessString<1000>>,

    pub carnet_front_url: Option<HeaplessString<200>>,
    pub carnet_back_url: Option<HeaplessString<200>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for MarkModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for Mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkIdxModel {
    pub id: Uuid,
    pub order_number: i64,
    pub producer_id: Uuid,
    pub parcel_id: Uuid,
}

impl HasPrimaryKey for MarkIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl IndexAware for MarkModel {
    type IndexType = MarkIdxModel;

    fn to_index(&self) -> Self::IndexType {
        MarkIdxModel {
            id: self.id,
            order_number: self.order_number,
            producer_id: self.producer_id,
            parcel_id: self.parcel_id,
        }
    }
}

impl Identifiable for MarkIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for MarkIdxModel {}

impl Indexable for MarkIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("order_number".to_string(), Some(self.order_number));
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("producer_id".to_string(), Some(self.producer_id));
        keys.insert("parcel_id".to_string(), Some(self.parcel_id));
        keys
    }
}

pub type MarkIdxModelCache = crate::IdxModelCache<MarkIdxModel>;
