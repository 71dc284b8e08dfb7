use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::registry::common_enums::ProducerState;
use crate::models::{Identifiable, Index, IndexAware};
use crate::utils::hash_as_i64;
use crate::{HasPrimaryKey, Indexable};

/// Database model for a registered livestock producer
///
/// # Documentation
/// - National id is stored normalized (bare digits) and is unique.
/// - `legacy_parcel_name` carries the pre-parcel single-field value and is
///   the seed for the auto-derived default parcel.
/// - Coordinates are optional on the model (legacy rows); form validation
///   requires them for new submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerModel {
    pub id: Uuid,

    pub first_name: HeaplessString<100>,
    pub surname: HeaplessString<100>,
    pub national_id: HeaplessString<15>,
    pub tax_id: Option<HeaplessString<20>>,

    pub street: Option<HeaplessString<200>>,
    pub legacy_parcel_name: Option<HeaplessString<200>>,
    pub locality: HeaplessString<100>,
    pub municipality: Option<HeaplessString<100>>,
    pub department: Option<HeaplessString<100>>,
    pub province: HeaplessString<100>,

    pub phone: Option<HeaplessString<30>>,
    pub email: Option<HeaplessString<100>>,

    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub area_hectares: Option<Decimal>,

    pub state: ProducerState,
    pub registered_at: DateTime<Utc>,
    pub notes: Option<HeaplessString<1000>>,
}

impl ProducerModel {
    /// "Surname, First" display form used by lists, the map and the report.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.surname, self.first_name)
    }

    pub fn full_address(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(street) = &self.street {
            parts.push(street.as_str());
        }
        parts.push(self.locality.as_str());
        if let Some(municipality) = &self.municipality {
            parts.push(municipality.as_str());
        }
        if let Some(department) = &self.department {
            parts.push(department.as_str());
        }
        parts.push(self.province.as_str());
        parts.join(", ")
    }

    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl Identifiable for ProducerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for Producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducerIdxModel {
    pub id: Uuid,
    pub national_id_hash: Option<i64>,
}

impl HasPrimaryKey for ProducerIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl IndexAware for ProducerModel {
    type IndexType = ProducerIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let national_id_hash = hash_as_i64(&self.national_id.as_str()).ok();

        ProducerIdxModel {
            id: self.id,
            national_id_hash,
        }
    }
}

impl Identifiable for ProducerIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for ProducerIdxModel {}

impl Indexable for ProducerIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("national_id_hash".to_string(), self.national_id_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

pub type ProducerIdxModelCache = crate::IdxModelCache<ProducerIdxModel>;
