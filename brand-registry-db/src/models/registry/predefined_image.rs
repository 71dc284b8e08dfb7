use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::registry::common_enums::BrandPlacement;
use crate::models::Identifiable;

/// Database model for a predefined brand reference image
///
/// # Documentation
/// - Marks may reference one of these; at save time the bytes are copied
///   into the mark's own image slot, so retiring the reference later never
///   alters an issued record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredefinedImageModel {
    pub id: Uuid,

    pub name: HeaplessString<100>,
    pub placement: BrandPlacement,
    pub description: Option<HeaplessString<1000>>,

    pub image: Vec<u8>,
    pub active: bool,
}

impl Identifiable for PredefinedImageModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
