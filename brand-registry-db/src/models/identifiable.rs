use uuid::Uuid;

/// Trait for entities that can be uniquely identified
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
