use super::index::Index;

/// Trait for entities that project into an index record
pub trait IndexAware {
    /// The associated index type this entity projects into
    type IndexType: Index;

    /// Builds the index record for this entity
    fn to_index(&self) -> Self::IndexType;
}
