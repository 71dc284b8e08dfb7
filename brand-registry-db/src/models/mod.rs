pub mod account;
pub mod audit;
pub mod identifiable;
pub mod index;
pub mod index_aware;
pub mod registry;

// Re-exports
pub use identifiable::*;
pub use index::*;
pub use index_aware::*;
