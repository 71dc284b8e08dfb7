pub mod cache;
pub mod dashboard;
pub mod forms;
pub mod models;
pub mod repository;
pub mod service;
pub mod utils;

pub use cache::{HasPrimaryKey, IdxModelCache, Indexable};

#[cfg(test)]
pub(crate) mod test_support;
