pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{RegistryRepositories, RegistryServices};

#[cfg(test)]
pub(crate) mod test_helper;
