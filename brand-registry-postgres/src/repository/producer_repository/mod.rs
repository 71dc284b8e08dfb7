pub mod create;
pub mod delete;
pub mod find_by_national_id_hash;
pub mod list;
pub mod load;
pub mod repo_impl;
pub mod update;

pub use repo_impl::ProducerRepositoryImpl;
