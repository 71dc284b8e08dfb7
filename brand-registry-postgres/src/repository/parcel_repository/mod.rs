pub mod create;
pub mod load;
pub mod repo_impl;
pub mod update;

pub use repo_impl::ParcelRepositoryImpl;
