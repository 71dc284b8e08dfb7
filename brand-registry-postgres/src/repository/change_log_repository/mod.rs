pub mod append;
pub mod repo_impl;

pub use repo_impl::ChangeLogRepositoryImpl;
