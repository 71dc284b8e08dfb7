pub mod change_log_repository;
pub mod db_init;
pub mod mark_repository;
pub mod parcel_repository;
pub mod predefined_image_repository;
pub mod producer_repository;
pub mod request_repository;
pub mod user_profile_repository;

// Re-exports
pub use change_log_repository::*;
pub use mark_repository::*;
pub use parcel_repository::*;
pub use predefined_image_repository::*;
pub use producer_repository::*;
pub use request_repository::*;
pub use user_profile_repository::*;
