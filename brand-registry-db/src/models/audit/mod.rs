pub mod change_log;
pub mod entity_kind;

pub use change_log::*;
pub use entity_kind::*;
