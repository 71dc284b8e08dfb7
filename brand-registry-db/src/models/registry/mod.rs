pub mod common_enums;
pub mod mark;
pub mod parcel;
pub mod predefined_image;
pub mod producer;
pub mod request;

// Re-exports
pub use common_enums::*;
pub use mark::*;
pub use parcel::*;
pub use predefined_image::*;
pub use producer::*;
pub use request::*;
