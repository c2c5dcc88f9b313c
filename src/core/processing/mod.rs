pub mod bbox;
pub mod compose;
pub mod crop;
pub mod layout;
pub mod padding;
pub mod resize;
