//! I/O layer: decoding page and panel images, and `writers` for PNG/JPEG
//! outputs and JSON report sidecars.
pub mod loader;
pub use loader::load_rgb;

pub mod writers;
