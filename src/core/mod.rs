//! Core processing building blocks: layout slots, cover-fit resizing, page
//! composition, content detection, and ratio-aware cropping. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
