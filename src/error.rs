//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, decode, resize, and encode errors, and provides
//! semantic variants for layout validation and content detection failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("JPEG encoding error: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),

    #[error("Image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("No content detected in image")]
    NoContentDetected,

    #[error("Output {} would overwrite a page written earlier in this batch", .0.display())]
    OutputCollision(PathBuf),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Layout has {expected} slots but {actual} panels were given")]
    PanelCountMismatch { expected: usize, actual: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Image {width}x{height} exceeds the supported size")]
    ImageTooLarge { width: u32, height: u32 },
}
