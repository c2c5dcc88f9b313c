pub mod jpeg;
pub mod png;
pub mod report;

pub use report::write_report_sidecar;

use std::path::Path;

use image::RgbImage;

use crate::error::Result;
use crate::types::OutputFormat;

/// Encode `img` to `output` in the requested format, creating parent
/// directories as needed.
pub fn write_image(output: &Path, img: &RgbImage, format: OutputFormat) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    match format {
        OutputFormat::Png => png::write_rgb_png(output, img),
        OutputFormat::Jpeg => jpeg::write_rgb_jpeg(output, img, jpeg::DEFAULT_QUALITY),
    }
}
