use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode any format `image` understands and flatten it to 8-bit RGB.
///
/// Alpha is dropped rather than composited.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(Error::ImageNotFound(path.to_path_buf()));
    }
    let img = image::open(path)?;
    debug!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgb8())
}
