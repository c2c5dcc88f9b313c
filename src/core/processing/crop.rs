use image::{RgbImage, imageops};
use serde::Serialize;
use tracing::info;

use crate::core::params::CropParams;
use crate::core::processing::bbox::detect_content_bbox;
use crate::core::processing::padding::pad_to_ratio;
use crate::error::{Error, Result};
use crate::types::{AspectRatio, BoundingBox, RatioMode};

/// What `crop_borders` measured and produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropOutcome {
    pub original_size: (u32, u32),
    pub content_bbox: BoundingBox,
    /// Content box grown by the padding and clamped to the page
    pub crop_box: BoundingBox,
    pub cropped_size: (u32, u32),
    pub current_ratio: f64,
    pub target_ratio: f64,
    pub ratio_mode: RatioMode,
    pub final_size: (u32, u32),
}

/// Centered region of a `cols`x`rows` image trimmed along its longer side to `ratio`.
pub fn trim_box(cols: u32, rows: u32, ratio: AspectRatio) -> BoundingBox {
    let target = ratio.value();
    let current = cols as f64 / rows as f64;
    if current > target {
        let new_cols = ((rows as f64 * target).round() as u32).clamp(1, cols);
        let left = (cols - new_cols) / 2;
        BoundingBox {
            left,
            top: 0,
            right: left + new_cols,
            bottom: rows,
        }
    } else {
        let new_rows = ((cols as f64 / target).round() as u32).clamp(1, rows);
        let top = (rows - new_rows) / 2;
        BoundingBox {
            left: 0,
            top,
            right: cols,
            bottom: top + new_rows,
        }
    }
}

fn crop_to(img: &RgbImage, bbox: &BoundingBox) -> RgbImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Detect the page content, crop the whitespace around it (keeping
/// `params.padding`), then apply the configured ratio mode.
pub fn crop_borders(img: &RgbImage, params: &CropParams) -> Result<(RgbImage, CropOutcome)> {
    let (width, height) = img.dimensions();
    let content_bbox =
        detect_content_bbox(img, params.threshold).ok_or(Error::NoContentDetected)?;
    info!("Original size: {}x{}", width, height);
    info!("Content bbox: {}", content_bbox);

    let crop_box = content_bbox.expand(params.padding, width, height);
    let cropped = crop_to(img, &crop_box);
    let (cols, rows) = cropped.dimensions();
    let current_ratio = cols as f64 / rows as f64;
    let target_ratio = params.target_ratio.value();
    info!(
        "Cropped size: {}x{}, ratio {:.3} (target {:.3})",
        cols, rows, current_ratio, target_ratio
    );

    let out = match params.ratio_mode {
        RatioMode::Report => cropped,
        RatioMode::Crop => {
            let trim = trim_box(cols, rows, params.target_ratio);
            info!("Trimming to ratio {}: {}", params.target_ratio, trim);
            crop_to(&cropped, &trim)
        }
        RatioMode::Pad => pad_to_ratio(&cropped, params.target_ratio, params.background)?,
    };

    let outcome = CropOutcome {
        original_size: (width, height),
        content_bbox,
        crop_box,
        cropped_size: (cols, rows),
        current_ratio,
        target_ratio,
        ratio_mode: params.ratio_mode,
        final_size: out.dimensions(),
    };
    Ok((out, outcome))
}
