use image::{Rgb, RgbImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::AspectRatio;

/// Longest side padding may grow an image to.
pub const MAX_PADDED_SIDE: u32 = 65_535;

/// Smallest canvas that contains `cols`x`rows` and matches `ratio`.
pub fn padded_dimensions(cols: u32, rows: u32, ratio: AspectRatio) -> (u32, u32) {
    let target = ratio.value();
    let current = cols as f64 / rows as f64;
    if current > target {
        (cols, ((cols as f64 / target).round() as u32).max(rows))
    } else {
        (((rows as f64 * target).round() as u32).max(cols), rows)
    }
}

/// Center `img` on a background canvas extended to `ratio`.
///
/// Fails with `ImageTooLarge` when an extreme ratio would grow a side past
/// `MAX_PADDED_SIDE`.
pub fn pad_to_ratio(img: &RgbImage, ratio: AspectRatio, background: [u8; 3]) -> Result<RgbImage> {
    let (cols, rows) = img.dimensions();
    let (out_cols, out_rows) = padded_dimensions(cols, rows, ratio);
    let grows_past_limit = |before: u32, after: u32| after > before && after > MAX_PADDED_SIDE;
    if grows_past_limit(cols, out_cols) || grows_past_limit(rows, out_rows) {
        return Err(Error::ImageTooLarge {
            width: out_cols,
            height: out_rows,
        });
    }
    let pad_cols = (out_cols - cols) / 2;
    let pad_rows = (out_rows - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", out_cols, out_rows);

    let mut padded = RgbImage::from_pixel(out_cols, out_rows, Rgb(background));
    let src = img.as_raw();
    let dst = &mut *padded;
    let src_stride = cols as usize * 3;
    let dst_stride = out_cols as usize * 3;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows as usize {
        let src_offset = row * src_stride;
        let dst_offset = (row + pad_rows as usize) * dst_stride + pad_cols as usize * 3;
        dst[dst_offset..dst_offset + src_stride]
            .copy_from_slice(&src[src_offset..src_offset + src_stride]);
    }
    Ok(padded)
}
