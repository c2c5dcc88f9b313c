use image::{GrayImage, Luma, RgbImage};
use tracing::debug;

use crate::types::BoundingBox;

/// ITU-R 601-2 luma in 16-bit fixed point.
#[inline]
pub fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

pub fn grayscale(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        Luma([luma601(p[0], p[1], p[2])])
    })
}

/// Invert the grayscale page and binarize it: content becomes 255, paper 0.
///
/// A pixel counts as content when `255 - gray > 255 - threshold`, so anything
/// at or above `threshold` (near-white compression noise) is dropped.
pub fn content_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    let cutoff = 255 - threshold;
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let inverted = 255 - gray.get_pixel(x, y)[0];
        Luma([if inverted > cutoff { 255 } else { 0 }])
    })
}

/// Minimal box around non-zero pixels, or `None` for an empty mask.
pub fn mask_bbox(mask: &GrayImage) -> Option<BoundingBox> {
    let (width, height) = mask.dimensions();
    let mut left = width;
    let mut top = height;
    let mut right = 0;
    let mut bottom = 0;

    for (y, row) in mask.enumerate_rows() {
        let mut row_hit = false;
        for (x, _, px) in row {
            if px[0] != 0 {
                left = left.min(x);
                right = right.max(x + 1);
                row_hit = true;
            }
        }
        if row_hit {
            top = top.min(y);
            bottom = y + 1;
        }
    }

    (right > left && bottom > top).then_some(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}

pub fn detect_content_bbox(img: &RgbImage, threshold: u8) -> Option<BoundingBox> {
    let mask = content_mask(&grayscale(img), threshold);
    let bbox = mask_bbox(&mask);
    debug!("Content bbox at threshold {}: {:?}", threshold, bbox);
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn page_with_block(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32, ink: u8) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
                Rgb([ink, ink, ink])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn luma_matches_reference_weights() {
        assert_eq!(luma601(255, 255, 255), 255);
        assert_eq!(luma601(0, 0, 0), 0);
        assert_eq!(luma601(255, 0, 0), 76);
        assert_eq!(luma601(0, 255, 0), 150);
        assert_eq!(luma601(0, 0, 255), 29);
    }

    #[test]
    fn finds_exclusive_box_around_ink() {
        let img = page_with_block(200, 300, 40, 60, 150, 250, 0);
        assert_eq!(
            detect_content_bbox(&img, 240),
            Some(BoundingBox {
                left: 40,
                top: 60,
                right: 150,
                bottom: 250
            })
        );
    }

    #[test]
    fn blank_page_has_no_content() {
        let img = RgbImage::from_pixel(64, 64, Rgb([255, 255, 255]));
        assert_eq!(detect_content_bbox(&img, 240), None);
    }

    #[test]
    fn near_white_noise_is_ignored() {
        // 240 sits exactly on the threshold and is treated as paper.
        let noise = page_with_block(50, 50, 5, 5, 45, 45, 240);
        assert_eq!(detect_content_bbox(&noise, 240), None);

        let faint_ink = page_with_block(50, 50, 5, 5, 45, 45, 239);
        assert!(detect_content_bbox(&faint_ink, 240).is_some());
    }

    #[test]
    fn single_pixel_content() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        img.put_pixel(9, 0, Rgb([0, 0, 0]));
        assert_eq!(
            detect_content_bbox(&img, 240),
            Some(BoundingBox {
                left: 9,
                top: 0,
                right: 10,
                bottom: 1
            })
        );
    }
}
