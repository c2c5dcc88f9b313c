use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

fn resize_alg(filter: ResampleFilter) -> ResizeAlg {
    match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Centered source region with the same aspect ratio as a `target_w`x`target_h` box.
///
/// Returns `(left, top, width, height)` in source pixels; fractional so the
/// resampler can honor sub-pixel crops.
pub fn cover_crop_box(
    src_w: u32,
    src_h: u32,
    target_w: u32,
    target_h: u32,
) -> (f64, f64, f64, f64) {
    let src_w = src_w as f64;
    let src_h = src_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;
    let src_ratio = src_w / src_h;

    let (crop_w, crop_h) = if src_ratio > target_ratio {
        (src_h * target_ratio, src_h)
    } else {
        (src_w, src_w / target_ratio)
    };

    ((src_w - crop_w) * 0.5, (src_h - crop_h) * 0.5, crop_w, crop_h)
}

pub fn resize_rgb_region(
    img: &RgbImage,
    crop: (f64, f64, f64, f64),
    target_w: u32,
    target_h: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    let (left, top, width, height) = crop;
    let resize_options = ResizeOptions::new()
        .resize_alg(resize_alg(filter))
        .crop(left, top, width, height);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        img.width(),
        img.height(),
        img.as_raw().to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or(Error::InvalidArgument {
        arg: "target_size",
        value: format!("{}x{}", target_w, target_h),
    })
}

/// Crop to the target aspect ratio around the center, then resample to fill
/// the box exactly.
pub fn fit_to_box(
    img: &RgbImage,
    target_w: u32,
    target_h: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    if target_w == 0 || target_h == 0 {
        return Err(Error::InvalidArgument {
            arg: "target_size",
            value: format!("{}x{}", target_w, target_h),
        });
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::InvalidArgument {
            arg: "source_size",
            value: format!("{}x{}", img.width(), img.height()),
        });
    }

    let crop = cover_crop_box(img.width(), img.height(), target_w, target_h);
    debug!(
        "Fitting {}x{} -> {}x{} (crop left={:.1}, top={:.1}, {:.1}x{:.1})",
        img.width(),
        img.height(),
        target_w,
        target_h,
        crop.0,
        crop.1,
        crop.2,
        crop.3
    );

    resize_rgb_region(img, crop, target_w, target_h, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn wide_source_is_trimmed_horizontally() {
        let (left, top, w, h) = cover_crop_box(400, 100, 100, 100);
        assert_eq!((left, top, w, h), (150.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn tall_source_is_trimmed_vertically() {
        let (left, top, w, h) = cover_crop_box(100, 400, 200, 100);
        assert_eq!((left, top, w, h), (0.0, 175.0, 100.0, 50.0));
    }

    #[test]
    fn matching_ratio_keeps_whole_source() {
        assert_eq!(cover_crop_box(300, 200, 150, 100), (0.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn fit_produces_exact_box_size() {
        let img = RgbImage::from_pixel(321, 123, Rgb([10, 20, 30]));
        let fitted = fit_to_box(&img, 570, 540, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(fitted.dimensions(), (570, 540));
        // A flat source stays flat after resampling.
        let px = fitted.get_pixel(285, 270);
        assert!((px[0] as i32 - 10).abs() <= 1);
        assert!((px[2] as i32 - 30).abs() <= 1);
    }

    #[test]
    fn fit_keeps_the_center_of_a_wide_source() {
        // Left and right thirds red, middle third blue; a square fit sees only blue.
        let img = RgbImage::from_fn(300, 100, |x, _| {
            if (100..200).contains(&x) {
                Rgb([0, 0, 255])
            } else {
                Rgb([255, 0, 0])
            }
        });
        let fitted = fit_to_box(&img, 50, 50, ResampleFilter::Nearest).unwrap();
        assert_eq!(*fitted.get_pixel(0, 25), Rgb([0, 0, 255]));
        assert_eq!(*fitted.get_pixel(49, 25), Rgb([0, 0, 255]));
    }

    #[test]
    fn fit_rejects_empty_target() {
        let img = RgbImage::new(10, 10);
        assert!(fit_to_box(&img, 0, 10, ResampleFilter::Lanczos3).is_err());
    }
}
