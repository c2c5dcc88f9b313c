use image::{Rgb, RgbImage, imageops};
use tracing::info;

use crate::core::params::PageLayout;
use crate::core::processing::layout::{PanelSlot, compute_slots};
use crate::core::processing::resize::fit_to_box;
use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Assemble `panels` onto a fresh canvas, one panel per layout slot in order.
///
/// Panels are cover-fitted to their slot and pasted without blending; the
/// gutters keep the background color.
pub fn compose_page(
    panels: &[RgbImage],
    layout: &PageLayout,
    filter: ResampleFilter,
) -> Result<(RgbImage, Vec<PanelSlot>)> {
    let slots = compute_slots(layout)?;
    if panels.len() != slots.len() {
        return Err(Error::PanelCountMismatch {
            expected: slots.len(),
            actual: panels.len(),
        });
    }

    let mut canvas = RgbImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        Rgb(layout.background),
    );
    info!(
        "Canvas {}x{}, gutter {}, {} slots",
        layout.canvas_width,
        layout.canvas_height,
        layout.gutter,
        slots.len()
    );

    for (i, (panel, slot)) in panels.iter().zip(&slots).enumerate() {
        let fitted = fit_to_box(panel, slot.width, slot.height, filter)?;
        imageops::replace(&mut canvas, &fitted, slot.x as i64, slot.y as i64);
        info!(
            "Panel {} placed at ({}, {}) size {}x{}",
            i + 1,
            slot.x,
            slot.y,
            slot.width,
            slot.height
        );
    }

    Ok((canvas, slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::RowSpec;

    fn small_layout() -> PageLayout {
        PageLayout {
            canvas_width: 120,
            canvas_height: 160,
            background: [255, 255, 255],
            gutter: 4,
            rows: vec![RowSpec::fixed(0.3, 1), RowSpec::remainder(2)],
        }
    }

    #[test]
    fn panels_fill_slots_and_gutters_stay_background() {
        let layout = small_layout();
        let panels = vec![
            RgbImage::from_pixel(50, 20, Rgb([200, 0, 0])),
            RgbImage::from_pixel(30, 30, Rgb([0, 200, 0])),
            RgbImage::from_pixel(30, 90, Rgb([0, 0, 200])),
        ];
        let (canvas, slots) = compose_page(&panels, &layout, ResampleFilter::Nearest).unwrap();
        assert_eq!(canvas.dimensions(), (120, 160));
        assert_eq!(slots.len(), 3);

        for (slot, color) in slots.iter().zip([[200, 0, 0], [0, 200, 0], [0, 0, 200]]) {
            let cx = slot.x + slot.width / 2;
            let cy = slot.y + slot.height / 2;
            assert_eq!(*canvas.get_pixel(cx, cy), Rgb(color));
        }

        // Page edge and the gutter between the two bottom panels.
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 255, 255]));
        let right_of_left = slots[1].x + slots[1].width;
        assert_eq!(*canvas.get_pixel(right_of_left, slots[1].y + 1), Rgb([255, 255, 255]));
    }

    #[test]
    fn background_color_is_configurable() {
        let layout = PageLayout {
            background: [0, 0, 0],
            ..small_layout()
        };
        let panels = vec![RgbImage::from_pixel(10, 10, Rgb([9, 9, 9])); 3];
        let (canvas, _) = compose_page(&panels, &layout, ResampleFilter::Bilinear).unwrap();
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn wrong_panel_count_is_rejected() {
        let panels = vec![RgbImage::new(10, 10); 2];
        let err = compose_page(&panels, &small_layout(), ResampleFilter::Lanczos3).unwrap_err();
        assert!(matches!(
            err,
            Error::PanelCountMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }
}
