use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::params::PageLayout;
use crate::error::{Error, Result};

/// Pixel rectangle on the canvas that receives one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidLayout(msg.into())
}

/// Compute panel slots row by row, left to right.
///
/// Fixed rows take `floor(H * fraction) - G`; the single remainder row takes
/// what is left once every row and `rows + 1` gutters are accounted for.
/// Columns in a row share `W - (columns + 1) * G` evenly (floored).
pub fn compute_slots(layout: &PageLayout) -> Result<Vec<PanelSlot>> {
    if layout.rows.is_empty() {
        return Err(invalid("at least one row is required"));
    }
    if layout.canvas_width == 0 || layout.canvas_height == 0 {
        return Err(invalid(format!(
            "canvas must be non-empty, got {}x{}",
            layout.canvas_width, layout.canvas_height
        )));
    }

    let width = layout.canvas_width as i64;
    let height = layout.canvas_height as i64;
    let gutter = layout.gutter as i64;

    let mut row_heights: Vec<Option<i64>> = Vec::with_capacity(layout.rows.len());
    let mut remainder_rows = 0;
    for (i, row) in layout.rows.iter().enumerate() {
        if row.columns == 0 {
            return Err(invalid(format!("row {} has no columns", i)));
        }
        match row.height_fraction {
            Some(f) if !(f > 0.0 && f <= 1.0) => {
                return Err(invalid(format!(
                    "row {} height fraction {} is outside (0, 1]",
                    i, f
                )));
            }
            Some(f) => row_heights.push(Some((height as f64 * f).floor() as i64 - gutter)),
            None => {
                remainder_rows += 1;
                row_heights.push(None);
            }
        }
    }
    if remainder_rows > 1 {
        return Err(invalid("only one row may take the remaining height"));
    }

    let fixed_total: i64 = row_heights.iter().flatten().sum();
    let remainder = height - fixed_total - (layout.rows.len() as i64 + 1) * gutter;

    let mut slots = Vec::with_capacity(layout.slot_count());
    let mut y = gutter;
    for (i, (row, row_height)) in layout.rows.iter().zip(&row_heights).enumerate() {
        let h = row_height.unwrap_or(remainder);
        let columns = row.columns as i64;
        let w = (width - (columns + 1) * gutter) / columns;
        if h <= 0 || w <= 0 {
            return Err(invalid(format!(
                "row {} collapses to {}x{} panels",
                i, w, h
            )));
        }
        if y + h > height {
            return Err(invalid(format!(
                "row {} ends at y={} beyond canvas height {}",
                i,
                y + h,
                height
            )));
        }

        for c in 0..columns {
            let x = gutter + c * (w + gutter);
            slots.push(PanelSlot {
                x: x as u32,
                y: y as u32,
                width: w as u32,
                height: h as u32,
            });
        }
        debug!("Row {}: y={}, {} panel(s) of {}x{}", i, y, columns, w, h);
        y += h + gutter;
    }

    Ok(slots)
}
