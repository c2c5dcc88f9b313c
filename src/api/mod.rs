//! High-level, ergonomic library API: assemble panels into a page, crop page
//! borders to files or in-memory buffers, and batch helpers for directories.
//! Prefer these entrypoints over the low-level processing modules.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{AssembleParams, CropParams, PageLayout};
use crate::core::processing::compose::compose_page;
use crate::core::processing::crop::{CropOutcome, crop_borders};
use crate::core::processing::layout::PanelSlot;
use crate::error::{Error, Result};
use crate::io::load_rgb;
use crate::io::writers::write_image;
use crate::types::ResampleFilter;

const PAGE_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"];

/// One source panel and where it landed on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub source: PathBuf,
    pub slot: PanelSlot,
}

/// Result of page assembly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembleOutcome {
    pub canvas_size: (u32, u32),
    pub gutter: u32,
    pub panels: Vec<PlacedPanel>,
}

/// `page{page}_panel{i}.png` for `i` in `1..=count`, under `source_dir`.
pub fn default_panel_paths(source_dir: &Path, page: u32, count: usize) -> Vec<PathBuf> {
    (1..=count)
        .map(|i| source_dir.join(format!("page{}_panel{}.png", page, i)))
        .collect()
}

/// Load the panels and compose them in memory (no disk writes)
pub fn assemble_page_to_buffer(
    panel_paths: &[PathBuf],
    layout: &PageLayout,
    filter: ResampleFilter,
) -> Result<(RgbImage, AssembleOutcome)> {
    let expected = layout.slot_count();
    if panel_paths.len() != expected {
        return Err(Error::PanelCountMismatch {
            expected,
            actual: panel_paths.len(),
        });
    }

    let panels = panel_paths
        .iter()
        .map(|p| load_rgb(p))
        .collect::<Result<Vec<_>>>()?;

    let (canvas, slots) = compose_page(&panels, layout, filter)?;
    let outcome = AssembleOutcome {
        canvas_size: canvas.dimensions(),
        gutter: layout.gutter,
        panels: panel_paths
            .iter()
            .cloned()
            .zip(slots)
            .map(|(source, slot)| PlacedPanel { source, slot })
            .collect(),
    };
    Ok((canvas, outcome))
}

/// Compose the panels and write the page to `output`
pub fn assemble_page_to_path(
    panel_paths: &[PathBuf],
    output: &Path,
    params: &AssembleParams,
) -> Result<AssembleOutcome> {
    let (canvas, outcome) = assemble_page_to_buffer(panel_paths, &params.layout, params.filter)?;
    write_image(output, &canvas, params.format)?;
    info!("Saved composed page to {:?}", output);
    Ok(outcome)
}

/// Crop the borders of a page in memory (no disk writes)
pub fn crop_borders_to_buffer(input: &Path, params: &CropParams) -> Result<(RgbImage, CropOutcome)> {
    let img = load_rgb(input)?;
    crop_borders(&img, params)
}

/// Crop the borders of a page and write the result to `output`
pub fn crop_borders_to_path(input: &Path, output: &Path, params: &CropParams) -> Result<CropOutcome> {
    let (cropped, outcome) = crop_borders_to_buffer(input, params)?;
    write_image(output, &cropped, params.format)?;
    info!("Saved cropped image to {:?}", output);
    Ok(outcome)
}

/// One page cropped by a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchPage {
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: CropOutcome,
}

/// Batch processing report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Outcome of every page that was written, in processing order
    pub pages: Vec<BatchPage>,
}

fn is_page_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            PAGE_IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// Return the image files directly under `input_dir`, sorted by path
pub fn iterate_page_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_page_image(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Crop every page image in `input_dir` into `output_dir` using `params`.
/// Blank pages are counted as skipped. If `continue_on_error` is true, other
/// failures are counted and processing continues; otherwise the first one is returned.
///
/// Cropping in place is refused, and two inputs mapping to the same output
/// name (`a.png` and `a.jpg`) make the second one an error instead of an overwrite.
pub fn crop_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &CropParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;
    if input_dir.canonicalize()? == output_dir.canonicalize()? {
        return Err(Error::InvalidArgument {
            arg: "output_dir",
            value: format!("{} (same as input directory)", output_dir.display()),
        });
    }

    let mut report = BatchReport::default();
    let mut written: HashSet<PathBuf> = HashSet::new();

    for path in iterate_page_images(input_dir)? {
        let Some(stem) = path.file_stem() else {
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(format!(
            "{}.{}",
            stem.to_string_lossy(),
            params.format.extension()
        ));
        info!("Processing: {:?} -> {:?}", path, output_path);

        let result = if written.contains(&output_path) {
            Err(Error::OutputCollision(output_path.clone()))
        } else {
            crop_borders_to_path(&path, &output_path, params)
        };

        match result {
            Ok(outcome) => {
                written.insert(output_path.clone());
                report.processed += 1;
                report.pages.push(BatchPage {
                    input: path,
                    output: output_path,
                    outcome,
                });
            }
            Err(Error::NoContentDetected) => {
                warn!("No content found in {:?}, skipping", path);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
