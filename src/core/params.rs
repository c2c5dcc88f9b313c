use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{AspectRatio, OutputFormat, RatioMode, ResampleFilter};

pub const WHITE: [u8; 3] = [255, 255, 255];

/// One horizontal band of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    /// Share of the canvas height; `None` takes whatever height is left
    #[serde(default)]
    pub height_fraction: Option<f64>,
    /// Number of equally wide panels in this row
    pub columns: usize,
}

impl RowSpec {
    pub fn fixed(height_fraction: f64, columns: usize) -> Self {
        Self {
            height_fraction: Some(height_fraction),
            columns,
        }
    }

    pub fn remainder(columns: usize) -> Self {
        Self {
            height_fraction: None,
            columns,
        }
    }
}

/// Page canvas geometry, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: [u8; 3],
    /// Space between panels and around the page edge, in pixels
    pub gutter: u32,
    pub rows: Vec<RowSpec>,
}

impl Default for PageLayout {
    // Wide intro panel, then two rows of two.
    fn default() -> Self {
        Self {
            canvas_width: 1200,
            canvas_height: 1600,
            background: WHITE,
            gutter: 20,
            rows: vec![
                RowSpec::fixed(0.30, 1),
                RowSpec::fixed(0.35, 2),
                RowSpec::remainder(2),
            ],
        }
    }
}

impl PageLayout {
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|r| r.columns).sum()
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content)?;
        debug!("Loaded page layout from {:?}", path);
        Ok(layout)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Parameters for page assembly
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssembleParams {
    pub layout: PageLayout,
    pub filter: ResampleFilter,
    pub format: OutputFormat,
}

/// Parameters for border cropping, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Gray levels below this count as content
    pub threshold: u8,
    /// Pixels kept around the detected content
    pub padding: u32,
    pub target_ratio: AspectRatio,
    pub ratio_mode: RatioMode,
    /// Fill used by `RatioMode::Pad`
    pub background: [u8; 3],
    pub format: OutputFormat,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            threshold: 240,
            padding: 50,
            target_ratio: AspectRatio::PORTRAIT_3_4,
            ratio_mode: RatioMode::Report,
            background: WHITE,
            format: OutputFormat::Png,
        }
    }
}

impl CropParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        debug!("Loaded crop parameters from {:?}", path);
        Ok(params)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
