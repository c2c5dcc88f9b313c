//! Integration tests for page assembly
//!
//! These tests build synthetic panel images on disk, run the full
//! load -> fit -> compose -> save flow, and check the written page.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use mangapage::{
    AssembleParams, Error, OutputFormat, PageLayout, assemble_page_to_buffer,
    assemble_page_to_path, default_panel_paths,
};

const PANEL_COLORS: [[u8; 3]; 5] = [
    [220, 30, 30],
    [30, 220, 30],
    [30, 30, 220],
    [220, 220, 30],
    [30, 220, 220],
];

fn write_panels(dir: &Path) -> Vec<PathBuf> {
    let sizes = [(800, 300), (400, 400), (300, 500), (640, 480), (200, 900)];
    let paths = default_panel_paths(dir, 1, 5);
    for ((path, (w, h)), color) in paths.iter().zip(sizes).zip(PANEL_COLORS) {
        RgbImage::from_pixel(w, h, Rgb(color)).save(path).unwrap();
    }
    paths
}

// ============================================================================
// Default layout
// ============================================================================

#[test]
fn test_default_panel_names() {
    let paths = default_panel_paths(Path::new("chapter1"), 1, 5);
    assert_eq!(paths.len(), 5);
    assert_eq!(paths[0], Path::new("chapter1/page1_panel1.png"));
    assert_eq!(paths[4], Path::new("chapter1/page1_panel5.png"));
}

#[test]
fn test_assemble_default_page_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let panels = write_panels(dir.path());
    let output = dir.path().join("out/page1_complete.png");

    let outcome = assemble_page_to_path(&panels, &output, &AssembleParams::default()).unwrap();
    assert_eq!(outcome.canvas_size, (1200, 1600));
    assert_eq!(outcome.panels.len(), 5);

    let page = image::open(&output).unwrap().to_rgb8();
    assert_eq!(page.dimensions(), (1200, 1600));

    for (placed, color) in outcome.panels.iter().zip(PANEL_COLORS) {
        let s = placed.slot;
        let center = page.get_pixel(s.x + s.width / 2, s.y + s.height / 2);
        for c in 0..3 {
            assert!(
                (center[c] as i32 - color[c] as i32).abs() <= 2,
                "panel {:?} center {:?} expected {:?}",
                placed.source,
                center,
                color
            );
        }
    }

    // Gutters: top edge, between rows, between the two columns, bottom edge.
    for (x, y) in [(600, 5), (600, 490), (600, 700), (600, 1595)] {
        assert_eq!(*page.get_pixel(x, y), Rgb([255, 255, 255]), "gutter at ({x}, {y})");
    }
}

#[test]
fn test_assemble_to_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let panels = write_panels(dir.path());
    let output = dir.path().join("page1_complete.jpg");
    let params = AssembleParams {
        format: OutputFormat::Jpeg,
        ..AssembleParams::default()
    };

    assemble_page_to_path(&panels, &output, &params).unwrap();
    let page = image::open(&output).unwrap();
    assert_eq!((page.width(), page.height()), (1200, 1600));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_panel_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut panels = write_panels(dir.path());
    panels[2] = dir.path().join("page1_panel99.png");

    let err = assemble_page_to_buffer(&panels, &PageLayout::default(), Default::default())
        .unwrap_err();
    assert!(matches!(err, Error::ImageNotFound(p) if p.ends_with("page1_panel99.png")));
}

#[test]
fn test_panel_count_must_match_layout() {
    let dir = tempfile::tempdir().unwrap();
    let panels = write_panels(dir.path());

    let err = assemble_page_to_buffer(&panels[..4], &PageLayout::default(), Default::default())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::PanelCountMismatch {
            expected: 5,
            actual: 4
        }
    ));
}

#[test]
fn test_invalid_layout_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let panels = write_panels(dir.path());
    let output = dir.path().join("page.png");
    let params = AssembleParams {
        layout: PageLayout {
            canvas_width: 40,
            ..PageLayout::default()
        },
        ..AssembleParams::default()
    };

    let err = assemble_page_to_path(&panels, &output, &params).unwrap_err();
    assert!(matches!(err, Error::InvalidLayout(_)));
    assert!(!output.exists());
}
