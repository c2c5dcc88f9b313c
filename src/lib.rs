#![doc = r#"
mangapage — manga page assembly and border cropping.

This crate composites panel images onto a page canvas using a row-based layout,
and crops the whitespace borders of scanned pages around their detected
content. It powers the `mangapage` CLI and can be embedded in your own Rust
applications.

Quick start: assemble a page
----------------------------
```rust,no_run
use std::path::Path;
use mangapage::{AssembleParams, assemble_page_to_path, default_panel_paths};

fn main() -> mangapage::Result<()> {
    let panels = default_panel_paths(Path::new("/comic/chapter1"), 1, 5);
    let outcome = assemble_page_to_path(
        &panels,
        Path::new("/comic/chapter1/page1_complete.png"),
        &AssembleParams::default(),
    )?;
    println!("canvas {:?}", outcome.canvas_size);
    Ok(())
}
```

Crop page borders
-----------------
```rust,no_run
use std::path::Path;
use mangapage::{CropParams, RatioMode, crop_borders_to_path};

fn main() -> mangapage::Result<()> {
    let params = CropParams {
        padding: 50,
        ratio_mode: RatioMode::Report,
        ..CropParams::default()
    };
    let outcome = crop_borders_to_path(
        Path::new("/comic/chapter1/page1_full.png"),
        Path::new("/comic/chapter1/page1_final.png"),
        &params,
    )?;
    println!(
        "ratio {:.3} vs target {:.3}",
        outcome.current_ratio, outcome.target_ratio
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `mangapage::Result<T>`; match on `mangapage::Error`
to handle specific cases.

```rust,no_run
use std::path::Path;
use mangapage::{CropParams, Error, crop_borders_to_path};

fn main() {
    match crop_borders_to_path(Path::new("in.png"), Path::new("out.png"), &CropParams::default()) {
        Ok(_) => {}
        Err(Error::NoContentDetected) => eprintln!("page is blank"),
        Err(Error::ImageNotFound(p)) => eprintln!("missing input {}", p.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — layout, resize, composition, and crop primitives.
- [`types`] — enums and small value types (`OutputFormat`, `RatioMode`, `AspectRatio`).
- [`io`] — image loading and writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{AssembleParams, CropParams, PageLayout, RowSpec};
pub use crate::core::processing::crop::CropOutcome;
pub use crate::core::processing::layout::{PanelSlot, compute_slots};
pub use crate::error::{Error, Result};
pub use crate::types::{AspectRatio, BoundingBox, OutputFormat, RatioMode, ResampleFilter};

pub use crate::api::{
    AssembleOutcome, BatchPage, BatchReport, PlacedPanel, assemble_page_to_buffer,
    assemble_page_to_path, crop_borders_to_buffer, crop_borders_to_path, crop_directory_to_path,
    default_panel_paths, iterate_page_images,
};
