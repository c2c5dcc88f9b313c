use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use mangapage::{OutputFormat, RatioMode, ResampleFilter};

#[derive(Parser)]
#[command(name = "mangapage", version, about = "Manga page assembly and border cropping")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Composite panel images onto a single page canvas
    Assemble(AssembleArgs),
    /// Crop whitespace borders around the content of a scanned page
    Crop(CropArgs),
    /// Write the default page layout as JSON, as a starting point for --layout
    InitLayout(InitLayoutArgs),
}

#[derive(Args)]
pub struct AssembleArgs {
    /// Directory holding page{N}_panel{i}.png files
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Page number used to build default panel file names
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Explicit panel files in slot order (overrides --source-dir naming)
    #[arg(long = "panel")]
    pub panels: Vec<PathBuf>,

    /// Output filename
    #[arg(short, long)]
    pub output: PathBuf,

    /// Page layout JSON file
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Override the canvas width in pixels
    #[arg(long)]
    pub canvas_width: Option<u32>,

    /// Override the canvas height in pixels
    #[arg(long)]
    pub canvas_height: Option<u32>,

    /// Override the gutter between panels in pixels
    #[arg(long)]
    pub gutter: Option<u32>,

    /// Resampling filter used when fitting panels
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Output format (png or jpeg); defaults to the output extension, then png
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a JSON report next to the output
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

#[derive(Args)]
pub struct CropArgs {
    /// Input page image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing page images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Crop parameters JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Gray level below which a pixel counts as content (0-255)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Pixels of margin kept around the detected content
    #[arg(long)]
    pub padding: Option<u32>,

    /// Target width:height ratio, e.g. 3:4
    #[arg(long)]
    pub target_ratio: Option<String>,

    /// What to do with the target ratio (report, crop or pad)
    #[arg(long, value_enum)]
    pub ratio_mode: Option<RatioMode>,

    /// Output format (png or jpeg); defaults to the output extension, then the config
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Batch mode: continue with other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Write a JSON report next to each output (plus batch_report.json in batch mode)
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

#[derive(Args)]
pub struct InitLayoutArgs {
    /// Where to write the layout JSON
    #[arg(short, long)]
    pub output: PathBuf,
}
