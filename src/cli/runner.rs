use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mangapage::io::writers::write_report_sidecar;
use mangapage::{
    AspectRatio, AssembleParams, CropOutcome, CropParams, OutputFormat, PageLayout, RatioMode,
    assemble_page_to_path, crop_borders_to_path, crop_directory_to_path, default_panel_paths,
};

use super::args::{AssembleArgs, CliArgs, Command, CropArgs, InitLayoutArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Diagnostics go to stdout, logs to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Explicit `--format`, else the output file's extension, else `fallback`.
fn resolve_format(
    explicit: Option<OutputFormat>,
    output: Option<&Path>,
    fallback: OutputFormat,
) -> OutputFormat {
    let implied = output.and_then(|path| OutputFormat::from_path(path).map(|ext| (path, ext)));
    match (explicit, implied) {
        (Some(format), Some((path, ext))) if format != ext => {
            warn!(
                "Writing {} data to {:?}, whose extension suggests {}",
                format, path, ext
            );
            format
        }
        (Some(format), _) => format,
        (None, Some((_, ext))) => ext,
        (None, None) => fallback,
    }
}

fn layout_from_args(args: &AssembleArgs) -> Result<PageLayout, Box<dyn std::error::Error>> {
    let mut layout = match &args.layout {
        Some(path) => PageLayout::from_json_file(path)?,
        None => PageLayout::default(),
    };
    if let Some(w) = args.canvas_width {
        layout.canvas_width = w;
    }
    if let Some(h) = args.canvas_height {
        layout.canvas_height = h;
    }
    if let Some(g) = args.gutter {
        layout.gutter = g;
    }
    Ok(layout)
}

fn run_assemble(args: AssembleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let layout = layout_from_args(&args)?;
    let format = resolve_format(args.format, Some(&args.output), OutputFormat::default());

    let panels = if !args.panels.is_empty() {
        args.panels
    } else {
        let source_dir = args.source_dir.ok_or(AppError::MissingArgument {
            arg: "--source-dir or --panel".to_string(),
        })?;
        default_panel_paths(&source_dir, args.page, layout.slot_count())
    };
    info!("Assembling {} panels into {:?}", panels.len(), args.output);

    let params = AssembleParams {
        layout,
        filter: args.filter,
        format,
    };
    let outcome = assemble_page_to_path(&panels, &args.output, &params)?;
    println!("Saved composed page to {}", args.output.display());

    if args.report {
        let sidecar = write_report_sidecar(&args.output, "assemble", &outcome)?;
        println!("Saved report to {}", sidecar.display());
    }
    Ok(())
}

fn crop_params_from_args(args: &CropArgs) -> Result<CropParams, Box<dyn std::error::Error>> {
    let mut params = match &args.config {
        Some(path) => CropParams::from_json_file(path)?,
        None => CropParams::default(),
    };
    if let Some(t) = args.threshold {
        params.threshold = t;
    }
    if let Some(p) = args.padding {
        params.padding = p;
    }
    if let Some(ratio) = &args.target_ratio {
        params.target_ratio = ratio
            .parse::<AspectRatio>()
            .map_err(|_| AppError::InvalidRatio {
                ratio: ratio.clone(),
            })?;
    }
    if let Some(mode) = args.ratio_mode {
        params.ratio_mode = mode;
    }
    params.format = resolve_format(args.format, args.output.as_deref(), params.format);
    Ok(params)
}

fn print_crop_outcome(outcome: &CropOutcome) {
    let (w, h) = outcome.original_size;
    let (cw, ch) = outcome.cropped_size;
    println!("Original Size: ({}, {})", w, h);
    println!("Content BBox: {}", outcome.content_bbox);
    println!("Cropped Size: {}x{}", cw, ch);
    println!(
        "Current Ratio: {:.3}, Target Ratio: {:.3}",
        outcome.current_ratio, outcome.target_ratio
    );
    if outcome.ratio_mode != RatioMode::Report {
        let (fw, fh) = outcome.final_size;
        println!("Final Size ({}): {}x{}", outcome.ratio_mode, fw, fh);
    }
}

fn run_crop(args: CropArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = crop_params_from_args(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch crop from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = crop_directory_to_path(&input_dir, &output_dir, &params, args.batch)?;
        for page in &report.pages {
            println!("Input: {}", page.input.display());
            print_crop_outcome(&page.outcome);
            println!("Saved cropped image to {}", page.output.display());
            if args.report {
                let sidecar = write_report_sidecar(&page.output, "crop", &page.outcome)?;
                println!("Saved report to {}", sidecar.display());
            }
        }
        println!(
            "Processed: {}, Skipped: {}, Errors: {}",
            report.processed, report.skipped, report.errors
        );
        if args.report {
            let sidecar =
                write_report_sidecar(&output_dir.join("batch_report"), "crop_batch", &report)?;
            println!("Saved batch report to {}", sidecar.display());
        }
        if report.errors > 0 {
            return Err(AppError::BatchFailed {
                errors: report.errors,
            }
            .into());
        }
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        let outcome = crop_borders_to_path(&input, &output, &params)?;
        print_crop_outcome(&outcome);
        println!("Saved cropped image to {}", output.display());

        if args.report {
            let sidecar = write_report_sidecar(&output, "crop", &outcome)?;
            println!("Saved report to {}", sidecar.display());
        }
    }
    Ok(())
}

fn run_init_layout(args: InitLayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    write_default_layout(&args.output)?;
    println!("Wrote default layout to {}", args.output.display());
    Ok(())
}

fn write_default_layout(path: &Path) -> mangapage::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    PageLayout::default().to_json_file(path)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match args.command {
        Command::Assemble(a) => run_assemble(a),
        Command::Crop(c) => run_crop(c),
        Command::InitLayout(i) => run_init_layout(i),
    }
}
