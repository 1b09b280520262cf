//! Letterbox: aspect-preserving batch resizer for COCO detection datasets.
//!
//! Letterbox rescales every image in a dataset to a fixed target canvas
//! (scale to fit, then pad the short side) and rewrites every bounding box
//! through the same geometry, producing a new image tree and a new
//! annotation file in the same COCO format.
//!
//! # Modules
//!
//! - [`coco`]: Annotation file model and JSON I/O
//! - [`geometry`]: Resize plans and bounding box mapping
//! - [`index`]: Positional lookup over dataset records
//! - [`raster`]: Pixel resampling and canvas compositing
//! - [`pipeline`]: Orchestration of a full resize run
//! - [`check`]: Dataset integrity checks and reporting
//! - [`error`]: Error types for letterbox operations

pub mod check;
pub mod coco;
pub mod error;
pub mod geometry;
pub mod index;
pub mod pipeline;
pub mod raster;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use image::imageops::FilterType;

pub use error::LetterboxError;

use geometry::PadPolicy;
use pipeline::{BoxPolicy, ResizeOptions};

/// The letterbox CLI application.
#[derive(Parser)]
#[command(name = "letterbox")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Resize a dataset's images and rewrite its bounding boxes.
    Resize(ResizeArgs),

    /// Check a dataset for errors and warnings.
    Check(CheckArgs),
}

/// Arguments for the resize subcommand.
#[derive(clap::Args)]
struct ResizeArgs {
    /// Directory where the images referenced in the annotations file are located.
    #[arg(short = 'i', long)]
    images_dir: PathBuf,

    /// COCO JSON format annotations file.
    #[arg(short = 'a', long)]
    annotations_file: PathBuf,

    /// Target image width in pixels.
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Target image height in pixels.
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Output annotations file.
    #[arg(short = 'o', long)]
    output_annotations_file: PathBuf,

    /// Output images directory.
    #[arg(short = 'f', long)]
    output_images_dir: PathBuf,

    /// Where padding goes after the aspect-preserving resize.
    #[arg(long, value_enum, default_value_t = PadArg::Origin)]
    padding: PadArg,

    /// Resampling filter for the pixel plane.
    #[arg(long, value_enum, default_value_t = FilterArg::Triangle)]
    filter: FilterArg,

    /// Clamp mapped boxes into the target canvas.
    #[arg(long)]
    clamp: bool,

    /// Keep source category ids instead of collapsing to a single class.
    #[arg(long)]
    keep_categories: bool,

    /// Category id every annotation is collapsed to.
    #[arg(long, default_value_t = 1, conflicts_with = "keep_categories")]
    category_id: u64,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// COCO JSON format annotations file to check.
    #[arg(short = 'a', long)]
    annotations_file: PathBuf,

    /// Directory to verify referenced image files against.
    #[arg(short = 'i', long)]
    images_dir: Option<PathBuf>,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Padding placement, as exposed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PadArg {
    /// Anchor content at the origin; pad the bottom/right edges.
    Origin,
    /// Center the content; pad both sides evenly.
    Centered,
}

impl From<PadArg> for PadPolicy {
    fn from(arg: PadArg) -> Self {
        match arg {
            PadArg::Origin => PadPolicy::Origin,
            PadArg::Centered => PadPolicy::Centered,
        }
    }
}

/// Resampling filter, as exposed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    Nearest,
    /// Bilinear. The default.
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Triangle => FilterType::Triangle,
            FilterArg::CatmullRom => FilterType::CatmullRom,
            FilterArg::Gaussian => FilterType::Gaussian,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Run the letterbox CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), LetterboxError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Resize(args)) => run_resize(args),
        Some(Commands::Check(args)) => run_check(args),
        None => {
            println!("letterbox {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Aspect-preserving batch resizer for COCO detection datasets.");
            println!();
            println!("Run 'letterbox --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the resize subcommand.
fn run_resize(args: ResizeArgs) -> Result<(), LetterboxError> {
    println!(
        "Loading annotations from {}...",
        args.annotations_file.display()
    );
    let mut dataset = coco::io::read_coco_json(&args.annotations_file)?;

    let opts = ResizeOptions {
        images_dir: args.images_dir,
        output_images_dir: args.output_images_dir,
        target_w: args.width,
        target_h: args.height,
        pad: args.padding.into(),
        boxes: if args.clamp {
            BoxPolicy::Clamp
        } else {
            BoxPolicy::Keep
        },
        filter: args.filter.into(),
        collapse_category: (!args.keep_categories).then_some(args.category_id),
    };

    let summary = pipeline::resize_dataset(&mut dataset, &opts)?;

    coco::io::write_coco_json(&args.output_annotations_file, &dataset)?;
    println!(
        "Resized {} image(s) and rewrote {} annotation(s); annotations written to {}",
        summary.images,
        summary.annotations,
        args.output_annotations_file.display()
    );
    Ok(())
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), LetterboxError> {
    let dataset = coco::io::read_coco_json(&args.annotations_file)?;

    let opts = check::CheckOptions {
        strict: args.strict,
        images_dir: args.images_dir,
    };
    let report = check::check_dataset(&dataset, &opts);

    match args.output.as_str() {
        "json" => {
            // Simple JSON output for programmatic use
            println!("{{");
            println!("  \"error_count\": {},", report.error_count());
            println!("  \"warning_count\": {},", report.warning_count());
            println!("  \"issues\": [");
            for (i, issue) in report.issues.iter().enumerate() {
                let comma = if i < report.issues.len() - 1 { "," } else { "" };
                println!("    {{");
                println!("      \"severity\": \"{:?}\",", issue.severity);
                println!("      \"code\": \"{:?}\",", issue.code);
                println!(
                    "      \"message\": \"{}\",",
                    issue.message.replace('"', "\\\"")
                );
                println!("      \"context\": \"{}\"", issue.context);
                println!("    }}{}", comma);
            }
            println!("  ]");
            println!("}}");
        }
        _ => {
            // Default text output
            print!("{}", report);
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(LetterboxError::CheckFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
        })
    } else {
        Ok(())
    }
}
