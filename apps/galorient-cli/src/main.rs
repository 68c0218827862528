//! galorient - per-region magnitude CDFs for 2D point clouds
//!
//! Reads `x y magnitude` rows, splits the plane into threshold bands
//! (north/south, east/west), and plots the empirical CDF of the magnitude
//! for each requested region on a single labeled chart.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use galorient_io::IoError;
use galorient_plot::{FigureSize, PlotError};
use galorient_regions::{classify, RegionError, RegionLabel, RegionThresholds};
use galorient_stats::Ecdf;

#[derive(Parser, Debug)]
#[command(
    name = "galorient",
    about = "Plot empirical CDFs of a magnitude column for spatial regions of a point cloud"
)]
struct Args {
    /// Input file containing x and y coordinates, as well as magnitude
    /// (default is stdin)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// File to save the plot to (.svg or .png)
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Lower bound on the northern region
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    north: f64,

    /// Upper bound on the southern region
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    south: f64,

    /// Upper bound on the eastern region
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    east: f64,

    /// Lower bound on the western region
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    west: f64,

    /// Regions to plot, in drawing order
    #[arg(value_name = "REGION", required = true)]
    regions: Vec<String>,
}

/// Umbrella error for the pipeline
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] RegionError),

    #[error("unknown region label(s): {0} (valid: C, N, S, E, W, NC, SC, EC, WC, NE, NW, SE, SW)")]
    UnknownLabels(String),

    #[error("failed to load input: {0}")]
    Load(#[from] IoError),

    #[error("failed to render figure: {0}")]
    Render(#[from] PlotError),
}

/// Resolve label strings, reporting every bad one together
fn parse_labels(raw: &[String]) -> Result<Vec<RegionLabel>, CliError> {
    let mut labels = Vec::with_capacity(raw.len());
    let mut unknown = Vec::new();

    for token in raw {
        match token.parse::<RegionLabel>() {
            Ok(label) => labels.push(label),
            Err(_) => unknown.push(format!("'{token}'")),
        }
    }

    if unknown.is_empty() {
        Ok(labels)
    } else {
        Err(CliError::UnknownLabels(unknown.join(", ")))
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let labels = parse_labels(&args.regions)?;
    // Thresholds are checked before any data is read.
    let thresholds = RegionThresholds::new(args.north, args.south, args.east, args.west)?;

    let cloud = galorient_io::load_path(args.input.as_deref())?;
    info!(samples = cloud.len(), "input loaded");

    let set = classify(&cloud.x, &cloud.y, &cloud.magnitude, &thresholds);
    for &label in &labels {
        debug!(region = %label, points = set.len(label), "region classified");
    }
    if labels.iter().all(|&label| set.is_empty(label)) {
        warn!("every requested region is empty; the figure will have no curves");
    }

    let curves: Vec<(RegionLabel, Ecdf)> = labels
        .iter()
        .map(|&label| (label, Ecdf::from_magnitudes(set.magnitudes(label))))
        .collect();

    galorient_plot::render(&curves, &args.output, FigureSize::default())?;
    info!(path = %args.output.display(), "figure written");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
