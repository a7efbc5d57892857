use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use melt_chart::{ChartConfig, MeltChart, OneOrMany, ProteinRecord, RecordingSurface, normalize};
use melt_core::MeltError;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "melt-cli")]
#[command(about = "MeltLine CLI - headless thermal-melt curve charting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a protein melt JSON file
    Validate {
        /// Path to the protein JSON file (one record or an array)
        input: PathBuf,
    },
    /// Render curves to path geometry and export as JSON
    Render {
        /// Path to the protein JSON file
        input: PathBuf,
        /// X-domain lower bound (degrees C)
        #[arg(long)]
        min_temp: Option<f64>,
        /// X-domain upper bound (degrees C)
        #[arg(long)]
        max_temp: Option<f64>,
        /// Maximum number of curves to keep
        #[arg(long)]
        limit: Option<usize>,
        /// Output JSON file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the aggregate average curve
    Average {
        /// Path to the protein JSON file
        input: PathBuf,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Melt(#[from] MeltError),
}

#[derive(Serialize)]
struct ExportedPath {
    id: String,
    stroke: String,
    width: f64,
    opacity: f64,
    points: Vec<[f64; 2]>,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Render {
            input,
            min_temp,
            max_temp,
            limit,
            output,
        } => cmd_render(&input, min_temp, max_temp, limit, output.as_deref()),
        Commands::Average { input } => cmd_average(&input),
    }
}

fn load_proteins(path: &Path) -> CliResult<OneOrMany<ProteinRecord>> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    if !value.is_object() && !value.is_array() {
        return Err(MeltError::InvalidArg {
            what: "proteins must be an object or an array of objects",
        }
        .into());
    }
    Ok(serde_json::from_value(value)?)
}

fn cmd_validate(input: &Path) -> CliResult<()> {
    let proteins = load_proteins(input)?;
    let experiments = normalize(proteins)?;
    println!("OK: {} curve(s) across the file", experiments.len());
    for e in &experiments {
        println!(
            "  {}-E{}: {} read(s)",
            e.protein_id,
            e.experiment_id,
            e.samples.len()
        );
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    min_temp: Option<f64>,
    max_temp: Option<f64>,
    limit: Option<usize>,
    output: Option<&Path>,
) -> CliResult<()> {
    let proteins = load_proteins(input)?;

    let config = ChartConfig {
        limit,
        ..ChartConfig::default()
    };
    let mut chart = MeltChart::new(config, RecordingSurface::new());
    let inserted = chart.add(proteins)?;
    tracing::info!(curves = inserted.len(), "curves inserted");

    if min_temp.is_some() || max_temp.is_some() {
        chart.rescale(min_temp, max_temp);
    }

    let paths: Vec<ExportedPath> = chart
        .surface()
        .paths()
        .map(|(id, path)| ExportedPath {
            id: match id {
                melt_chart::PathId::Curve(curve_id) => curve_id.to_string(),
                melt_chart::PathId::Overlay => "average".to_string(),
            },
            stroke: path.style.stroke.to_string(),
            width: path.style.width,
            opacity: path.style.opacity,
            points: path.points.clone(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&paths)?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_average(input: &Path) -> CliResult<()> {
    let proteins = load_proteins(input)?;

    let mut chart = MeltChart::new(ChartConfig::default(), RecordingSurface::new());
    chart.add(proteins)?;
    let average = melt_chart::compute_average(chart.store().all());
    println!("{}", serde_json::to_string_pretty(&average.samples)?);
    Ok(())
}
