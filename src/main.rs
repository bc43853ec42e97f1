//! Count head nods in a per-frame pitch series.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use nod_counter::{
    app::{AppConfig, NodCounterApp},
    config::Config,
    nodding::PairingPolicy,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count head nods in a per-frame head pitch series", long_about = None)]
struct Args {
    /// Pitch series file (one value per line, frame,pitch CSV, or JSON array)
    #[arg(short, long)]
    input: PathBuf,

    /// Minimum peak prominence in degrees
    #[arg(short, long)]
    prominence: Option<f64>,

    /// Frame rate of the source video
    #[arg(long)]
    fps: Option<f64>,

    /// Smoothing filter (none, movingaverage:N, median:N, exponential:A, hampel:N:T)
    #[arg(short, long)]
    filter: Option<String>,

    /// Pairing policy (fifo, chronological)
    #[arg(long)]
    pairing: Option<PairingPolicy>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Nod Counter");

    let mut settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line flags win over the config file
    if let Some(prominence) = args.prominence {
        settings.detection.prominence = prominence;
    }
    if let Some(pairing) = args.pairing {
        settings.detection.pairing = pairing;
    }
    if let Some(fps) = args.fps {
        settings.video.fps = fps;
    }
    if let Some(filter) = args.filter {
        settings.smoothing.filter = filter;
    }

    let config = AppConfig {
        input: args.input,
        output: args.output,
        settings,
    };

    let mut app = NodCounterApp::new(config).context("Invalid settings")?;
    let report = app.run().context("Nod detection failed")?;

    for (i, nod) in report.nods.iter().enumerate() {
        println!(
            "Nod {}: frames {}-{} ({:.2}s-{:.2}s)",
            i + 1,
            nod.start_frame,
            nod.end_frame,
            nod.start_secs,
            nod.end_secs
        );
    }
    println!("Total nods: {}", report.nod_count);

    Ok(())
}
