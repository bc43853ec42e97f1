//! Main application module: load, smooth, detect, report.

use crate::{
    config::Config,
    error::Result,
    filters::PitchFilter,
    nodding::NoddingDetector,
    report::NodReport,
    series::PitchSeries,
};
use log::{debug, info};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pitch series file to analyse
    pub input: PathBuf,
    /// Where to write the JSON report, if anywhere
    pub output: Option<PathBuf>,
    /// Detection, smoothing and video settings
    pub settings: Config,
}

/// Main application struct
pub struct NodCounterApp {
    config: AppConfig,
    detector: NoddingDetector,
    filter: Box<dyn PitchFilter>,
}

impl NodCounterApp {
    /// Create a new nod counter application
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing nod counter");
        config.settings.validate()?;

        let detector = config.settings.create_detector()?;
        let filter = config.settings.create_filter()?;
        info!(
            "Prominence {}, {} pairing, {} smoothing",
            detector.prominence(),
            detector.pairing(),
            filter.name()
        );

        Ok(Self {
            config,
            detector,
            filter,
        })
    }

    /// Analyse an in-memory series
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for non-finite samples and detection errors
    /// such as `InsufficientSignal`
    pub fn analyse(&mut self, series: &PitchSeries) -> Result<NodReport> {
        // Smoothing would hide a corrupt sample from the detector
        series.validate()?;
        let smoothed = series.smoothed(self.filter.as_mut());
        let intervals = self.detector.detect(smoothed.as_slice())?;
        debug!("Detected intervals: {:?}", intervals);

        NodReport::new(
            &intervals,
            series.len(),
            self.config.settings.video.fps,
            self.detector.prominence(),
        )
    }

    /// Load the input file, analyse it and write the report if requested
    ///
    /// # Errors
    ///
    /// Returns I/O, parse or detection errors
    pub fn run(&mut self) -> Result<NodReport> {
        info!("Reading pitch series from {}", self.config.input.display());
        let series = PitchSeries::from_file(&self.config.input)?;
        info!("Processing {} frames", series.len());

        let report = self.analyse(&series)?;
        info!(
            "Detected {} nods in {:.1}s ({:.1} per minute)",
            report.nod_count,
            report.duration_secs(),
            report.nods_per_minute()
        );

        if let Some(output) = &self.config.output {
            report.write_json(output)?;
            info!("Report written to {}", output.display());
        }

        Ok(report)
    }
}
