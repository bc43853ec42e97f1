//! Configuration management for the nod counter

use crate::{
    constants::{
        DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_FPS, DEFAULT_HAMPEL_THRESHOLD, DEFAULT_HAMPEL_WINDOW,
        DEFAULT_MEDIAN_WINDOW, DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_PROMINENCE,
    },
    filters::PitchFilter,
    nodding::{NoddingDetector, PairingPolicy},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nod detection parameters
    pub detection: DetectionConfig,

    /// Pitch smoothing applied before detection
    pub smoothing: SmoothingConfig,

    /// Source video properties
    pub video: VideoConfig,
}

/// Nod detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum peak prominence in degrees
    pub prominence: f64,

    /// How maxima and minima are paired
    pub pairing: PairingPolicy,
}

/// Smoothing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Filter type (none, moving_average, median, exponential, hampel)
    pub filter: String,

    /// Moving average window size
    pub moving_average_window: usize,

    /// Median filter window size
    pub median_window: usize,

    /// Exponential filter alpha value
    pub exponential_alpha: f64,

    /// Hampel filter window size
    pub hampel_window: usize,

    /// Hampel filter threshold
    pub hampel_threshold: f64,
}

/// Source video properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Frame rate used to convert frames to seconds
    pub fps: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            prominence: DEFAULT_PROMINENCE,
            pairing: PairingPolicy::Fifo,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            filter: "none".to_string(),
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            median_window: DEFAULT_MEDIAN_WINDOW,
            exponential_alpha: DEFAULT_EXPONENTIAL_ALPHA,
            hampel_window: DEFAULT_HAMPEL_WINDOW,
            hampel_threshold: DEFAULT_HAMPEL_THRESHOLD,
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `ConfigError` if it does not parse
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text does not parse
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails and `Io` if writing fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create the smoothing filter from configuration
    ///
    /// # Errors
    ///
    /// Returns `FilterError` for an unknown filter or invalid parameters
    pub fn create_filter(&self) -> Result<Box<dyn PitchFilter>> {
        use crate::filters::create_filter;

        let s = &self.smoothing;
        let description = match s.filter.to_lowercase().as_str() {
            "moving_average" | "movingaverage" => format!("moving_average:{}", s.moving_average_window),
            "median" => format!("median:{}", s.median_window),
            "exponential" => format!("exponential:{}", s.exponential_alpha),
            "hampel" => format!("hampel:{}:{}", s.hampel_window, s.hampel_threshold),
            _ => s.filter.clone(),
        };

        create_filter(&description)
    }

    /// Create the nod detector from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the prominence is not positive
    pub fn create_detector(&self) -> Result<NoddingDetector> {
        Ok(NoddingDetector::new(self.detection.prominence)?.with_pairing(self.detection.pairing))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if !self.detection.prominence.is_finite() || self.detection.prominence <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Prominence must be positive, got {}",
                self.detection.prominence
            )));
        }

        if !self.video.fps.is_finite() || self.video.fps <= 0.0 {
            return Err(Error::ConfigError(format!("FPS must be positive, got {}", self.video.fps)));
        }

        self.create_filter()
            .map_err(|e| Error::ConfigError(format!("Invalid smoothing settings: {e}")))?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Nod Counter Configuration

# Nod detection
detection:
  prominence: 2.0
  pairing: "fifo"

# Pitch smoothing before detection
smoothing:
  filter: "none"
  moving_average_window: 5
  median_window: 5
  exponential_alpha: 0.5
  hampel_window: 7
  hampel_threshold: 3.0

# Source video
video:
  fps: 30.0
"#;
