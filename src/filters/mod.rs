//! Signal filtering algorithms for smoothing pitch series.
//!
//! Pose estimators produce jittery per-frame pitch. Running the series
//! through a causal filter before detection suppresses spurious extrema.
//! Causal filters delay the signal, so smoothed extrema land a few frames
//! after the raw ones.

/// Moving average filter for simple smoothing
pub mod moving_average;

/// Median filter for outlier rejection
pub mod median;

/// Exponential filter for responsive smoothing
pub mod exponential;

/// Hampel filter for robust outlier detection and smoothing
pub mod hampel;

use crate::{Error, Result};

/// Trait for all pitch filters
pub trait PitchFilter: Send + Sync {
    /// Feed one sample and return the filtered value
    fn apply(&mut self, pitch: f64) -> f64;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PitchFilter for NoFilter {
    fn apply(&mut self, pitch: f64) -> f64 {
        pitch
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Run a whole series through `filter`, starting from a clean state
pub fn smooth_series(filter: &mut dyn PitchFilter, series: &[f64]) -> Vec<f64> {
    filter.reset();
    series.iter().map(|&pitch| filter.apply(pitch)).collect()
}

fn parse_param<T: std::str::FromStr>(filter: &str, value: Option<&str>, default: T) -> Result<T> {
    match value {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::FilterError(format!("Invalid parameter '{raw}' for {filter} filter"))),
    }
}

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(Error::FilterError("Window size must be greater than 0".to_string()));
    }
    Ok(())
}

fn check_odd_window(window: usize) -> Result<()> {
    check_window(window)?;
    if window % 2 == 0 {
        return Err(Error::FilterError(format!("Window size must be odd, got {window}")));
    }
    Ok(())
}

/// Create a pitch filter from a `name[:param[:param]]` description
///
/// Examples: `none`, `movingaverage:5`, `median:5`, `exponential:0.3`, `hampel:7:3.0`.
///
/// # Errors
///
/// Returns `FilterError` for unknown names or out-of-range parameters
pub fn create_filter(description: &str) -> Result<Box<dyn PitchFilter>> {
    use crate::constants::{
        DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_HAMPEL_THRESHOLD, DEFAULT_HAMPEL_WINDOW, DEFAULT_MEDIAN_WINDOW,
        DEFAULT_MOVING_AVERAGE_WINDOW,
    };

    let lowered = description.to_lowercase();
    let mut parts = lowered.split(':');
    let name = parts.next().unwrap_or_default();
    let first = parts.next();
    let second = parts.next();

    match name {
        "none" | "nofilter" => Ok(Box::new(NoFilter)),
        "moving_average" | "movingaverage" => {
            let window = parse_param(name, first, DEFAULT_MOVING_AVERAGE_WINDOW)?;
            check_window(window)?;
            Ok(Box::new(moving_average::MovingAverageFilter::new(window)))
        }
        "median" => {
            let window = parse_param(name, first, DEFAULT_MEDIAN_WINDOW)?;
            check_odd_window(window)?;
            Ok(Box::new(median::MedianFilter::new(window)))
        }
        "exponential" => {
            let alpha: f64 = parse_param(name, first, DEFAULT_EXPONENTIAL_ALPHA)?;
            if alpha.is_nan() || alpha <= 0.0 || alpha > 1.0 {
                return Err(Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
            }
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)))
        }
        "hampel" => {
            let window = parse_param(name, first, DEFAULT_HAMPEL_WINDOW)?;
            check_odd_window(window)?;
            let threshold: f64 = parse_param(name, second, DEFAULT_HAMPEL_THRESHOLD)?;
            if threshold.is_nan() || threshold < 0.0 {
                return Err(Error::FilterError(format!("Threshold must be non-negative, got {threshold}")));
            }
            Ok(Box::new(hampel::HampelFilter::new(window, threshold)))
        }
        _ => Err(Error::FilterError(format!("Unknown filter type: {description}"))),
    }
}
