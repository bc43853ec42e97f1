//! Head nod detection from per-frame head pitch.
//!
//! A pose estimator running over a video yields one head pitch angle per
//! frame. This library reduces that series to a list of nods:
//! 1. Optional smoothing of the series with a causal filter
//! 2. Prominence-filtered peak detection on the series and its inverse
//! 3. Boundary synthesis for series starting or ending mid-nod
//! 4. Pairing of maxima with minima into `(start_frame, end_frame)` intervals
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use nod_counter::nodding::{detect_nodding, NodInterval};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pitch = [0.0, 5.0, 10.0, 5.0, 0.0, -5.0, -10.0, -5.0, 0.0];
//! let nods = detect_nodding(&pitch, 2.0)?;
//! assert_eq!(nods, vec![NodInterval::new(2, 6)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Smoothing and Reporting
//!
//! ```no_run
//! use nod_counter::{
//!     filters::create_filter, nodding::NoddingDetector, report::NodReport, series::PitchSeries,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let series = PitchSeries::from_file("pitch.csv")?;
//! let mut filter = create_filter("median:5")?;
//! let smoothed = series.smoothed(filter.as_mut());
//!
//! let detector = NoddingDetector::new(2.0)?;
//! let nods = detector.detect(smoothed.as_slice())?;
//!
//! let report = NodReport::new(&nods, series.len(), 30.0, detector.prominence())?;
//! println!("Total nods: {}", report.nod_count);
//! # Ok(())
//! # }
//! ```

/// Peak detection with a prominence filter
pub mod peaks;

/// Nod interval extraction from a pitch series
pub mod nodding;

/// Signal filtering algorithms for smoothing pitch series
pub mod filters;

/// Pitch series loading
pub mod series;

/// Nod count reports
pub mod report;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
pub use nodding::{detect_nodding, NodInterval, NoddingDetector};
