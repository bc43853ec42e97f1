//! Constants used throughout the application

/// Default peak prominence in degrees
pub const DEFAULT_PROMINENCE: f64 = 2.0;

/// Fewest samples that can hold an interior extremum
pub const MIN_SERIES_LEN: usize = 3;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;

/// Default window sizes for filters
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;
pub const DEFAULT_MEDIAN_WINDOW: usize = 5;
pub const DEFAULT_HAMPEL_WINDOW: usize = 7;

/// Default filter parameters
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;
pub const DEFAULT_HAMPEL_THRESHOLD: f64 = 3.0;

/// Scale factor turning a median absolute deviation into a standard deviation estimate
pub const MAD_SCALE: f64 = 1.4826;
