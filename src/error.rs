//! Error types for the nod counter library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter or sample is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The pitch series cannot yield a nod (too short, flat or monotonic)
    #[error("Insufficient signal: {0}")]
    InsufficientSignal(String),

    /// Filter initialization or parameter error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed pitch series content
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
