//! Loading per-frame pitch series produced by a pose estimator.

use crate::{filters::PitchFilter, Error, Result};
use log::debug;
use std::path::Path;

/// Head pitch in degrees, one sample per video frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PitchSeries(Vec<f64>);

impl PitchSeries {
    /// Wrap an existing vector of samples
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    /// Number of frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no frames
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Samples as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the series and return its samples
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Check that every sample is a finite number
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first non-finite frame
    pub fn validate(&self) -> Result<()> {
        match self.0.iter().position(|p| !p.is_finite()) {
            Some(frame) => Err(Error::InvalidParameter(format!(
                "Non-finite pitch {} at frame {frame}",
                self.0[frame]
            ))),
            None => Ok(()),
        }
    }

    /// Return a copy smoothed by `filter`
    #[must_use]
    pub fn smoothed(&self, filter: &mut dyn PitchFilter) -> Self {
        debug!("Smoothing {} samples with {}", self.len(), filter.name());
        Self(crate::filters::smooth_series(filter, &self.0))
    }

    /// Parse plain text: one pitch per line, or `frame,pitch` rows.
    ///
    /// Rows with more columns take pitch from the second one. Blank lines and
    /// `#` comments are skipped, as is a leading header row in which no field
    /// parses as a number.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` naming the offending line
    pub fn parse_text(content: &str) -> Result<Self> {
        let mut samples = Vec::new();
        let mut seen_row = false;

        for (line_no, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let is_header = !seen_row && fields.iter().all(|field| field.parse::<f64>().is_err());
            seen_row = true;
            if is_header {
                debug!("Skipping header row: {line}");
                continue;
            }

            // Pitch is the second column of `frame,pitch[,...]` rows
            let value = fields.get(1).unwrap_or(&fields[0]);
            let pitch = value.parse::<f64>().map_err(|_| {
                Error::ParseError(format!("Line {}: cannot parse pitch from '{line}'", line_no + 1))
            })?;
            samples.push(pitch);
        }

        Ok(Self(samples))
    }

    /// Parse a JSON array of numbers
    ///
    /// # Errors
    ///
    /// Returns `Json` if the content is not an array of numbers
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(content)?))
    }

    /// Load from a file; `.json` files are read as JSON, everything else as text
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or a parse error for bad content
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let series = if is_json {
            Self::from_json(&content)?
        } else {
            Self::parse_text(&content)?
        };
        debug!("Loaded {} pitch samples from {}", series.len(), path.display());

        Ok(series)
    }
}

impl From<Vec<f64>> for PitchSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

impl AsRef<[f64]> for PitchSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
