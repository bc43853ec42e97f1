//! Nod count summary with frame-to-time conversion.

use crate::{nodding::NodInterval, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A nod with its timing in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodEvent {
    /// Frame of the maximum
    pub start_frame: usize,
    /// Frame of the minimum
    pub end_frame: usize,
    /// Start time in seconds
    pub start_secs: f64,
    /// End time in seconds
    pub end_secs: f64,
    /// Duration in seconds
    pub duration_secs: f64,
}

impl NodEvent {
    /// Attach timing to an interval at the given frame rate
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Frame indices stay far below 2^52
    pub fn from_interval(interval: NodInterval, fps: f64) -> Self {
        let start_secs = interval.start_frame as f64 / fps;
        let end_secs = interval.end_frame as f64 / fps;
        Self {
            start_frame: interval.start_frame,
            end_frame: interval.end_frame,
            start_secs,
            end_secs,
            duration_secs: end_secs - start_secs,
        }
    }
}

/// Result of counting nods in one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodReport {
    /// Number of frames in the analysed series
    pub frame_count: usize,
    /// Frame rate used for the time columns
    pub fps: f64,
    /// Peak prominence used for detection
    pub prominence: f64,
    /// Number of nods detected
    pub nod_count: usize,
    /// Detected nods in order
    pub nods: Vec<NodEvent>,
}

impl NodReport {
    /// Build a report from detected intervals
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `fps` is not a positive finite number
    pub fn new(intervals: &[NodInterval], frame_count: usize, fps: f64, prominence: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(Error::InvalidParameter(format!("FPS must be positive, got {fps}")));
        }

        Ok(Self {
            frame_count,
            fps,
            prominence,
            nod_count: intervals.len(),
            nods: intervals.iter().map(|&i| NodEvent::from_interval(i, fps)).collect(),
        })
    }

    /// Length of the analysed series in seconds
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / self.fps
    }

    /// Nods per minute over the whole series
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn nods_per_minute(&self) -> f64 {
        let duration = self.duration_secs();
        if duration > 0.0 {
            self.nod_count as f64 * 60.0 / duration
        } else {
            0.0
        }
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to `path`
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Json` on failure
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_timing() {
        let event = NodEvent::from_interval(NodInterval::new(30, 45), 30.0);
        assert!((event.start_secs - 1.0).abs() < 1e-12);
        assert!((event.end_secs - 1.5).abs() < 1e-12);
        assert!((event.duration_secs - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_report_counts() {
        let intervals = [NodInterval::new(2, 6), NodInterval::new(10, 12)];
        let report = NodReport::new(&intervals, 600, 30.0, 2.0).unwrap();
        assert_eq!(report.nod_count, 2);
        assert_eq!(report.nods[1].end_frame, 12);
        assert!((report.duration_secs() - 20.0).abs() < 1e-12);
        assert!((report.nods_per_minute() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_rejects_bad_fps() {
        assert!(NodReport::new(&[], 10, 0.0, 2.0).is_err());
        assert!(NodReport::new(&[], 10, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_report_json() {
        let report = NodReport::new(&[NodInterval::new(0, 5)], 13, 25.0, 2.0).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"nod_count\": 1"));
        let parsed: NodReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
