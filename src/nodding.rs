//! Nod detection from a head pitch time series.
//!
//! A nod is reported as a `(start_frame, end_frame)` interval running from a
//! pitch maximum to the paired pitch minimum. Maxima are prominent peaks of the
//! pitch series, minima are prominent peaks of the sign-inverted series.
//!
//! The signal may start or end mid-gesture. When the first minimum comes
//! before any maximum, frame 0 is taken as an implicit maximum; when the last
//! maximum has no minimum after it, the last frame is taken as an implicit
//! minimum. Extrema are then paired first-in first-out on each queue.

use crate::{constants::MIN_SERIES_LEN, peaks::find_peaks, Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One detected nod, from a maximum frame to a minimum frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodInterval {
    /// Frame of the maximum the nod starts from
    pub start_frame: usize,
    /// Frame of the minimum the nod ends at
    pub end_frame: usize,
}

impl NodInterval {
    /// Create a new interval
    #[must_use]
    pub fn new(start_frame: usize, end_frame: usize) -> Self {
        Self {
            start_frame,
            end_frame,
        }
    }

    /// Number of frames between start and end
    #[must_use]
    pub fn duration_frames(&self) -> usize {
        self.end_frame.saturating_sub(self.start_frame)
    }
}

impl From<(usize, usize)> for NodInterval {
    fn from((start_frame, end_frame): (usize, usize)) -> Self {
        Self::new(start_frame, end_frame)
    }
}

/// Frame indices of the prominent maxima and minima of a pitch series
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtremumSet {
    /// Peaks of the pitch series, strictly increasing
    pub maxima: Vec<usize>,
    /// Peaks of the inverted pitch series, strictly increasing
    pub minima: Vec<usize>,
}

impl ExtremumSet {
    /// Detect the extrema of `pitch` with the given prominence.
    ///
    /// No validation is done here; see [`NoddingDetector::extrema`].
    #[must_use]
    pub fn detect(pitch: &[f64], prominence: f64) -> Self {
        let inverted: Vec<f64> = pitch.iter().map(|p| -p).collect();
        Self {
            maxima: find_peaks(pitch, prominence),
            minima: find_peaks(&inverted, prominence),
        }
    }

    /// Add the implicit maximum at frame 0 and the implicit minimum at the
    /// last frame where the series starts or ends mid-nod.
    ///
    /// Sets with an empty side are returned unchanged.
    #[must_use]
    pub fn with_boundaries(mut self, series_len: usize) -> Self {
        let (Some(&first_max), Some(&first_min)) = (self.maxima.first(), self.minima.first()) else {
            return self;
        };
        if first_max > first_min {
            debug!("First minimum at frame {first_min} precedes first maximum, adding maximum at frame 0");
            self.maxima.insert(0, 0);
        }

        if let (Some(&last_max), Some(&last_min)) = (self.maxima.last(), self.minima.last()) {
            if last_min < last_max {
                let last_frame = series_len.saturating_sub(1);
                debug!("No minimum after maximum at frame {last_max}, adding minimum at frame {last_frame}");
                self.minima.push(last_frame);
            }
        }

        self
    }

    /// Whether either side is empty
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.maxima.is_empty() || self.minima.is_empty()
    }
}

/// How maxima and minima are paired into nod intervals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingPolicy {
    /// Take the head of each queue independently, regardless of position
    #[default]
    Fifo,
    /// Pair each maximum with the first unused minimum after it
    Chronological,
}

impl PairingPolicy {
    /// Pair the extrema of `set` into nod intervals
    #[must_use]
    pub fn pair(self, set: &ExtremumSet) -> Vec<NodInterval> {
        match self {
            Self::Fifo => pair_fifo(&set.maxima, &set.minima),
            Self::Chronological => pair_chronological(&set.maxima, &set.minima),
        }
    }
}

impl FromStr for PairingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "chronological" | "chrono" => Ok(Self::Chronological),
            _ => Err(Error::InvalidParameter(format!("Unknown pairing policy: {s}"))),
        }
    }
}

impl fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Chronological => write!(f, "chronological"),
        }
    }
}

fn pair_fifo(maxima: &[usize], minima: &[usize]) -> Vec<NodInterval> {
    maxima
        .iter()
        .zip(minima)
        .map(|(&start, &end)| {
            if start >= end {
                warn!("Maximum at frame {start} paired with earlier minimum at frame {end}");
            }
            NodInterval::new(start, end)
        })
        .collect()
}

fn pair_chronological(maxima: &[usize], minima: &[usize]) -> Vec<NodInterval> {
    let mut intervals: Vec<NodInterval> = Vec::with_capacity(maxima.len().min(minima.len()));
    let mut remaining = minima.iter().copied().peekable();

    for &start in maxima {
        // A maximum still inside the previous nod cannot start a new one
        if intervals.last().is_some_and(|prev| start < prev.end_frame) {
            continue;
        }
        while remaining.next_if(|&end| end <= start).is_some() {}
        match remaining.next() {
            Some(end) => intervals.push(NodInterval::new(start, end)),
            None => break,
        }
    }

    intervals
}

/// Detector turning a pitch series into nod intervals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoddingDetector {
    prominence: f64,
    pairing: PairingPolicy,
}

impl NoddingDetector {
    /// Create a detector with FIFO pairing
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `prominence` is not a positive finite number
    pub fn new(prominence: f64) -> Result<Self> {
        if !prominence.is_finite() || prominence <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Prominence must be positive, got {prominence}"
            )));
        }
        Ok(Self {
            prominence,
            pairing: PairingPolicy::Fifo,
        })
    }

    /// Use a different pairing policy
    #[must_use]
    pub fn with_pairing(mut self, pairing: PairingPolicy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Configured prominence
    #[must_use]
    pub fn prominence(&self) -> f64 {
        self.prominence
    }

    /// Configured pairing policy
    #[must_use]
    pub fn pairing(&self) -> PairingPolicy {
        self.pairing
    }

    /// Detect the raw extrema of `pitch`, before boundary synthesis
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for non-finite samples and `InsufficientSignal`
    /// if the series is too short or lacks a maximum or a minimum
    pub fn extrema(&self, pitch: &[f64]) -> Result<ExtremumSet> {
        if pitch.len() < MIN_SERIES_LEN {
            return Err(Error::InsufficientSignal(format!(
                "Need at least {MIN_SERIES_LEN} samples, got {}",
                pitch.len()
            )));
        }
        if let Some(frame) = pitch.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "Non-finite pitch {} at frame {frame}",
                pitch[frame]
            )));
        }

        let set = ExtremumSet::detect(pitch, self.prominence);
        debug!(
            "Found {} maxima and {} minima with prominence {}",
            set.maxima.len(),
            set.minima.len(),
            self.prominence
        );

        if set.is_incomplete() {
            return Err(Error::InsufficientSignal(format!(
                "Found {} maxima and {} minima with prominence {}; need at least one of each",
                set.maxima.len(),
                set.minima.len(),
                self.prominence
            )));
        }

        Ok(set)
    }

    /// Detect nod intervals in `pitch`
    ///
    /// # Errors
    ///
    /// See [`NoddingDetector::extrema`]
    pub fn detect(&self, pitch: &[f64]) -> Result<Vec<NodInterval>> {
        let set = self.extrema(pitch)?.with_boundaries(pitch.len());
        Ok(self.pairing.pair(&set))
    }
}

/// Detect nod intervals in `pitch` with FIFO pairing.
///
/// # Errors
///
/// Returns `InvalidParameter` if `prominence` is not positive or a sample is
/// not finite, and `InsufficientSignal` if no nod can be formed
pub fn detect_nodding(pitch: &[f64], prominence: f64) -> Result<Vec<NodInterval>> {
    NoddingDetector::new(prominence)?.detect(pitch)
}
