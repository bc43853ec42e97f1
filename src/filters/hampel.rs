use super::{median::MedianFilter, PitchFilter};
use crate::constants::MAD_SCALE;
use std::collections::VecDeque;

/// Hampel filter for outlier removal
///
/// A sample further than `threshold` robust standard deviations from the
/// window median is replaced by the median. The window always holds the raw
/// samples, so a replaced sample does not drag later medians with it.
pub struct HampelFilter {
    window_size: usize,
    threshold: f64,
    buffer: VecDeque<f64>,
}

impl HampelFilter {
    /// Create a new Hampel filter
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is not odd or is zero, or if threshold is negative
    #[must_use]
    pub fn new(window_size: usize, threshold: f64) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        assert!(window_size % 2 == 1, "Window size must be odd, got {}", window_size);
        assert!(threshold >= 0.0, "Threshold must be non-negative, got {}", threshold);
        Self {
            window_size,
            threshold,
            buffer: VecDeque::with_capacity(window_size),
        }
    }

    fn hampel(values: &VecDeque<f64>, new_value: f64, threshold: f64) -> f64 {
        if values.is_empty() {
            return new_value;
        }

        let window = || values.iter().copied().chain(std::iter::once(new_value));
        let median = MedianFilter::median(window());
        let mad = MedianFilter::median(window().map(|x| (x - median).abs()));

        if (new_value - median).abs() > threshold * MAD_SCALE * mad {
            median
        } else {
            new_value
        }
    }
}

impl PitchFilter for HampelFilter {
    fn apply(&mut self, pitch: f64) -> f64 {
        let filtered = Self::hampel(&self.buffer, pitch, self.threshold);

        if self.buffer.len() >= self.window_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(pitch);

        filtered
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &str {
        "HampelFilter"
    }
}
