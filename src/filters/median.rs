use std::collections::VecDeque;
use super::PitchFilter;

/// Median filter
pub struct MedianFilter {
    window_size: usize,
    buffer: VecDeque<f64>,
}

impl MedianFilter {
    /// Create a new median filter
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero or even
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        assert!(window_size % 2 == 1, "Median filter window size must be odd, got {}", window_size);
        Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size),
        }
    }

    pub(crate) fn median(values: impl Iterator<Item = f64>) -> f64 {
        let mut sorted: Vec<f64> = values.collect();
        sorted.sort_by(f64::total_cmp);

        let len = sorted.len();
        if len == 0 {
            0.0
        } else if len % 2 == 0 {
            (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
        } else {
            sorted[len / 2]
        }
    }
}

impl PitchFilter for MedianFilter {
    fn apply(&mut self, pitch: f64) -> f64 {
        if self.buffer.len() >= self.window_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(pitch);

        Self::median(self.buffer.iter().copied())
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &str {
        "MedianFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_filter() {
        let mut filter = MedianFilter::new(3);

        assert_eq!(filter.apply(10.0), 10.0);
        assert_eq!(filter.apply(20.0), 15.0); // median of [10, 20]
        assert_eq!(filter.apply(30.0), 20.0); // median of [10, 20, 30]
    }

    #[test]
    fn test_median_with_outliers() {
        let mut filter = MedianFilter::new(3);

        filter.apply(10.0);
        filter.apply(11.0);
        // Median should filter out the outlier
        assert_eq!(filter.apply(100.0), 11.0);
    }
}
