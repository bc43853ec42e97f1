use std::collections::VecDeque;
use super::PitchFilter;

/// Moving average filter
pub struct MovingAverageFilter {
    window_size: usize,
    buffer: VecDeque<f64>,
}

impl MovingAverageFilter {
    /// Create a new moving average filter
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        Self {
            window_size,
            buffer: VecDeque::with_capacity(window_size),
        }
    }
}

impl PitchFilter for MovingAverageFilter {
    #[allow(clippy::cast_precision_loss)] // Window sizes are small
    fn apply(&mut self, pitch: f64) -> f64 {
        if self.buffer.len() >= self.window_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(pitch);

        self.buffer.iter().sum::<f64>() / self.buffer.len() as f64
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &str {
        "MovingAverageFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average() {
        let mut filter = MovingAverageFilter::new(3);

        assert_eq!(filter.apply(10.0), 10.0);
        assert_eq!(filter.apply(20.0), 15.0);
        assert_eq!(filter.apply(30.0), 20.0);

        // Window is full, oldest value should be dropped
        assert_eq!(filter.apply(40.0), 30.0);
    }

    #[test]
    fn test_flattens_single_frame_jitter() {
        let mut filter = MovingAverageFilter::new(5);
        let out: Vec<f64> = [0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0]
            .iter()
            .map(|&p| filter.apply(p))
            .collect();
        assert!(out.iter().all(|&p| p <= 1.0));
    }
}
