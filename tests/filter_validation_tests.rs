//! Tests for filter parameter validation

use nod_counter::filters::{
    create_filter, exponential::ExponentialFilter, hampel::HampelFilter, median::MedianFilter,
    moving_average::MovingAverageFilter, smooth_series, PitchFilter,
};

#[test]
#[should_panic(expected = "Window size must be greater than 0")]
fn test_moving_average_zero_window() {
    let _ = MovingAverageFilter::new(0);
}

#[test]
#[should_panic(expected = "Window size must be greater than 0")]
fn test_median_zero_window() {
    let _ = MedianFilter::new(0);
}

#[test]
#[should_panic(expected = "Median filter window size must be odd")]
fn test_median_even_window() {
    let _ = MedianFilter::new(4);
}

#[test]
#[should_panic(expected = "Alpha must be in (0, 1]")]
fn test_exponential_zero_alpha() {
    let _ = ExponentialFilter::new(0.0);
}

#[test]
#[should_panic(expected = "Alpha must be in (0, 1]")]
fn test_exponential_too_large_alpha() {
    let _ = ExponentialFilter::new(1.5);
}

#[test]
#[should_panic(expected = "Window size must be odd")]
fn test_hampel_even_window() {
    let _ = HampelFilter::new(6, 3.0);
}

#[test]
#[should_panic(expected = "Threshold must be non-negative")]
fn test_hampel_negative_threshold() {
    let _ = HampelFilter::new(5, -1.0);
}

#[test]
fn test_create_filter_validation() {
    // Valid descriptions
    for name in ["none", "movingaverage:3", "moving_average", "median:7", "exponential:1.0", "hampel:5", "hampel:5:0"] {
        assert!(create_filter(name).is_ok(), "{name} should be accepted");
    }

    // Invalid descriptions return errors instead of panicking
    for name in ["movingaverage:0", "median:6", "exponential:0", "exponential:nan", "hampel:4:3.0", "hampel:5:-1", "lowpass"] {
        assert!(create_filter(name).is_err(), "{name} should be rejected");
    }
}

#[test]
fn test_filter_reset_behavior() {
    for name in ["movingaverage:3", "exponential:0.5"] {
        let mut filter = create_filter(name).unwrap();

        filter.apply(10.0);
        filter.apply(15.0);
        let before_reset = filter.apply(25.0);

        filter.reset();
        let after_reset = filter.apply(25.0);

        assert!((before_reset - after_reset).abs() > 1e-10, "{} did not reset", filter.name());
        assert_eq!(after_reset, 25.0);
    }
}

#[test]
fn test_filter_convergence() {
    for name in ["movingaverage:5", "median:5", "exponential:0.3", "hampel:7:3.0"] {
        let mut filter = create_filter(name).unwrap();
        let output = smooth_series(filter.as_mut(), &[42.0; 100]);
        assert!((output[99] - 42.0).abs() < 1e-9, "{} did not converge", filter.name());
    }
}

#[test]
fn test_filter_impulse_response() {
    for name in ["movingaverage:5", "median:5", "exponential:0.8", "hampel:5:3.0"] {
        let mut filter = create_filter(name).unwrap();

        for _ in 0..10 {
            filter.apply(10.0);
        }
        let impulse_response = filter.apply(1000.0);
        let recovery_response = filter.apply(10.0);

        match filter.name() {
            "MedianFilter" | "HampelFilter" => {
                assert!(impulse_response < 500.0, "{} did not reject impulse", filter.name());
            }
            _ => {
                assert!(impulse_response > 50.0, "{} was not affected by impulse", filter.name());
            }
        }
        assert!(recovery_response <= impulse_response);
    }
}

#[test]
fn test_filters_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn PitchFilter>();
}
