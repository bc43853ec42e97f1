//! Property tests for nod detection

use nod_counter::{
    nodding::{NoddingDetector, PairingPolicy},
    peaks::{find_peaks_with_prominence, local_maxima, peak_prominence},
};
use proptest::prelude::*;

/// Integer-valued pitch with a per-frame offset so no two samples are equal
fn tie_free_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-30i32..30, 3..200).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(frame, v)| f64::from(v) + frame as f64 * 1e-6)
            .collect()
    })
}

fn any_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-30i32..30, 3..200).prop_map(|values| values.into_iter().map(f64::from).collect())
}

proptest! {
    #[test]
    fn intervals_run_forward(pitch in tie_free_series(), prominence in 0.5f64..20.0) {
        let detector = NoddingDetector::new(prominence).unwrap();
        if let Ok(nods) = detector.detect(&pitch) {
            for nod in &nods {
                prop_assert!(nod.start_frame < nod.end_frame, "{:?}", nod);
                prop_assert!(nod.end_frame < pitch.len());
            }
            for pair in nods.windows(2) {
                prop_assert!(pair[0].start_frame < pair[1].start_frame);
                prop_assert!(pair[0].end_frame <= pair[1].start_frame);
            }
        }
    }

    #[test]
    fn count_is_min_of_synthesized_extrema(pitch in any_series(), prominence in 0.5f64..20.0) {
        let detector = NoddingDetector::new(prominence).unwrap();
        match detector.extrema(&pitch) {
            Ok(set) => {
                let set = set.with_boundaries(pitch.len());
                let nods = detector.detect(&pitch).unwrap();
                prop_assert_eq!(nods.len(), set.maxima.len().min(set.minima.len()));
            }
            Err(_) => {
                prop_assert!(detector.detect(&pitch).is_err());
            }
        }
    }

    #[test]
    fn detection_is_deterministic(pitch in any_series(), prominence in 0.5f64..20.0) {
        let detector = NoddingDetector::new(prominence).unwrap();
        let first = detector.detect(&pitch).ok();
        let second = detector.detect(&pitch).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn chronological_pairs_never_overlap(pitch in any_series(), prominence in 0.5f64..20.0) {
        let detector = NoddingDetector::new(prominence)
            .unwrap()
            .with_pairing(PairingPolicy::Chronological);
        if let Ok(nods) = detector.detect(&pitch) {
            for nod in &nods {
                prop_assert!(nod.start_frame < nod.end_frame);
            }
            for pair in nods.windows(2) {
                prop_assert!(pair[0].end_frame <= pair[1].start_frame);
            }
        }
    }

    #[test]
    fn extrema_are_strictly_increasing(pitch in any_series(), prominence in 0.5f64..20.0) {
        let detector = NoddingDetector::new(prominence).unwrap();
        if let Ok(set) = detector.extrema(&pitch) {
            prop_assert!(set.maxima.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(set.minima.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prominences_match_outward_walk(pitch in any_series()) {
        let peaks = find_peaks_with_prominence(&pitch, 0.0);
        prop_assert_eq!(peaks.len(), local_maxima(&pitch).len());
        for peak in peaks {
            prop_assert_eq!(Some(peak.prominence), peak_prominence(&pitch, peak.index));
        }
    }
}
