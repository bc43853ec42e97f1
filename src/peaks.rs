//! Peak detection with a topographic prominence filter.
//!
//! A peak is an interior sample strictly higher than both neighbours. A flat
//! plateau that is strictly higher than the samples on either side counts as
//! one peak located at its middle sample (rounded down). The prominence of a
//! peak is its height above the higher of its two bases, where each base is
//! the lowest sample seen when walking outward until a strictly higher sample
//! or the signal boundary is reached.
//!
//! Bases for all samples are found in one pass in each direction, so
//! [`find_peaks`] runs in linear time regardless of how many peaks there are.

/// A detected peak and its prominence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index of the peak
    pub index: usize,
    /// Height above the higher of the two bases
    pub prominence: f64,
}

/// Find all interior local maxima, including plateau midpoints.
#[must_use]
#[allow(clippy::float_cmp)] // Plateaus are runs of exactly equal samples
pub fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let last = x.len() - 1;
    let mut i = 1;
    while i < last {
        if x[i - 1] < x[i] {
            // Skip over a possible plateau
            let mut ahead = i + 1;
            while ahead < last && x[ahead] == x[i] {
                ahead += 1;
            }

            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }

    peaks
}

/// Lowest sample between each position and the nearest strictly higher
/// earlier sample, or the start of `samples` if there is none.
fn running_bases(samples: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut bases = Vec::with_capacity(samples.size_hint().0);
    // (height, lowest sample since the entry below) with strictly decreasing heights
    let mut stack: Vec<(f64, f64)> = Vec::new();

    for v in samples {
        let mut base = v;
        while let Some(&(height, lowest)) = stack.last() {
            if height > v {
                break;
            }
            base = base.min(lowest);
            stack.pop();
        }
        stack.push((v, base));
        bases.push(base);
    }

    bases
}

/// Compute the prominence of the sample at `peak` by walking outward.
///
/// Suited to single queries; [`find_peaks_with_prominence`] computes all
/// prominences in one pass. Returns `None` when `peak` is out of bounds.
#[must_use]
pub fn peak_prominence(x: &[f64], peak: usize) -> Option<f64> {
    let height = *x.get(peak)?;

    let left_base = x[..=peak]
        .iter()
        .rev()
        .take_while(|&&v| v <= height)
        .fold(height, |base, &v| base.min(v));
    let right_base = x[peak..]
        .iter()
        .take_while(|&&v| v <= height)
        .fold(height, |base, &v| base.min(v));

    Some(height - left_base.max(right_base))
}

/// Find peaks whose prominence is at least `min_prominence`.
#[must_use]
pub fn find_peaks_with_prominence(x: &[f64], min_prominence: f64) -> Vec<Peak> {
    let candidates = local_maxima(x);
    if candidates.is_empty() {
        return Vec::new();
    }

    let left = running_bases(x.iter().copied());
    let mut right = running_bases(x.iter().rev().copied());
    right.reverse();

    candidates
        .into_iter()
        .map(|index| Peak {
            index,
            prominence: x[index] - left[index].max(right[index]),
        })
        .filter(|peak| peak.prominence >= min_prominence)
        .collect()
}

/// Indices of peaks whose prominence is at least `min_prominence`.
#[must_use]
pub fn find_peaks(x: &[f64], min_prominence: f64) -> Vec<usize> {
    find_peaks_with_prominence(x, min_prominence)
        .into_iter()
        .map(|peak| peak.index)
        .collect()
}
