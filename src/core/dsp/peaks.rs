//! Per-window peak extraction over a spectrum

use serde::{Deserialize, Serialize};

use crate::core::error::{InvalidSize, Result};

/// Location and value of one window's maximum bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub window: usize,
    /// Bin index within the window
    pub bin: usize,
    pub value: f64,
}

/// Maximum value of each `window_size` slice of `spectrum`.
///
/// A trailing slice shorter than `window_size` is ignored.
pub fn extract_peaks(spectrum: &[f64], window_size: usize) -> Result<Vec<f64>> {
    Ok(locate_peaks(spectrum, window_size)?
        .into_iter()
        .map(|peak| peak.value)
        .collect())
}

/// Like [`extract_peaks`], keeping the bin each maximum came from.
///
/// Ties resolve to the leftmost bin.
pub fn locate_peaks(spectrum: &[f64], window_size: usize) -> Result<Vec<Peak>> {
    if window_size == 0 {
        return Err(InvalidSize::Zero.into());
    }

    let peaks = spectrum
        .chunks_exact(window_size)
        .enumerate()
        .map(|(window, bins)| {
            let (bin, value) = max_leftmost(bins);
            Peak { window, bin, value }
        })
        .collect();

    Ok(peaks)
}

/// Strictly-greater scan so the first of equal maxima wins.
fn max_leftmost(bins: &[f64]) -> (usize, f64) {
    let mut best = (0, bins[0]);
    for (i, &value) in bins.iter().enumerate().skip(1) {
        if value > best.1 {
            best = (i, value);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AnalysisError;

    #[test]
    fn test_leftmost_tie_wins() {
        let peaks = locate_peaks(&[3.0, 1.0, 3.0, -5.0], 4).unwrap();
        assert_eq!(peaks, vec![Peak { window: 0, bin: 0, value: 3.0 }]);
    }

    #[test]
    fn test_one_peak_per_window() {
        let spectrum = [1.0, 5.0, 2.0, 0.0, -1.0, -3.0, -2.0, -0.5, 7.0, 7.5, 7.0, 6.0];
        let peaks = extract_peaks(&spectrum, 4).unwrap();
        assert_eq!(peaks, vec![5.0, -0.5, 7.5]);
    }

    #[test]
    fn test_trailing_partial_window_ignored() {
        let peaks = extract_peaks(&[1.0, 2.0, 3.0, 4.0, 99.0], 4).unwrap();
        assert_eq!(peaks, vec![4.0]);
    }

    #[test]
    fn test_empty_spectrum() {
        assert!(extract_peaks(&[], 4).unwrap().is_empty());
    }

    #[test]
    fn test_zero_window_rejected() {
        assert_eq!(
            extract_peaks(&[1.0], 0),
            Err(AnalysisError::InvalidSize(InvalidSize::Zero))
        );
    }

    #[test]
    fn test_boundaries_do_not_shift() {
        // The maximum of each window sits in its last bin
        let spectrum: Vec<f64> = (0..12).map(|i| (i % 4) as f64 + (i / 4) as f64 * 10.0).collect();
        let peaks = locate_peaks(&spectrum, 4).unwrap();
        let bins: Vec<usize> = peaks.iter().map(|p| p.bin).collect();
        assert_eq!(bins, vec![3, 3, 3]);
        assert_eq!(extract_peaks(&spectrum, 4).unwrap(), vec![3.0, 13.0, 23.0]);
    }

    #[test]
    fn test_idempotent() {
        let spectrum = [0.5, -1.0, 2.0, 2.0, 8.0, 1.0, 1.0, 8.0];
        let first = extract_peaks(&spectrum, 4).unwrap();
        let second = extract_peaks(&spectrum, 4).unwrap();
        assert_eq!(first, second);
    }
}
