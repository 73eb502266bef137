//! In-place radix-2 FFT over split real/imaginary buffers

use num_complex::Complex;
use std::f64::consts::PI;

use crate::core::error::{InvalidSize, Result};

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    /// Unnormalized: `inverse(forward(x)) == n * x`
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Iterative Cooley-Tukey FFT, computed in place.
///
/// Both buffers must hold exactly `2^log2_size` values. The transform does
/// not allocate; callers own the buffers and may reuse them between calls.
pub fn transform(
    direction: Direction,
    log2_size: u32,
    real: &mut [f64],
    imag: &mut [f64],
) -> Result<()> {
    let n = 1usize
        .checked_shl(log2_size)
        .ok_or(InvalidSize::Log2OutOfRange(log2_size))?;

    if real.len() != n || imag.len() != n {
        return Err(InvalidSize::BufferMismatch {
            expected: n,
            real: real.len(),
            imag: imag.len(),
        }
        .into());
    }

    if n < 2 {
        return Ok(());
    }

    bit_reverse_permute(log2_size, real, imag);

    let sign = direction.sign();
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let angle_step = sign * 2.0 * PI / size as f64;

        for k in 0..half {
            let twiddle = Complex::from_polar(1.0, angle_step * k as f64);

            let mut start = 0;
            while start < n {
                let top = start + k;
                let bottom = top + half;

                let u = Complex::new(real[top], imag[top]);
                let t = twiddle * Complex::new(real[bottom], imag[bottom]);

                let sum = u + t;
                let diff = u - t;
                real[top] = sum.re;
                imag[top] = sum.im;
                real[bottom] = diff.re;
                imag[bottom] = diff.im;

                start += size;
            }
        }

        size <<= 1;
    }

    Ok(())
}

/// Reorder both buffers into bit-reversed index order.
fn bit_reverse_permute(log2_size: u32, real: &mut [f64], imag: &mut [f64]) {
    let shift = usize::BITS - log2_size;
    for i in 0..real.len() {
        let j = i.reverse_bits() >> shift;
        if j > i {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AnalysisError;
    use rustfft::FftPlanner;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(
                (a - e).abs() <= tol * e.abs().max(1.0),
                "index {}: got {}, expected {}",
                i,
                a,
                e
            );
        }
    }

    #[test]
    fn test_four_point_known_values() {
        let mut re = vec![1.0, 2.0, 3.0, 4.0];
        let mut im = vec![0.0; 4];
        transform(Direction::Forward, 2, &mut re, &mut im).unwrap();

        assert_close(&re, &[10.0, -2.0, -2.0, -2.0], 1e-12);
        assert_close(&im, &[0.0, 2.0, 0.0, -2.0], 1e-12);
    }

    #[test]
    fn test_round_trip_scales_by_size() {
        let original: Vec<f64> = (0..64).map(|i| ((i * 7) % 13) as f64 - 6.0).collect();
        let mut re = original.clone();
        let mut im = vec![0.0; 64];

        transform(Direction::Forward, 6, &mut re, &mut im).unwrap();
        transform(Direction::Inverse, 6, &mut re, &mut im).unwrap();

        let scaled: Vec<f64> = original.iter().map(|x| x * 64.0).collect();
        assert_close(&re, &scaled, 1e-9);
        assert_close(&im, &vec![0.0; 64], 1e-9);
    }

    #[test]
    fn test_pure_tone_concentrates_energy() {
        let n = 32;
        let k = 5;
        let mut re: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * k as f64 * i as f64 / n as f64).cos())
            .collect();
        let mut im = vec![0.0; n];
        transform(Direction::Forward, 5, &mut re, &mut im).unwrap();

        for bin in 0..n {
            let mag = Complex::new(re[bin], im[bin]).norm();
            if bin == k || bin == n - k {
                assert!((mag - n as f64 / 2.0).abs() < 1e-9, "bin {} mag {}", bin, mag);
            } else {
                assert!(mag < 1e-9, "bin {} leaked {}", bin, mag);
            }
        }
    }

    #[test]
    fn test_matches_rustfft() {
        let n = 256;
        let input: Vec<f64> = (0..n)
            .map(|i| (i as f64 * 0.37).sin() + 0.25 * (i as f64 * 1.9).cos())
            .collect();

        let mut reference: Vec<rustfft::num_complex::Complex<f64>> = input
            .iter()
            .map(|&x| rustfft::num_complex::Complex::new(x, 0.0))
            .collect();
        FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut reference);

        let mut re = input.clone();
        let mut im = vec![0.0; n];
        transform(Direction::Forward, 8, &mut re, &mut im).unwrap();

        let ref_re: Vec<f64> = reference.iter().map(|c| c.re).collect();
        let ref_im: Vec<f64> = reference.iter().map(|c| c.im).collect();
        assert_close(&re, &ref_re, 1e-9);
        assert_close(&im, &ref_im, 1e-9);
    }

    #[test]
    fn test_single_point_is_identity() {
        let mut re = vec![2.5];
        let mut im = vec![-1.0];
        transform(Direction::Forward, 0, &mut re, &mut im).unwrap();
        assert_eq!(re, vec![2.5]);
        assert_eq!(im, vec![-1.0]);
    }

    #[test]
    fn test_buffer_mismatch_rejected() {
        let mut re = vec![0.0; 8];
        let mut im = vec![0.0; 4];
        let err = transform(Direction::Forward, 3, &mut re, &mut im).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::from(InvalidSize::BufferMismatch { expected: 8, real: 8, imag: 4 })
        );

        let mut im = vec![0.0; 8];
        assert!(transform(Direction::Forward, 2, &mut re, &mut im).is_err());
    }

    #[test]
    fn test_oversized_log2_rejected() {
        let mut re: [f64; 0] = [];
        let mut im: [f64; 0] = [];
        let err = transform(Direction::Forward, usize::BITS, &mut re, &mut im).unwrap_err();
        assert_eq!(err, AnalysisError::from(InvalidSize::Log2OutOfRange(usize::BITS)));
    }

    #[test]
    fn test_nan_propagates() {
        let mut re = vec![f64::NAN, 0.0, 0.0, 0.0];
        let mut im = vec![0.0; 4];
        transform(Direction::Forward, 2, &mut re, &mut im).unwrap();
        assert!(re.iter().all(|x| x.is_nan()));
    }
}
