//! Splits a signal into non-overlapping windows and transforms each one
//!
//! Window `w` always covers `signal[w * W .. (w + 1) * W]`. Samples past the
//! last whole window are dropped unless [`RemainderPolicy::ZeroPad`] is used,
//! in which case they form one final zero-padded window.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::fft::{transform, Direction};
use super::spectrum::{zeroed_bins, Spectrum, WindowSize};
use crate::core::error::{InvalidSize, Result};

/// What to do with trailing samples that do not fill a whole window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    #[default]
    Drop,
    ZeroPad,
}

/// How a signal of a given length maps onto windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub window_size: WindowSize,
    pub num_windows: usize,
    /// Trailing samples excluded from every window
    pub dropped: usize,
    /// Zeros appended to complete the final window
    pub padded: usize,
}

impl WindowLayout {
    pub fn new(len: usize, window_size: WindowSize, policy: RemainderPolicy) -> Self {
        let whole = window_size.windows_in(len);
        let remainder = len - whole * window_size.get();

        match policy {
            RemainderPolicy::Drop => Self {
                window_size,
                num_windows: whole,
                dropped: remainder,
                padded: 0,
            },
            RemainderPolicy::ZeroPad if remainder > 0 => Self {
                window_size,
                num_windows: whole + 1,
                dropped: 0,
                padded: window_size.get() - remainder,
            },
            RemainderPolicy::ZeroPad => Self {
                window_size,
                num_windows: whole,
                dropped: 0,
                padded: 0,
            },
        }
    }
}

/// Reusable real/imaginary working buffers for one transform at a time.
///
/// Each worker thread owns its own pair.
#[derive(Debug, Clone)]
pub struct ScratchPair {
    real: Vec<f64>,
    imag: Vec<f64>,
    window_size: WindowSize,
}

impl ScratchPair {
    /// Fails with `TooLarge` when a window of this size cannot be allocated.
    pub fn new(window_size: WindowSize) -> Result<Self> {
        Ok(Self {
            real: zeroed_bins(1, window_size)?,
            imag: zeroed_bins(1, window_size)?,
            window_size,
        })
    }

    /// Forward-transform one window and return its real channel.
    ///
    /// A window shorter than the scratch length is zero-padded. A longer one
    /// is rejected with `BufferMismatch`.
    pub fn transform_window(&mut self, window: &[f64]) -> Result<&[f64]> {
        let n = window.len();
        if n > self.real.len() {
            return Err(InvalidSize::BufferMismatch {
                expected: self.real.len(),
                real: n,
                imag: self.imag.len(),
            }
            .into());
        }

        self.real[..n].copy_from_slice(window);
        self.real[n..].fill(0.0);
        self.imag.fill(0.0);

        transform(
            Direction::Forward,
            self.window_size.log2(),
            &mut self.real,
            &mut self.imag,
        )?;

        Ok(&self.real)
    }
}

/// Transform every whole window of `signal`, dropping any remainder.
pub fn chunk_and_transform(signal: &[f64], window_size: WindowSize) -> Result<Spectrum> {
    chunk_and_transform_with(signal, window_size, RemainderPolicy::Drop)
}

/// Sequential pass with an explicit remainder policy.
pub fn chunk_and_transform_with(
    signal: &[f64],
    window_size: WindowSize,
    policy: RemainderPolicy,
) -> Result<Spectrum> {
    let layout = WindowLayout::new(signal.len(), window_size, policy);
    log_layout(signal.len(), &layout);
    if layout.num_windows == 0 {
        return Spectrum::zeroed(0, window_size);
    }

    let mut spectrum = Spectrum::zeroed(layout.num_windows, window_size)?;
    let mut scratch = ScratchPair::new(window_size)?;

    let inputs = signal.chunks(window_size.get()).take(layout.num_windows);
    for (out, input) in spectrum.bins_mut().chunks_exact_mut(window_size.get()).zip(inputs) {
        out.copy_from_slice(scratch.transform_window(input)?);
    }

    Ok(spectrum)
}

/// Parallel pass over the rayon pool.
///
/// Every output window is a disjoint slice of the spectrum, so the result is
/// identical to [`chunk_and_transform_with`].
pub fn chunk_and_transform_parallel(
    signal: &[f64],
    window_size: WindowSize,
    policy: RemainderPolicy,
) -> Result<Spectrum> {
    let layout = WindowLayout::new(signal.len(), window_size, policy);
    log_layout(signal.len(), &layout);
    if layout.num_windows == 0 {
        return Spectrum::zeroed(0, window_size);
    }

    let mut spectrum = Spectrum::zeroed(layout.num_windows, window_size)?;
    let size = window_size.get();

    spectrum
        .bins_mut()
        .par_chunks_mut(size)
        .zip(signal.par_chunks(size).take(layout.num_windows))
        .try_for_each_init(
            || ScratchPair::new(window_size),
            |scratch, (out, input)| -> Result<()> {
                let scratch = scratch.as_mut().map_err(|err| err.clone())?;
                out.copy_from_slice(scratch.transform_window(input)?);
                Ok(())
            },
        )?;

    Ok(spectrum)
}

fn log_layout(len: usize, layout: &WindowLayout) {
    debug!(
        "Chunking {} samples into {} window(s) of {} (log2 {})",
        len,
        layout.num_windows,
        layout.window_size,
        layout.window_size.log2()
    );
    if layout.dropped > 0 {
        debug!("Dropping {} trailing sample(s)", layout.dropped);
    }
    if layout.padded > 0 {
        debug!("Zero-padding final window with {} sample(s)", layout.padded);
    }
}
