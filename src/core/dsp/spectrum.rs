//! Signal, window size and spectrum containers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{InvalidSize, Result};

/// Time-domain input handed over by the decoder
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f64>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Signal {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self { samples, sample_rate }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A validated FFT window length: positive and a power of two.
///
/// The transform's `log2` size is always derived from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(usize);

impl WindowSize {
    pub const DEFAULT: WindowSize = WindowSize(4);

    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(InvalidSize::Zero.into());
        }
        if !size.is_power_of_two() {
            return Err(InvalidSize::NotPowerOfTwo(size).into());
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Number of whole windows in `len` values
    pub fn windows_in(self, len: usize) -> usize {
        len / self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = crate::core::error::AnalysisError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> usize {
        size.0
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Concatenated real channel of every transformed window
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<f64>,
    window_size: WindowSize,
}

impl Spectrum {
    /// Wrap `bins`, which must hold a whole number of windows.
    pub fn from_bins(bins: Vec<f64>, window_size: WindowSize) -> Result<Self> {
        if bins.len() % window_size.get() != 0 {
            return Err(InvalidSize::PartialWindow {
                len: bins.len(),
                window_size: window_size.get(),
            }
            .into());
        }
        Ok(Self { bins, window_size })
    }

    pub(crate) fn zeroed(num_windows: usize, window_size: WindowSize) -> Result<Self> {
        Ok(Self {
            bins: zeroed_bins(num_windows, window_size)?,
            window_size,
        })
    }

    pub(crate) fn bins_mut(&mut self) -> &mut [f64] {
        &mut self.bins
    }

    pub fn window_size(&self) -> WindowSize {
        self.window_size
    }

    pub fn num_windows(&self) -> usize {
        self.window_size.windows_in(self.bins.len())
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.bins
    }

    /// Bins of window `index`, or `None` past the last window
    pub fn window(&self, index: usize) -> Option<&[f64]> {
        let size = self.window_size.get();
        let start = index.checked_mul(size)?;
        let end = start.checked_add(size)?;
        self.bins.get(start..end)
    }

    pub fn windows(&self) -> impl Iterator<Item = &[f64]> {
        self.bins.chunks_exact(self.window_size.get())
    }

    pub fn into_bins(self) -> Vec<f64> {
        self.bins
    }
}

/// `num_windows * window_size` zeros, or `TooLarge` if the length overflows
/// or the allocator refuses it.
pub(crate) fn zeroed_bins(num_windows: usize, window_size: WindowSize) -> Result<Vec<f64>> {
    let too_large = || InvalidSize::TooLarge {
        num_windows,
        window_size: window_size.get(),
    };

    let len = num_windows
        .checked_mul(window_size.get())
        .ok_or_else(too_large)?;
    let mut bins = Vec::new();
    bins.try_reserve_exact(len).map_err(|_| too_large())?;
    bins.resize(len, 0.0);
    Ok(bins)
}
