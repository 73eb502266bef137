// src/core/error.rs
//
// Error types for the windowed FFT pipeline.

use thiserror::Error;

/// Sizing precondition violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSize {
    #[error("window size must be positive")]
    Zero,

    #[error("window size {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("FFT buffers must both hold {expected} values (real: {real}, imag: {imag})")]
    BufferMismatch {
        expected: usize,
        real: usize,
        imag: usize,
    },

    #[error("log2 size {0} is too large for this platform")]
    Log2OutOfRange(u32),

    #[error("spectrum length {len} is not a multiple of window size {window_size}")]
    PartialWindow { len: usize, window_size: usize },

    #[error("{num_windows} window(s) of {window_size} values cannot be allocated")]
    TooLarge {
        num_windows: usize,
        window_size: usize,
    },
}

/// Errors raised by the analysis core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("invalid size: {0}")]
    InvalidSize(#[from] InvalidSize),

    #[error("signal of {samples} samples contains no window of size {window_size}")]
    EmptyInput { samples: usize, window_size: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
