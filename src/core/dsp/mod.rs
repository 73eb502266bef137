//! Digital Signal Processing: window → transform → reduce

pub mod chunker;
pub mod fft;
pub mod peaks;
pub mod spectrum;

pub use chunker::{
    chunk_and_transform, chunk_and_transform_parallel, chunk_and_transform_with,
    RemainderPolicy, ScratchPair, WindowLayout,
};
pub use fft::{transform, Direction};
pub use peaks::{extract_peaks, locate_peaks, Peak};
pub use spectrum::{Signal, Spectrum, WindowSize};
