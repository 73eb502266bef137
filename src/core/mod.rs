//! Core analysis modules: decoding, the windowed FFT pipeline, and reports

pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod error;

pub use analyzer::{analyze_signal, AnalysisReport, AnalyzerBuilder, AudioAnalyzer};
pub use decoder::{decode_audio, AudioData, ChannelSelect};
pub use dsp::{
    chunk_and_transform, extract_peaks, locate_peaks, transform, Direction, Peak,
    RemainderPolicy, Signal, Spectrum, WindowSize,
};
pub use error::{AnalysisError, InvalidSize, Result};
