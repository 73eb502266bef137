//! specpeaks - windowed FFT spectra and per-window peaks
//!
//! Splits a decoded audio signal into fixed, non-overlapping windows, runs an
//! in-place radix-2 FFT over each one, and reduces every transformed window
//! to its largest bin.
//!
//! ## Module Structure
//!
//! - `core` - Decoding, the FFT pipeline, and analysis reports
//! - `cli` - Command-line interface
//! - `config` - Analysis settings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specpeaks::core::{AudioAnalyzer, WindowSize};
//!
//! let analyzer = AudioAnalyzer::builder()
//!     .window_size(WindowSize::new(1024)?)
//!     .build("take.wav")?;
//! let report = analyzer.analyze()?;
//!
//! println!("{} windows, first peak {:.3}", report.num_windows, report.peaks[0]);
//! ```
//!
//! ## Window boundaries
//!
//! Window `w` covers samples `w * W .. (w + 1) * W`. A trailing remainder
//! shorter than `W` is dropped by default; `RemainderPolicy::ZeroPad` turns
//! it into one final zero-padded window instead.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Analysis settings
pub mod config;

pub use config::AnalysisConfig;
pub use self::core::{
    analyze_signal, chunk_and_transform, extract_peaks, locate_peaks, transform, AnalysisError,
    AnalysisReport, AnalyzerBuilder, AudioAnalyzer, ChannelSelect, Direction, InvalidSize, Peak,
    RemainderPolicy, Signal, Spectrum, WindowSize,
};
