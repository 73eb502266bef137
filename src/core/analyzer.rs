// src/core/analyzer.rs
//
// High-level analysis API with builder pattern.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::decoder::{decode_audio, AudioData, ChannelSelect};
use super::dsp::{
    chunk_and_transform_parallel, chunk_and_transform_with, locate_peaks, Peak, RemainderPolicy,
    Signal, WindowLayout, WindowSize,
};
use super::error::{self, AnalysisError};
use crate::config::AnalysisConfig;

/// Everything the pipeline produces for one signal
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sample_rate: u32,
    pub window_size: usize,
    pub num_windows: usize,
    /// Trailing samples left out of every window
    pub dropped_samples: usize,
    /// Zeros appended to complete the final window
    pub padded_samples: usize,
    /// Time-domain input, passed through
    pub samples: Vec<f64>,
    /// Real channel of each transformed window, concatenated
    pub spectrum: Vec<f64>,
    /// Maximum of each spectrum window
    pub peaks: Vec<f64>,
    pub peak_bins: Vec<Peak>,
}

/// Run window → transform → reduce over `signal`.
///
/// An empty or too-short signal produces empty results unless
/// `config.require_windows` is set.
pub fn analyze_signal(signal: &Signal, config: &AnalysisConfig) -> error::Result<AnalysisReport> {
    let window_size = config.window_size;
    let layout = WindowLayout::new(signal.len(), window_size, config.remainder);

    if config.require_windows && layout.num_windows == 0 {
        return Err(AnalysisError::EmptyInput {
            samples: signal.len(),
            window_size: window_size.get(),
        });
    }

    let spectrum = if config.parallel {
        chunk_and_transform_parallel(&signal.samples, window_size, config.remainder)?
    } else {
        chunk_and_transform_with(&signal.samples, window_size, config.remainder)?
    };

    let peak_bins = locate_peaks(spectrum.as_slice(), window_size.get())?;
    let peaks = peak_bins.iter().map(|p| p.value).collect();

    Ok(AnalysisReport {
        sample_rate: signal.sample_rate,
        window_size: window_size.get(),
        num_windows: layout.num_windows,
        dropped_samples: layout.dropped,
        padded_samples: layout.padded,
        samples: signal.samples.clone(),
        spectrum: spectrum.into_bins(),
        peaks,
        peak_bins,
    })
}

/// Builder for AudioAnalyzer configuration
pub struct AnalyzerBuilder {
    config: AnalysisConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn from_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn window_size(mut self, size: WindowSize) -> Self {
        self.config.window_size = size;
        self
    }

    pub fn remainder(mut self, policy: RemainderPolicy) -> Self {
        self.config.remainder = policy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn require_windows(mut self, require: bool) -> Self {
        self.config.require_windows = require;
        self
    }

    pub fn channel(mut self, channel: ChannelSelect) -> Self {
        self.config.channel = channel;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn build<P: AsRef<Path>>(self, path: P) -> Result<AudioAnalyzer> {
        let audio = decode_audio(path.as_ref())?;
        let signal = audio.to_signal(self.config.channel)?;
        Ok(AudioAnalyzer {
            path: path.as_ref().to_path_buf(),
            audio,
            signal,
            config: self.config,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded file ready for analysis
pub struct AudioAnalyzer {
    path: PathBuf,
    audio: AudioData,
    signal: Signal,
    config: AnalysisConfig,
}

impl AudioAnalyzer {
    /// Create analyzer with default configuration
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        AnalyzerBuilder::new().build(path)
    }

    /// Create analyzer with custom configuration
    pub fn with_config<P: AsRef<Path>>(path: P, config: AnalysisConfig) -> Result<Self> {
        AnalyzerBuilder::from_config(config).build(path)
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn analyze(&self) -> Result<AnalysisReport> {
        let report = analyze_signal(&self.signal, &self.config)?;
        log::info!(
            "{}: {} window(s), {} sample(s) dropped",
            self.path.display(),
            report.num_windows,
            report.dropped_samples
        );
        Ok(report)
    }

    pub fn audio_data(&self) -> &AudioData {
        &self.audio
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
