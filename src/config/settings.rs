// src/config/settings.rs
//
// Analysis settings shared by the chunker and the peak extractor, loadable
// from a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::decoder::ChannelSelect;
use crate::core::dsp::{RemainderPolicy, WindowSize};

/// Complete analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// FFT window length; also the peak extraction stride
    pub window_size: WindowSize,
    /// Treatment of samples past the last whole window
    pub remainder: RemainderPolicy,
    /// Transform windows across the rayon pool
    pub parallel: bool,
    /// Fail with `EmptyInput` instead of returning empty results
    pub require_windows: bool,
    /// Which channel(s) of decoded audio form the signal
    pub channel: ChannelSelect,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::DEFAULT,
            remainder: RemainderPolicy::Drop,
            parallel: false,
            require_windows: false,
            channel: ChannelSelect::Mixdown,
        }
    }
}

impl AnalysisConfig {
    /// Per-user config location, e.g. `~/.config/specpeaks/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("specpeaks").join("config.json"))
    }

    /// Load `explicit` if given, else the per-user file if it exists,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
