//! CLI argument parsing

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::core::decoder::ChannelSelect;
use crate::core::dsp::{RemainderPolicy, WindowSize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line under section headings
    Text,
    /// A JSON array with one report per file
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "specpeaks", version)]
#[command(about = "Windowed FFT spectrum and per-window peaks of audio files")]
pub struct Args {
    /// Input file or directory
    pub input: PathBuf,

    /// FFT window size, a power of two (defaults to the config file value, else 4)
    #[arg(short, long, env = "SPECPEAKS_WINDOW_SIZE")]
    pub window_size: Option<usize>,

    /// Zero-pad the trailing partial window instead of dropping it
    #[arg(long)]
    pub zero_pad: bool,

    /// Transform windows on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Fail files too short to fill a single window
    #[arg(long)]
    pub strict: bool,

    /// Analyse one zero-based channel instead of the mixdown
    #[arg(long)]
    pub channel: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// JSON config file (defaults to the per-user config if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Config file values with command-line flags layered on top
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::load(self.config.as_deref())?;

        if let Some(size) = self.window_size {
            config.window_size = WindowSize::new(size)
                .with_context(|| format!("Invalid --window-size {}", size))?;
        }
        if self.zero_pad {
            config.remainder = RemainderPolicy::ZeroPad;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.strict {
            config.require_windows = true;
        }
        if let Some(channel) = self.channel {
            config.channel = ChannelSelect::Index(channel);
        }

        Ok(config)
    }
}
