//! Configuration module for specpeaks

mod settings;

pub use settings::AnalysisConfig;
