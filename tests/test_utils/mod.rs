// Shared helpers for the integration tests
#![allow(dead_code)]

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use uuid::Uuid;

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_specpeaks"))
}

/// Command with the per-user config and env overrides neutralised
pub fn specpeaks_command(config: &Path) -> Command {
    let mut cmd = Command::new(binary_path());
    cmd.env_remove("SPECPEAKS_WINDOW_SIZE")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

pub fn run_specpeaks(config: &Path, args: &[&str]) -> Output {
    specpeaks_command(config)
        .args(args)
        .output()
        .expect("Failed to execute specpeaks")
}

/// Fresh scratch directory under the system temp dir
pub fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("specpeaks-{}-{}", tag, Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

pub fn write_empty_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, "{}").expect("Failed to write config");
    path
}

/// Write interleaved 16-bit PCM; values are clamped to [-1, 1]
pub fn write_wav(path: &Path, samples: &[f64], channels: u16, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create wav");
    for &s in samples {
        writer
            .write_sample(to_i16(s))
            .expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize wav");
}

pub fn to_i16(s: f64) -> i16 {
    (s.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// The value a 16-bit round trip through the decoder should produce
pub fn quantized(s: f64) -> f64 {
    to_i16(s) as f64 / 32768.0
}

/// `len` samples of `amplitude * cos(2πkn/period)`
pub fn cosine(k: usize, period: usize, len: usize, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|n| amplitude * (2.0 * PI * k as f64 * n as f64 / period as f64).cos())
        .collect()
}

pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol * e.abs().max(1.0),
            "index {}: got {}, expected {}",
            i,
            a,
            e
        );
    }
}
