// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{Args, OutputFormat};
pub use output::{format_json, format_text, FileReport};

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::decoder::has_audio_extension;

/// Files to analyse under `path`.
///
/// A file given directly is always taken; directories are walked and
/// filtered by audio extension. Results are sorted.
pub fn collect_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        bail!("Input not found: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && has_audio_extension(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    Ok(files)
}
