// src/main.rs
use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use std::path::Path;
use std::process::ExitCode;

use specpeaks::cli::{self, Args, FileReport, OutputFormat};
use specpeaks::config::AnalysisConfig;
use specpeaks::core::{AnalysisReport, AudioAnalyzer};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Returns `false` if any file failed
fn run(args: &Args) -> Result<bool> {
    let config = args.resolve_config()?;
    log::debug!("Using config: {:?}", config);

    let audio_files = cli::collect_audio_files(&args.input)?;

    if audio_files.is_empty() {
        eprintln!("{}", "No audio files found!".red());
        return Ok(true);
    }

    let mut reports: Vec<(String, AnalysisReport)> = Vec::new();
    let mut all_ok = true;

    for file_path in &audio_files {
        match process_file(file_path, &config) {
            Ok(report) => {
                if args.format == OutputFormat::Text {
                    print_text(file_path, &report, args.verbose, audio_files.len() > 1);
                }
                reports.push((file_path.display().to_string(), report));
            }
            Err(e) => {
                log::error!("{}: {:#}", file_path.display(), e);
                all_ok = false;
            }
        }
    }

    if args.format == OutputFormat::Json {
        let tagged: Vec<FileReport<'_>> = reports
            .iter()
            .map(|(file, report)| FileReport {
                file: file.clone(),
                report,
            })
            .collect();
        println!("{}", cli::format_json(&tagged)?);
    }

    Ok(all_ok)
}

fn process_file(file_path: &Path, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let analyzer = AudioAnalyzer::with_config(file_path, config.clone())?;
    analyzer.analyze()
}

fn print_text(file_path: &Path, report: &AnalysisReport, verbose: bool, with_header: bool) {
    if with_header {
        println!("Analyzing: {}", file_path.display().to_string().cyan());
    }
    print!("{}", cli::format_text(report, verbose));
    if with_header {
        println!();
    }
}
