//! Output formatting for CLI results

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use crate::core::AnalysisReport;

/// Report tagged with the file it came from
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: String,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

/// Plain-text report, one value per line
pub fn format_text(report: &AnalysisReport, verbose: bool) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "size is {}", report.samples.len());
    let _ = writeln!(output, "sample rate is {}", report.sample_rate);

    if verbose {
        let _ = writeln!(output, "window size is {}", report.window_size);
        let _ = writeln!(output, "windows: {}", report.num_windows);
        if report.dropped_samples > 0 {
            let _ = writeln!(output, "dropped trailing samples: {}", report.dropped_samples);
        }
        if report.padded_samples > 0 {
            let _ = writeln!(output, "zero-padded samples: {}", report.padded_samples);
        }
    }

    push_section(&mut output, "Time Domain data:", &report.samples);
    push_section(&mut output, "Frequency Domain data:", &report.spectrum);
    push_section(&mut output, "All peaks are:", &report.peaks);

    if verbose && !report.peak_bins.is_empty() {
        output.push_str("Peak bins:\n");
        for peak in &report.peak_bins {
            let _ = writeln!(output, "  window {}: bin {} ({:.6})", peak.window, peak.bin, peak.value);
        }
    }

    output
}

fn push_section(output: &mut String, heading: &str, values: &[f64]) {
    output.push_str(heading);
    output.push('\n');
    for value in values {
        let _ = writeln!(output, "{:.6}", value);
    }
}

/// JSON array of per-file reports
pub fn format_json(reports: &[FileReport<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
