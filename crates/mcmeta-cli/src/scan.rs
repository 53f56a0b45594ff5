//! `scan` and `scan-dir` commands

use anyhow::{Context, Result};
use mcmeta_archive::{ArchiveReport, ArchiveScanner, ResolvedEntry, ScanConfig};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Scan one archive and print its identifiers.
pub fn run(file: &Path, config: &ScanConfig, json: bool) -> Result<()> {
    let entries = ArchiveScanner::from_config(config)
        .scan_file(file)
        .with_context(|| format!("Failed to scan archive: {}", file.display()))?;
    info!(archive = %file.display(), manifests = entries.len(), "scan complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_entries(&entries, ""));
    }
    Ok(())
}

/// Scan every matching archive in a directory and print one block per archive.
pub fn run_dir(dir: &Path, config: &ScanConfig, json: bool) -> Result<()> {
    let reports = mcmeta_archive::scan_directory(dir, config)
        .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
    info!(dir = %dir.display(), archives = reports.len(), "directory scan complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", render_reports(&reports));
    }
    Ok(())
}

/// One line per identifier: `id (Dialect, entry/path)`.
pub fn render_entries(entries: &[ResolvedEntry], indent: &str) -> String {
    let mut out = String::new();
    for entry in entries {
        for id in &entry.identifiers {
            let _ = writeln!(out, "{indent}{id} ({}, {})", entry.dialect, entry.path);
        }
    }
    out
}

pub fn render_reports(reports: &[ArchiveReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}", report.file_name);
        match &report.error {
            Some(error) => {
                let _ = writeln!(out, "  error: {error}");
            }
            None if report.entries.is_empty() => {
                let _ = writeln!(out, "  (no manifests)");
            }
            None => out.push_str(&render_entries(&report.entries, "  ")),
        }
    }
    out
}
