//! Directory scanning.

use crate::{ArchiveError, ArchiveResult, ArchiveScanner, ResolvedEntry, ScanConfig, identifiers};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of scanning one archive during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveReport {
    pub path: PathBuf,

    /// File name, for display.
    pub file_name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<ResolvedEntry>,

    /// Set when the archive itself could not be opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ArchiveReport {
    /// Identifiers found in this archive, in entry order.
    pub fn identifiers(&self) -> Vec<String> {
        identifiers(&self.entries)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Scan every matching archive directly inside `dir`.
///
/// The file filters and the per-archive limits both come from `config`.
/// Subdirectories are not descended into. Results are sorted by file name.
/// An archive that cannot be opened gets a report carrying the error instead
/// of aborting the scan.
pub fn scan_directory<P: AsRef<Path>>(
    dir: P,
    config: &ScanConfig,
) -> ArchiveResult<Vec<ArchiveReport>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ArchiveError::NotADirectory(dir.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if config.matches_file_name(&file_name) {
            candidates.push((file_name, entry.path()));
        } else {
            debug!(file = %file_name, "skipping file that does not match filters");
        }
    }
    candidates.sort();

    let scanner = ArchiveScanner::from_config(config);
    let reports = candidates
        .into_iter()
        .map(|(file_name, path)| match scanner.scan_file(&path) {
            Ok(entries) => ArchiveReport {
                path,
                file_name,
                entries,
                error: None,
            },
            Err(err) => {
                warn!(archive = %path.display(), error = %err, "failed to scan archive");
                ArchiveReport {
                    path,
                    file_name,
                    entries: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    Ok(reports)
}
