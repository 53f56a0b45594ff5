//! Scan configuration

use crate::ArchiveResult;
use serde::Deserialize;
use std::path::Path;

/// Filters and limits for archive scanning.
///
/// Loaded from a TOML file such as:
///
/// ```toml
/// extensions = ["jar", "zip"]
/// name_contains = "fabric"
/// all_entries = true
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as archives in directory
    /// scans. Compared case-insensitively.
    pub extensions: Vec<String>,

    /// Only scan archives whose file name contains this substring.
    pub name_contains: Option<String>,

    /// Report every mod declared by multi-mod manifests instead of the first.
    pub all_entries: bool,

    /// Manifest entries larger than this (uncompressed) are skipped.
    pub max_entry_bytes: u64,

    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

fn default_extensions() -> Vec<String> {
    vec!["jar".to_string()]
}

fn default_max_entry_bytes() -> u64 {
    4 * 1024 * 1024
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            name_contains: None,
            all_entries: false,
            max_entry_bytes: default_max_entry_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; empty input yields defaults.
    pub fn from_toml_str(content: &str) -> ArchiveResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Whether a file name passes the extension and substring filters.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        let extension_ok = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            });

        let name_ok = self
            .name_contains
            .as_deref()
            .is_none_or(|needle| file_name.contains(needle));

        extension_ok && name_ok
    }
}
