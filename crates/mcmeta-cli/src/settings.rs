//! Scan configuration loading and command-line overrides

use anyhow::{Context, Result};
use mcmeta_archive::ScanConfig;
use std::path::Path;

/// Load the scan configuration, or defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => ScanConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(ScanConfig::default()),
    }
}

/// Apply command-line flags on top of file values.
///
/// Flags only ever widen or replace: `--all` cannot switch `all_entries` off,
/// and an empty extension list keeps the configured one.
pub fn apply_overrides(
    config: &mut ScanConfig,
    all: bool,
    contains: Option<String>,
    extensions: Vec<String>,
) {
    if all {
        config.all_entries = true;
    }
    if contains.is_some() {
        config.name_contains = contains;
    }
    if !extensions.is_empty() {
        config.extensions = extensions;
    }
}
