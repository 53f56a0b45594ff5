//! Archive scanning.
//!
//! The [`ArchiveScanner`] walks the entries of one container and resolves
//! every manifest it recognizes.

use crate::{ArchiveError, ArchiveResult, ScanConfig};
use mcmeta_core::{Dialect, ModMetadata};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::{debug, trace, warn};
use zip::ZipArchive;

/// A manifest entry that decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// Entry path inside the archive.
    pub path: String,

    pub dialect: Dialect,

    /// Canonical identifiers, first entry only unless all entries were asked for.
    pub identifiers: Vec<String>,
}

/// Scanner for mod archives.
///
/// # Example
///
/// ```no_run
/// use mcmeta_archive::ArchiveScanner;
///
/// let scanner = ArchiveScanner::new().with_all_entries(true);
/// for entry in scanner.scan_file("mods/multimod.jar")? {
///     println!("{} ({}): {:?}", entry.path, entry.dialect, entry.identifiers);
/// }
/// # Ok::<(), mcmeta_archive::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveScanner {
    all_entries: bool,
    max_entry_bytes: u64,
}

impl Default for ArchiveScanner {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

impl ArchiveScanner {
    /// Create a scanner with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            all_entries: config.all_entries,
            max_entry_bytes: config.max_entry_bytes,
        }
    }

    /// Report every mod of multi-mod manifests instead of the first.
    #[must_use]
    pub fn with_all_entries(mut self, all_entries: bool) -> Self {
        self.all_entries = all_entries;
        self
    }

    #[must_use]
    pub fn with_max_entry_bytes(mut self, max_entry_bytes: u64) -> Self {
        self.max_entry_bytes = max_entry_bytes;
        self
    }

    /// Scan an archive file on disk.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> ArchiveResult<Vec<ResolvedEntry>> {
        let path = path.as_ref();
        debug!(archive = %path.display(), "opening archive");
        let file = File::open(path)?;
        self.scan_reader(BufReader::new(file))
    }

    /// Scan an archive from any seekable reader.
    ///
    /// Fails only if the container cannot be opened. Each entry is read and
    /// dropped before the next one is opened, and per-entry failures are
    /// logged and skipped.
    pub fn scan_reader<R: Read + Seek>(&self, reader: R) -> ArchiveResult<Vec<ResolvedEntry>> {
        let mut archive = ZipArchive::new(reader)?;
        let mut resolved = Vec::new();

        for index in 0..archive.len() {
            let Some(name) = archive.name_for_index(index).map(String::from) else {
                continue;
            };

            let Some(dialect) = Dialect::from_path(&name) else {
                trace!(entry = %name, "skipping unrecognized entry");
                continue;
            };

            let bytes = match self.read_entry(&mut archive, index, &name) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(entry = %name, %dialect, error = %err, "failed to read manifest entry");
                    continue;
                }
            };

            match ModMetadata::decode(dialect, &bytes) {
                Ok(metadata) => {
                    let identifiers = self.collect_identifiers(&metadata);
                    debug!(entry = %name, %dialect, ?identifiers, "resolved manifest");
                    resolved.push(ResolvedEntry {
                        path: name,
                        dialect,
                        identifiers,
                    });
                }
                Err(err) => {
                    warn!(entry = %name, %dialect, error = %err, "failed to decode manifest");
                }
            }
        }

        Ok(resolved)
    }

    fn read_entry<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        index: usize,
        name: &str,
    ) -> ArchiveResult<Vec<u8>> {
        let entry = archive.by_index(index)?;
        if entry.size() > self.max_entry_bytes {
            return Err(ArchiveError::EntryTooLarge {
                path: name.to_string(),
                limit: self.max_entry_bytes,
            });
        }

        // The declared size can lie; cap the read as well.
        let mut bytes = Vec::new();
        entry
            .take(self.max_entry_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > self.max_entry_bytes {
            return Err(ArchiveError::EntryTooLarge {
                path: name.to_string(),
                limit: self.max_entry_bytes,
            });
        }

        Ok(bytes)
    }

    fn collect_identifiers(&self, metadata: &ModMetadata) -> Vec<String> {
        if self.all_entries {
            metadata
                .identifiers()
                .into_iter()
                .map(String::from)
                .collect()
        } else {
            metadata
                .identifier()
                .map(|id| vec![id.to_string()])
                .unwrap_or_default()
        }
    }
}

/// Flatten resolved entries into identifiers, in archive order.
pub fn identifiers(entries: &[ResolvedEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.identifiers.iter().cloned())
        .collect()
}

/// Scan one archive with default settings and return its identifiers.
pub fn scan_archive<P: AsRef<Path>>(path: P) -> ArchiveResult<Vec<String>> {
    let entries = ArchiveScanner::new().scan_file(path)?;
    Ok(identifiers(&entries))
}
