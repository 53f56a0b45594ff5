//! mcmeta-archive - Scan mod archives for manifest identifiers
//!
//! This crate feeds archive entries to [`mcmeta_core`] and collects what it
//! resolves:
//! - [`ArchiveScanner`] walks one `.jar`/`.zip` container
//! - [`scan_directory`] walks every matching archive in a folder
//! - [`ScanConfig`] holds the filters and limits, loadable from TOML
//!
//! Entries that are not manifests, cannot be read, or fail to decode are
//! skipped. Only failing to open the container itself is an error.
//!
//! # Example
//!
//! ```no_run
//! use mcmeta_archive::scan_archive;
//!
//! let ids = scan_archive("mods/taterlib-fabric-0.1.0.jar")?;
//! println!("{ids:?}");
//! # Ok::<(), mcmeta_archive::ArchiveError>(())
//! ```

mod config;
mod directory;
mod error;
mod scanner;

pub use config::ScanConfig;
pub use directory::{ArchiveReport, scan_directory};
pub use error::{ArchiveError, ArchiveResult};
pub use scanner::{ArchiveScanner, ResolvedEntry, identifiers, scan_archive};
