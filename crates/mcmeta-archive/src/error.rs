//! Error types for archive scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or reading archives.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An entry is larger than the configured limit.
    #[error("Entry {path} exceeds {limit} bytes")]
    EntryTooLarge { path: String, limit: u64 },

    /// Scan configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Directory to scan does not exist or is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn ArchiveError___io___displays_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();

        assert!(err.to_string().contains("I/O error"));
        assert!(matches!(err, ArchiveError::Io(_)));
    }

    #[test]
    fn ArchiveError___entry_too_large___displays_path_and_limit() {
        let err = ArchiveError::EntryTooLarge {
            path: "fabric.mod.json".to_string(),
            limit: 1024,
        };

        assert_eq!(err.to_string(), "Entry fabric.mod.json exceeds 1024 bytes");
    }

    #[test]
    fn ArchiveError___not_a_directory___displays_path() {
        let err = ArchiveError::NotADirectory(PathBuf::from("/tmp/mods.jar"));

        assert_eq!(err.to_string(), "Not a directory: /tmp/mods.jar");
    }
}
