//! Error types for manifest decoding and dispatch

use crate::Dialect;
use thiserror::Error;

/// Result type alias for decode and dispatch operations
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Error type for decode and dispatch operations
///
/// Every variant is a per-entry outcome; none of them should stop a caller
/// from moving on to the next archive entry.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The entry path is not one of the known manifest paths
    #[error("unrecognized entry: {0}")]
    UnrecognizedEntry(String),

    /// Document bytes are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Content is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A YAML or TOML document parses but does not fit the dialect's layout
    #[error("{dialect} manifest has an unexpected layout: {message}")]
    InvalidShape { dialect: Dialect, message: String },

    /// The canonical identifier is absent or empty
    #[error("{dialect} manifest is missing required field `{field}`")]
    MissingField {
        dialect: Dialect,
        field: &'static str,
    },

    /// A list-rooted document declares no entries
    #[error("{dialect} manifest declares no entries")]
    EmptyRootList { dialect: Dialect },
}

/// Coarse classification of [`MetadataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not a manifest; expected for most archive entries
    Unrecognized,
    /// Bytes do not parse under the dialect's base format
    Malformed,
    /// Document parses but the identifier is absent or has the wrong shape
    InvalidField,
    /// List-rooted document with nothing in it
    EmptyRootList,
}

impl MetadataError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetadataError::UnrecognizedEntry(_) => ErrorKind::Unrecognized,
            MetadataError::Encoding(_) | MetadataError::Yaml(_) | MetadataError::Toml(_) => {
                ErrorKind::Malformed
            }
            MetadataError::Json(err) => {
                if err.is_data() {
                    ErrorKind::InvalidField
                } else {
                    ErrorKind::Malformed
                }
            }
            MetadataError::InvalidShape { .. } => ErrorKind::InvalidField,
            MetadataError::MissingField { .. } => ErrorKind::InvalidField,
            MetadataError::EmptyRootList { .. } => ErrorKind::EmptyRootList,
        }
    }

    /// Whether the entry was simply not a manifest.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, MetadataError::UnrecognizedEntry(_))
    }
}
