//! Velocity `velocity-plugin.json` manifests.

use crate::de::{lenient_string, non_empty};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;

/// A Velocity plugin descriptor, as written by the annotation processor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VelocityPlugin {
    /// Plugin id; the canonical identifier.
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<VelocityDependency>,

    /// Main class.
    #[serde(default)]
    pub main: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VelocityDependency {
    pub id: String,

    #[serde(default)]
    pub optional: bool,
}

impl VelocityPlugin {
    /// Parse a `velocity-plugin.json` document.
    pub fn from_json(content: &str) -> MetadataResult<Self> {
        let plugin: Self = serde_json::from_str(content)?;
        plugin.identifier()?;
        Ok(plugin)
    }
}

impl Manifest for VelocityPlugin {
    const DIALECT: Dialect = Dialect::Velocity;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        Self::from_json(std::str::from_utf8(bytes)?)
    }

    fn identifier(&self) -> MetadataResult<&str> {
        non_empty(&self.id).ok_or(MetadataError::MissingField {
            dialect: Self::DIALECT,
            field: "id",
        })
    }
}
