//! Forge `META-INF/mods.toml` manifests.
//!
//! A file carries loader metadata, one or more `[[mods]]` blocks, and
//! dependency blocks grouped under a free-form key:
//!
//! ```toml
//! [[dependencies.examplemod]]
//! modId = "forge"
//! mandatory = true
//! versionRange = "[47,)"
//! ```
//!
//! The group key is conventionally a mod id but nothing enforces that, so it
//! is kept as an arbitrary string. NeoForge reuses [`ForgeModEntry`] and
//! [`ForgeDependency`].

use crate::de::{lenient_string, non_empty, toml_document};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;
use std::collections::HashMap;

/// A Forge `mods.toml` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeMod {
    /// Language provider, usually `javafml`.
    #[serde(default)]
    pub mod_loader: String,

    #[serde(default)]
    pub loader_version: String,

    #[serde(default)]
    pub license: String,

    #[serde(default)]
    pub show_as_resource_pack: bool,

    #[serde(default, rename = "issueTrackerURL")]
    pub issue_tracker_url: String,

    /// Declared mods; the first one supplies the identifier.
    #[serde(default)]
    pub mods: Vec<ForgeModEntry>,

    /// Dependency group name to its blocks, in declaration order.
    #[serde(default)]
    pub dependencies: HashMap<String, Vec<ForgeDependency>>,
}

/// One `[[mods]]` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeModEntry {
    pub mod_id: String,

    #[serde(default)]
    pub namespace: Option<String>,

    /// Usually `${file.jarVersion}`, substituted by the loader.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub logo_file: String,

    #[serde(default)]
    pub logo_blur: Option<bool>,

    #[serde(default, rename = "updateJSONURL")]
    pub update_json_url: String,

    #[serde(default, rename = "displayURL")]
    pub display_url: String,

    #[serde(default)]
    pub credits: String,

    #[serde(default)]
    pub authors: String,

    /// `MATCH_VERSION`, `IGNORE_SERVER_VERSION`, `IGNORE_ALL_VERSION` or `NONE`.
    #[serde(default)]
    pub display_test: String,
}

/// One `[[dependencies.<group>]]` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeDependency {
    pub mod_id: String,

    /// Forge's required flag; NeoForge files use `type` instead.
    #[serde(default)]
    pub mandatory: Option<bool>,

    /// `required`, `optional`, `incompatible` or `discouraged`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub version_range: String,

    /// `NONE`, `BEFORE` or `AFTER`.
    #[serde(default)]
    pub ordering: String,

    /// `BOTH`, `CLIENT` or `SERVER`.
    #[serde(default)]
    pub side: String,

    #[serde(default)]
    pub reason: Option<String>,
}

impl ForgeDependency {
    /// Whether the dependency must be present, from whichever key was written.
    ///
    /// Files that declare neither key are treated as mandatory, matching the
    /// loaders' defaults.
    pub fn is_required(&self) -> bool {
        match (&self.kind, self.mandatory) {
            (Some(kind), _) => kind.eq_ignore_ascii_case("required"),
            (None, Some(mandatory)) => mandatory,
            (None, None) => true,
        }
    }
}

/// First-entry identifier for a list of mod blocks.
pub(crate) fn first_mod_id(mods: &[ForgeModEntry], dialect: Dialect) -> MetadataResult<&str> {
    let first = mods
        .first()
        .ok_or(MetadataError::EmptyRootList { dialect })?;
    non_empty(&first.mod_id).ok_or(MetadataError::MissingField {
        dialect,
        field: "modId",
    })
}

pub(crate) fn all_mod_ids(mods: &[ForgeModEntry]) -> Vec<&str> {
    mods.iter().filter_map(|m| non_empty(&m.mod_id)).collect()
}

impl ForgeMod {
    /// Parse a `mods.toml` document.
    pub fn from_toml(content: &str) -> MetadataResult<Self> {
        let forge_mod: Self = toml_document(content, Self::DIALECT)?;
        forge_mod.identifier()?;
        Ok(forge_mod)
    }

    /// The first declared mod block, if any.
    pub fn first(&self) -> Option<&ForgeModEntry> {
        self.mods.first()
    }
}

impl Manifest for ForgeMod {
    const DIALECT: Dialect = Dialect::Forge;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        Self::from_toml(std::str::from_utf8(bytes)?)
    }

    fn identifier(&self) -> MetadataResult<&str> {
        first_mod_id(&self.mods, Self::DIALECT)
    }

    fn identifiers(&self) -> Vec<&str> {
        all_mod_ids(&self.mods)
    }
}
