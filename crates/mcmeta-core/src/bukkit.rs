//! Bukkit `plugin.yml` manifests.
//!
//! Also covers Spigot, Paper and Folia, which read the same file.

use crate::de::{OneOrMany, non_empty, null_as_default, verbatim_string, yaml_document};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;
use std::collections::HashMap;

/// A Bukkit plugin descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BukkitPlugin {
    /// Plugin name; the canonical identifier.
    pub name: String,

    #[serde(default, deserialize_with = "verbatim_string")]
    pub version: String,

    /// Fully qualified main class.
    #[serde(default)]
    pub main: String,

    #[serde(default)]
    pub author: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub website: String,

    /// Log prefix shown instead of the name.
    #[serde(default)]
    pub prefix: Option<String>,

    /// `STARTUP` or `POSTWORLD`.
    #[serde(default)]
    pub load: Option<String>,

    #[serde(default, deserialize_with = "verbatim_string")]
    pub api_version: String,

    /// Hard dependencies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub depend: Vec<String>,

    /// Soft dependencies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub softdepend: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub loadbefore: Vec<String>,

    /// Maven coordinates downloaded by the server at load time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub libraries: Vec<String>,

    #[serde(default)]
    pub folia_supported: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: HashMap<String, BukkitCommand>,

    /// `depends` spelling; folded into `depend` after decoding.
    #[serde(default, rename = "depends", deserialize_with = "null_as_default")]
    depend_alias: Vec<String>,

    /// `softdepends` spelling; folded into `softdepend` after decoding.
    #[serde(default, rename = "softdepends", deserialize_with = "null_as_default")]
    softdepend_alias: Vec<String>,
}

/// A command declared in `plugin.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BukkitCommand {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub usage: Option<String>,

    #[serde(default)]
    pub permission: Option<String>,

    #[serde(default)]
    pub permission_message: Option<String>,

    #[serde(default)]
    pub aliases: OneOrMany<String>,
}

impl BukkitPlugin {
    /// Parse a `plugin.yml` document.
    pub fn from_yaml(content: &str) -> MetadataResult<Self> {
        let mut plugin: Self = yaml_document(content, Self::DIALECT)?;
        plugin.fold_aliases();
        plugin.identifier()?;
        Ok(plugin)
    }

    // The canonical key wins when both spellings are present.
    fn fold_aliases(&mut self) {
        let depend_alias = std::mem::take(&mut self.depend_alias);
        if self.depend.is_empty() {
            self.depend = depend_alias;
        }
        let softdepend_alias = std::mem::take(&mut self.softdepend_alias);
        if self.softdepend.is_empty() {
            self.softdepend = softdepend_alias;
        }
    }
}

impl Manifest for BukkitPlugin {
    const DIALECT: Dialect = Dialect::Bukkit;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        Self::from_yaml(std::str::from_utf8(bytes)?)
    }

    fn identifier(&self) -> MetadataResult<&str> {
        non_empty(&self.name).ok_or(MetadataError::MissingField {
            dialect: Self::DIALECT,
            field: "name",
        })
    }
}
