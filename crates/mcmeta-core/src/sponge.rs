//! Sponge `META-INF/sponge_plugins.json` manifests (API 8 and later).

use crate::de::{lenient_string, non_empty};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;

/// A Sponge plugin metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpongePlugin {
    #[serde(default)]
    pub loader: SpongeLoader,

    #[serde(default)]
    pub license: String,

    /// Shared defaults, kept as written and not merged into the entries.
    /// [`SpongePluginEntry::effective_version`] applies the version fallback.
    #[serde(default)]
    pub global: Option<SpongeGlobal>,

    /// Declared plugins; the first one supplies the identifier.
    #[serde(default)]
    pub plugins: Vec<SpongePluginEntry>,
}

/// Which plugin loader reads the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpongeLoader {
    /// Usually `java_plain`.
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
}

/// Shared defaults for all plugins in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpongeGlobal {
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default)]
    pub links: SpongeLinks,

    #[serde(default)]
    pub contributors: Vec<SpongeContributor>,

    #[serde(default)]
    pub dependencies: Vec<SpongeDependency>,
}

/// One entry of the `plugins` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpongePluginEntry {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    /// Main class.
    #[serde(default)]
    pub entrypoint: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub branding: SpongeBranding,

    #[serde(default)]
    pub links: SpongeLinks,

    #[serde(default)]
    pub contributors: Vec<SpongeContributor>,

    #[serde(default)]
    pub dependencies: Vec<SpongeDependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpongeBranding {
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpongeLinks {
    #[serde(default)]
    pub homepage: String,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub issues: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpongeContributor {
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// A dependency on another plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpongeDependency {
    pub id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default, rename = "load-order")]
    pub load_order: SpongeLoadOrder,

    #[serde(default)]
    pub optional: bool,
}

/// Whether the dependency must load first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpongeLoadOrder {
    #[default]
    Undefined,
    After,
}

impl SpongePluginEntry {
    /// The entry's version, or the file-wide `global.version` when the entry
    /// leaves it blank.
    pub fn effective_version<'a>(&'a self, plugin: &'a SpongePlugin) -> &'a str {
        non_empty(&self.version)
            .or_else(|| {
                plugin
                    .global
                    .as_ref()
                    .and_then(|global| non_empty(&global.version))
            })
            .unwrap_or_default()
    }
}

impl SpongePlugin {
    /// Parse a `sponge_plugins.json` document.
    pub fn from_json(content: &str) -> MetadataResult<Self> {
        let plugin: Self = serde_json::from_str(content)?;
        plugin.identifier()?;
        Ok(plugin)
    }

    /// The first declared plugin, if any.
    pub fn first(&self) -> Option<&SpongePluginEntry> {
        self.plugins.first()
    }
}

impl Manifest for SpongePlugin {
    const DIALECT: Dialect = Dialect::Sponge;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        Self::from_json(std::str::from_utf8(bytes)?)
    }

    fn identifier(&self) -> MetadataResult<&str> {
        let first = self.first().ok_or(MetadataError::EmptyRootList {
            dialect: Self::DIALECT,
        })?;
        non_empty(&first.id).ok_or(MetadataError::MissingField {
            dialect: Self::DIALECT,
            field: "id",
        })
    }

    fn identifiers(&self) -> Vec<&str> {
        self.plugins.iter().filter_map(|p| non_empty(&p.id)).collect()
    }
}

#[cfg(test)]
#[path = "sponge/sponge_tests.rs"]
mod sponge_tests;
