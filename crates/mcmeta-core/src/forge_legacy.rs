//! Legacy Forge `mcmod.info` manifests (Minecraft 1.12 and earlier).
//!
//! The document root is an array of mod records. Some mods instead wrap the
//! array in a version-2 object (`{"modListVersion": 2, "modList": [...]}`);
//! both shapes decode to the same ordered list.

use crate::de::{lenient_string, non_empty};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;

/// One mod record from `mcmod.info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeLegacyMod {
    /// The canonical identifier.
    #[serde(rename = "modid")]
    pub mod_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default, rename = "mcversion", deserialize_with = "lenient_string")]
    pub mc_version: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub update_url: String,

    #[serde(default)]
    pub author_list: Vec<String>,

    #[serde(default)]
    pub credits: String,

    #[serde(default)]
    pub logo_file: String,

    #[serde(default)]
    pub screenshots: Vec<String>,

    #[serde(default)]
    pub parent: String,

    #[serde(default)]
    pub use_dependency_information: bool,

    #[serde(default)]
    pub required_mods: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub dependants: Vec<String>,

    #[serde(default)]
    pub license: String,

    /// Older `authors` spelling; used only when `authorList` is empty.
    #[serde(default, rename = "authors")]
    authors_alias: Vec<String>,
}

/// Every mod record in one `mcmod.info`, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeLegacyModList {
    pub mods: Vec<ForgeLegacyMod>,
}

/// Version-2 wrapper object.
#[derive(Deserialize)]
struct ModListWrapper {
    #[serde(rename = "modList")]
    mod_list: Vec<ForgeLegacyMod>,
}

impl ForgeLegacyModList {
    /// Parse an `mcmod.info` document.
    pub fn from_json(content: &str) -> MetadataResult<Self> {
        let mut mods = if content.trim_start().starts_with('{') {
            serde_json::from_str::<ModListWrapper>(content)?.mod_list
        } else {
            serde_json::from_str::<Vec<ForgeLegacyMod>>(content)?
        };

        for m in &mut mods {
            let authors_alias = std::mem::take(&mut m.authors_alias);
            if m.author_list.is_empty() {
                m.author_list = authors_alias;
            }
        }

        let list = Self { mods };
        list.identifier()?;
        Ok(list)
    }

    /// The first declared mod, if any.
    pub fn first(&self) -> Option<&ForgeLegacyMod> {
        self.mods.first()
    }
}

impl Manifest for ForgeLegacyModList {
    const DIALECT: Dialect = Dialect::ForgeLegacy;

    fn decode(bytes: &[u8]) -> MetadataResult<Self> {
        Self::from_json(std::str::from_utf8(bytes)?)
    }

    fn identifier(&self) -> MetadataResult<&str> {
        let first = self.first().ok_or(MetadataError::EmptyRootList {
            dialect: Self::DIALECT,
        })?;
        non_empty(&first.mod_id).ok_or(MetadataError::MissingField {
            dialect: Self::DIALECT,
            field: "modid",
        })
    }

    fn identifiers(&self) -> Vec<&str> {
        self.mods
            .iter()
            .filter_map(|m| non_empty(&m.mod_id))
            .collect()
    }
}
