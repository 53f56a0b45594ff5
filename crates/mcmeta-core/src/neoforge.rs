//! NeoForge `META-INF/neoforge.mods.toml` manifests.

use crate::de::toml_document;
use crate::forge::{ForgeDependency, ForgeModEntry, all_mod_ids, first_mod_id};
use crate::{Dialect, Manifest, MetadataResult};
use serde::Deserialize;
use std::collections::HashMap;

/// A NeoForge `neoforge.mods.toml` document.
///
/// Same layout as [`crate::ForgeMod`] plus mixin and access transformer lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeoForgeMod {
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

    #[serde(default)]
    pub mods: Vec<ForgeModEntry>,

    /// `[[mixins]]` blocks in declaration order.
    #[serde(default)]
    pub mixins: Vec<NeoForgeMixin>,

    #[serde(default)]
    pub access_transformers: Vec<NeoForgeAccessTransformer>,

    #[serde(default)]
    pub dependencies: HashMap<String, Vec<ForgeDependency>>,
}

/// One `[[mixins]]` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeoForgeMixin {
    pub config: String,
}

/// One `[[accessTransformers]]` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeoForgeAccessTransformer {
    pub file: String,
}

impl NeoForgeMod {
    /// Parse a `neoforge.mods.toml` document.
    pub fn from_toml(content: &str) -> MetadataResult<Self> {
        let neoforge_mod: Self = toml_document(content, Self::DIALECT)?;
        neoforge_mod.identifier()?;
        Ok(neoforge_mod)
    }

    /// The first declared mod block, if any.
    pub fn first(&self) -> Option<&ForgeModEntry> {
        self.mods.first()
    }
}

impl Manifest for NeoForgeMod {
    const DIALECT: Dialect = Dialect::NeoForge;

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

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::MetadataError;

    const TATERLIB_NEOFORGE_MODS_TOML: &str = r#"
modLoader = "javafml"
loaderVersion = "[1,)"
license = "GPL-3.0"
issueTrackerURL = "https://some.issue.tracker"

[[mods]]
modId = "taterlib"
version = "0.1.0"
displayName = "TaterLib"
updateJSONURL = "https://some.update.url"
displayURL = "https://some.home.url"
logoFile = "TaterLib.png.gz"
credits = "p0t4t0sandwich"
authors = "p0t4t0sandwich"
displayTest = "IGNORE_SERVER_VERSION"
description = '''some descriptive words'''

[[mixins]]
config = "taterlib.mixins.v1_20.vanilla.json"
[[mixins]]
config = "taterlib.mixins.v1_20_2.vanilla.patch.json"
[[mixins]]
config = "taterlib.mixins.v1_20_2.vanilla.json"
[[mixins]]
config = "taterlib.mixins.v1_20_6.vanilla.patch.json"
[[mixins]]
config = "taterlib.mixins.v1_20_6.vanilla.json"
[[mixins]]
config = "taterlib.mixins.v1_21.vanilla.json"

# NeoForge Dependency
[[dependencies.taterlib]]
modId = "neoforge"
type = "required"
versionRange = "${neo_version_range}"
ordering = "NONE"
side = "BOTH"

# Minecraft Dependency
[[dependencies.taterlib]]
modId = "minecraft"
type = "required"
versionRange = "${minecraft_version_range}"
ordering = "NONE"
side = "BOTH""#;

    #[test]
    fn NeoForgeMod___decode___reads_loader_and_mod_block() {
        let neoforge_mod = NeoForgeMod::decode(TATERLIB_NEOFORGE_MODS_TOML.as_bytes()).unwrap();

        assert_eq!(neoforge_mod.mod_loader, "javafml");
        assert_eq!(neoforge_mod.loader_version, "[1,)");
        assert_eq!(neoforge_mod.license, "GPL-3.0");
        assert_eq!(neoforge_mod.issue_tracker_url, "https://some.issue.tracker");
        assert_eq!(neoforge_mod.mods.len(), 1);

        let entry = &neoforge_mod.mods[0];
        assert_eq!(entry.mod_id, "taterlib");
        assert_eq!(entry.version, "0.1.0");
        assert_eq!(entry.display_name, "TaterLib");
        assert_eq!(entry.display_url, "https://some.home.url");
        assert_eq!(entry.description, "some descriptive words");
        assert_eq!(neoforge_mod.identifier().unwrap(), "taterlib");
    }

    #[test]
    fn NeoForgeMod___mixins___preserve_declared_order() {
        let neoforge_mod = NeoForgeMod::decode(TATERLIB_NEOFORGE_MODS_TOML.as_bytes()).unwrap();

        let configs: Vec<&str> = neoforge_mod
            .mixins
            .iter()
            .map(|m| m.config.as_str())
            .collect();
        assert_eq!(
            configs,
            vec![
                "taterlib.mixins.v1_20.vanilla.json",
                "taterlib.mixins.v1_20_2.vanilla.patch.json",
                "taterlib.mixins.v1_20_2.vanilla.json",
                "taterlib.mixins.v1_20_6.vanilla.patch.json",
                "taterlib.mixins.v1_20_6.vanilla.json",
                "taterlib.mixins.v1_21.vanilla.json",
            ]
        );
    }

    #[test]
    fn NeoForgeMod___dependency_group___collects_typed_blocks() {
        let neoforge_mod = NeoForgeMod::decode(TATERLIB_NEOFORGE_MODS_TOML.as_bytes()).unwrap();

        let group = &neoforge_mod.dependencies["taterlib"];
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].mod_id, "neoforge");
        assert_eq!(group[0].kind.as_deref(), Some("required"));
        assert_eq!(group[0].mandatory, None);
        assert_eq!(group[0].version_range, "${neo_version_range}");
        assert_eq!(group[0].ordering, "NONE");
        assert_eq!(group[0].side, "BOTH");
        assert_eq!(group[1].mod_id, "minecraft");
        assert!(group.iter().all(ForgeDependency::is_required));
    }

    #[test]
    fn NeoForgeMod___access_transformers___decode() {
        let toml = r#"
[[mods]]
modId = "at"

[[accessTransformers]]
file = "META-INF/accesstransformer.cfg"
"#;

        let neoforge_mod = NeoForgeMod::from_toml(toml).unwrap();

        assert_eq!(
            neoforge_mod.access_transformers[0].file,
            "META-INF/accesstransformer.cfg"
        );
        assert!(neoforge_mod.mixins.is_empty());
    }

    #[test]
    fn NeoForgeMod___no_mod_blocks___fails_with_empty_root_list() {
        let result = NeoForgeMod::from_toml("[[mixins]]\nconfig = \"a.json\"\n");

        assert!(matches!(
            result,
            Err(MetadataError::EmptyRootList {
                dialect: Dialect::NeoForge
            })
        ));
    }

    #[test]
    fn NeoForgeMod___mixin_without_config___returns_invalid_shape() {
        let result = NeoForgeMod::from_toml("[[mods]]\nmodId = \"x\"\n[[mixins]]\n");

        assert!(matches!(
            result,
            Err(MetadataError::InvalidShape {
                dialect: Dialect::NeoForge,
                ..
            })
        ));
    }
}
