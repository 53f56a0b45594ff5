//! BungeeCord `bungee.yml` manifests.

use crate::de::{non_empty, null_as_default, verbatim_string, yaml_document};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::Deserialize;

/// A BungeeCord plugin descriptor.
///
/// Same flat layout as [`crate::BukkitPlugin`], without the capability flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BungeeCordPlugin {
    /// Plugin name; the canonical identifier.
    pub name: String,

    #[serde(default, deserialize_with = "verbatim_string")]
    pub version: String,

    #[serde(default)]
    pub main: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub website: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub depends: Vec<String>,

    #[serde(default, rename = "softDepends", deserialize_with = "null_as_default")]
    pub soft_depends: Vec<String>,

    /// `depend` spelling; folded into `depends` after decoding.
    #[serde(default, rename = "depend", deserialize_with = "null_as_default")]
    depend_alias: Vec<String>,

    /// `softdepends` spelling.
    #[serde(default, rename = "softdepends", deserialize_with = "null_as_default")]
    softdepends_alias: Vec<String>,

    /// `softdepend` spelling.
    #[serde(default, rename = "softdepend", deserialize_with = "null_as_default")]
    softdepend_alias: Vec<String>,
}

impl BungeeCordPlugin {
    /// Parse a `bungee.yml` document.
    pub fn from_yaml(content: &str) -> MetadataResult<Self> {
        let mut plugin: Self = yaml_document(content, Self::DIALECT)?;
        plugin.fold_aliases();
        plugin.identifier()?;
        Ok(plugin)
    }

    // Spellings are tried in order; the first non-empty one wins.
    fn fold_aliases(&mut self) {
        let depend_alias = std::mem::take(&mut self.depend_alias);
        if self.depends.is_empty() {
            self.depends = depend_alias;
        }
        for alias in [
            std::mem::take(&mut self.softdepends_alias),
            std::mem::take(&mut self.softdepend_alias),
        ] {
            if self.soft_depends.is_empty() {
                self.soft_depends = alias;
            }
        }
    }
}

impl Manifest for BungeeCordPlugin {
    const DIALECT: Dialect = Dialect::BungeeCord;

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

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn BungeeCordPlugin___decode___reads_all_fields() {
        let yaml = "name: TaterLib
version: 0.1.0
author: p0t4t0sandwich
description: some words
website: https://some.url
main: dev.neuralnexus.taterloader.platforms.BungeeCordLoaderPlugin
depends: [ ]
softdepends: [ LuckPerms ]
";

        let plugin = BungeeCordPlugin::decode(yaml.as_bytes()).unwrap();

        assert_eq!(plugin.name, "TaterLib");
        assert_eq!(plugin.version, "0.1.0");
        assert_eq!(plugin.author, "p0t4t0sandwich");
        assert_eq!(plugin.description, "some words");
        assert_eq!(plugin.website, "https://some.url");
        assert_eq!(
            plugin.main,
            "dev.neuralnexus.taterloader.platforms.BungeeCordLoaderPlugin"
        );
        assert!(plugin.depends.is_empty());
        assert_eq!(plugin.soft_depends, vec!["LuckPerms"]);
        assert_eq!(plugin.identifier().unwrap(), "TaterLib");
    }

    #[test]
    fn BungeeCordPlugin___camel_case_soft_depends___is_accepted() {
        let yaml = "name: Proxy\nversion: 2\nmain: a.B\nsoftDepends: [LuckPerms]\n";

        let plugin = BungeeCordPlugin::from_yaml(yaml).unwrap();

        assert_eq!(plugin.soft_depends, vec!["LuckPerms"]);
        assert_eq!(plugin.version, "2");
    }

    #[test]
    fn BungeeCordPlugin___blank_name___returns_missing_field() {
        let result = BungeeCordPlugin::from_yaml("name: '  '\nmain: a.B\n");

        assert!(matches!(
            result,
            Err(MetadataError::MissingField {
                dialect: Dialect::BungeeCord,
                ..
            })
        ));
    }

    #[test]
    fn BungeeCordPlugin___name_as_list___returns_error() {
        let result = BungeeCordPlugin::from_yaml("name: [a, b]\n");

        assert!(matches!(result, Err(MetadataError::InvalidShape { .. })));
    }

    #[test]
    fn BungeeCordPlugin___unquoted_version___keeps_written_digits() {
        let plugin = BungeeCordPlugin::from_yaml("name: X\nversion: 2.10\n").unwrap();

        assert_eq!(plugin.version, "2.10");
    }

    #[test]
    fn BungeeCordPlugin___both_spellings___canonical_key_wins() {
        let yaml = "\
name: X
depends: [RedisBungee]
depend: [Other]
softDepends: [LuckPerms]
softdepends: [Geyser]
softdepend: [Floodgate]
";

        let plugin = BungeeCordPlugin::from_yaml(yaml).unwrap();

        assert_eq!(plugin.identifier().unwrap(), "X");
        assert_eq!(plugin.depends, vec!["RedisBungee"]);
        assert_eq!(plugin.soft_depends, vec!["LuckPerms"]);
    }

    #[test]
    fn BungeeCordPlugin___alternate_spellings___are_folded() {
        let yaml = "name: X\ndepend: [RedisBungee]\nsoftdepends: [Geyser]\nsoftdepend: [Floodgate]\n";

        let plugin = BungeeCordPlugin::from_yaml(yaml).unwrap();

        assert_eq!(plugin.depends, vec!["RedisBungee"]);
        assert_eq!(plugin.soft_depends, vec!["Geyser"]);
    }
}
