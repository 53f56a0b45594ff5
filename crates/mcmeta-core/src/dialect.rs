//! Manifest dialects and the archive path table.

use serde::Serialize;
use std::fmt;

/// Serialization format a dialect is layered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFormat {
    Yaml,
    Json,
    Toml,
}

/// Supported manifest dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Bukkit/Spigot/Paper `plugin.yml`.
    Bukkit,
    /// BungeeCord `bungee.yml`.
    BungeeCord,
    /// Fabric/Quilt-compatible `fabric.mod.json`.
    Fabric,
    /// Pre-1.13 Forge `mcmod.info`.
    ForgeLegacy,
    /// Forge `META-INF/mods.toml`.
    Forge,
    /// NeoForge `META-INF/neoforge.mods.toml`.
    NeoForge,
    /// Sponge `META-INF/sponge_plugins.json`.
    Sponge,
    /// Velocity `velocity-plugin.json`.
    Velocity,
}

impl Dialect {
    /// All dialects, in path-table order.
    pub const ALL: [Dialect; 8] = [
        Self::Bukkit,
        Self::BungeeCord,
        Self::Fabric,
        Self::ForgeLegacy,
        Self::Forge,
        Self::NeoForge,
        Self::Sponge,
        Self::Velocity,
    ];

    /// Look up the dialect for an archive entry path.
    ///
    /// Matching is exact and case-sensitive against the path as stored in the
    /// archive; `plugins/plugin.yml` or `Plugin.yml` are not manifests.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "plugin.yml" => Some(Self::Bukkit),
            "bungee.yml" => Some(Self::BungeeCord),
            "fabric.mod.json" => Some(Self::Fabric),
            "mcmod.info" => Some(Self::ForgeLegacy),
            "META-INF/mods.toml" => Some(Self::Forge),
            "META-INF/neoforge.mods.toml" => Some(Self::NeoForge),
            "META-INF/sponge_plugins.json" => Some(Self::Sponge),
            "velocity-plugin.json" => Some(Self::Velocity),
            _ => None,
        }
    }

    /// The archive entry path that triggers this dialect.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Bukkit => "plugin.yml",
            Self::BungeeCord => "bungee.yml",
            Self::Fabric => "fabric.mod.json",
            Self::ForgeLegacy => "mcmod.info",
            Self::Forge => "META-INF/mods.toml",
            Self::NeoForge => "META-INF/neoforge.mods.toml",
            Self::Sponge => "META-INF/sponge_plugins.json",
            Self::Velocity => "velocity-plugin.json",
        }
    }

    #[must_use]
    pub fn base_format(&self) -> BaseFormat {
        match self {
            Self::Bukkit | Self::BungeeCord => BaseFormat::Yaml,
            Self::Fabric | Self::ForgeLegacy | Self::Sponge | Self::Velocity => BaseFormat::Json,
            Self::Forge | Self::NeoForge => BaseFormat::Toml,
        }
    }

    /// Human-readable dialect name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bukkit => "Bukkit",
            Self::BungeeCord => "BungeeCord",
            Self::Fabric => "Fabric",
            Self::ForgeLegacy => "Forge (legacy)",
            Self::Forge => "Forge",
            Self::NeoForge => "NeoForge",
            Self::Sponge => "Sponge",
            Self::Velocity => "Velocity",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "dialect/dialect_tests.rs"]
mod dialect_tests;
