//! Path-based dispatch from archive entries to decoders.

use crate::{
    BukkitPlugin, BungeeCordPlugin, Dialect, FabricMod, ForgeLegacyModList, ForgeMod, Manifest,
    MetadataError, MetadataResult, NeoForgeMod, SpongePlugin, VelocityPlugin,
};

/// A decoded manifest of any dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum ModMetadata {
    Bukkit(BukkitPlugin),
    BungeeCord(BungeeCordPlugin),
    Fabric(FabricMod),
    ForgeLegacy(ForgeLegacyModList),
    Forge(ForgeMod),
    NeoForge(NeoForgeMod),
    Sponge(SpongePlugin),
    Velocity(VelocityPlugin),
}

impl ModMetadata {
    /// Decode `bytes` with the decoder for `dialect`.
    pub fn decode(dialect: Dialect, bytes: &[u8]) -> MetadataResult<Self> {
        Ok(match dialect {
            Dialect::Bukkit => Self::Bukkit(BukkitPlugin::decode(bytes)?),
            Dialect::BungeeCord => Self::BungeeCord(BungeeCordPlugin::decode(bytes)?),
            Dialect::Fabric => Self::Fabric(FabricMod::decode(bytes)?),
            Dialect::ForgeLegacy => Self::ForgeLegacy(ForgeLegacyModList::decode(bytes)?),
            Dialect::Forge => Self::Forge(ForgeMod::decode(bytes)?),
            Dialect::NeoForge => Self::NeoForge(NeoForgeMod::decode(bytes)?),
            Dialect::Sponge => Self::Sponge(SpongePlugin::decode(bytes)?),
            Dialect::Velocity => Self::Velocity(VelocityPlugin::decode(bytes)?),
        })
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Bukkit(_) => Dialect::Bukkit,
            Self::BungeeCord(_) => Dialect::BungeeCord,
            Self::Fabric(_) => Dialect::Fabric,
            Self::ForgeLegacy(_) => Dialect::ForgeLegacy,
            Self::Forge(_) => Dialect::Forge,
            Self::NeoForge(_) => Dialect::NeoForge,
            Self::Sponge(_) => Dialect::Sponge,
            Self::Velocity(_) => Dialect::Velocity,
        }
    }

    /// The canonical identifier.
    ///
    /// Multi-entry dialects (Forge legacy, Forge, NeoForge, Sponge) report
    /// their first entry only. Use [`ModMetadata::identifiers`] to see the
    /// rest.
    pub fn identifier(&self) -> MetadataResult<&str> {
        match self {
            Self::Bukkit(m) => m.identifier(),
            Self::BungeeCord(m) => m.identifier(),
            Self::Fabric(m) => m.identifier(),
            Self::ForgeLegacy(m) => m.identifier(),
            Self::Forge(m) => m.identifier(),
            Self::NeoForge(m) => m.identifier(),
            Self::Sponge(m) => m.identifier(),
            Self::Velocity(m) => m.identifier(),
        }
    }

    /// Every identifier in declaration order.
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::Bukkit(m) => m.identifiers(),
            Self::BungeeCord(m) => m.identifiers(),
            Self::Fabric(m) => m.identifiers(),
            Self::ForgeLegacy(m) => m.identifiers(),
            Self::Forge(m) => m.identifiers(),
            Self::NeoForge(m) => m.identifiers(),
            Self::Sponge(m) => m.identifiers(),
            Self::Velocity(m) => m.identifiers(),
        }
    }
}

/// Decode an archive entry into its typed record.
///
/// `path` must be the entry name exactly as stored in the archive. Paths
/// outside the dialect table yield [`MetadataError::UnrecognizedEntry`]
/// without touching `bytes`.
pub fn decode_entry(path: &str, bytes: &[u8]) -> MetadataResult<ModMetadata> {
    let dialect =
        Dialect::from_path(path).ok_or_else(|| MetadataError::UnrecognizedEntry(path.to_string()))?;
    ModMetadata::decode(dialect, bytes)
}

/// Resolve the canonical identifier of an archive entry.
pub fn resolve_identifier(path: &str, bytes: &[u8]) -> MetadataResult<String> {
    let metadata = decode_entry(path, bytes)?;
    metadata.identifier().map(str::to_owned)
}
