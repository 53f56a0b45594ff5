//! mcmeta-core - Manifest decoders for Minecraft mod and plugin archives
//!
//! This crate provides:
//! - One typed record per manifest dialect ([`BukkitPlugin`], [`FabricMod`],
//!   [`ForgeMod`], ...), each implementing the [`Manifest`] trait
//! - [`Dialect`], the closed table mapping archive entry paths to dialects
//! - [`resolve_identifier`] and [`decode_entry`] for path-based dispatch
//!
//! Decoding is pure: no I/O, no shared state. Reading archives lives in
//! `mcmeta-archive`.
//!
//! # Example
//!
//! ```
//! use mcmeta_core::resolve_identifier;
//!
//! let yaml = b"name: TaterLib\nversion: 0.1.0\nmain: dev.example.Plugin\n";
//! let id = resolve_identifier("plugin.yml", yaml)?;
//! assert_eq!(id, "TaterLib");
//!
//! let err = resolve_identifier("README.md", b"# hello").unwrap_err();
//! assert!(err.is_unrecognized());
//! # Ok::<(), mcmeta_core::MetadataError>(())
//! ```

mod de;
mod dialect;
mod dispatch;
mod error;

pub mod bukkit;
pub mod bungeecord;
pub mod fabric;
pub mod forge;
pub mod forge_legacy;
pub mod neoforge;
pub mod sponge;
pub mod velocity;

pub use bukkit::BukkitPlugin;
pub use bungeecord::BungeeCordPlugin;
pub use de::OneOrMany;
pub use dialect::{BaseFormat, Dialect};
pub use dispatch::{ModMetadata, decode_entry, resolve_identifier};
pub use error::{ErrorKind, MetadataError, MetadataResult};
pub use fabric::{FabricAuthor, FabricMod, FabricPerson};
pub use forge::{ForgeDependency, ForgeMod, ForgeModEntry};
pub use forge_legacy::{ForgeLegacyMod, ForgeLegacyModList};
pub use neoforge::{NeoForgeMixin, NeoForgeMod};
pub use sponge::{SpongeLoadOrder, SpongePlugin, SpongePluginEntry};
pub use velocity::VelocityPlugin;

/// A decoded manifest of one dialect.
///
/// `decode` only succeeds when `identifier` would succeed, so a decoded record
/// always carries a usable canonical identifier.
pub trait Manifest: Sized {
    /// The dialect this record decodes.
    const DIALECT: Dialect;

    /// Decode raw document bytes.
    fn decode(bytes: &[u8]) -> MetadataResult<Self>;

    /// The canonical identifier. Multi-entry dialects report the first entry.
    fn identifier(&self) -> MetadataResult<&str>;

    /// Every identifier the document declares, in declaration order.
    fn identifiers(&self) -> Vec<&str> {
        self.identifier().into_iter().collect()
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Dialect, Manifest, MetadataError, MetadataResult, ModMetadata, decode_entry,
        resolve_identifier,
    };
}
