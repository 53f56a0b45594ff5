//! Fabric `fabric.mod.json` manifests.
//!
//! Several Fabric fields accept more than one JSON shape. The author lists
//! are the trickiest: plain name strings and structured person objects may be
//! mixed freely within a single list, so each element is inspected on its own
//! (see [`FabricAuthor`]).

use crate::de::{OneOrMany, lenient_string, non_empty};
use crate::{Dialect, Manifest, MetadataError, MetadataResult};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::collections::HashMap;

/// A Fabric mod descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricMod {
    #[serde(default)]
    pub schema_version: u32,

    /// Mod id; the canonical identifier.
    pub id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub authors: Vec<FabricAuthor>,

    #[serde(default)]
    pub contributors: Vec<FabricAuthor>,

    /// Contact links (`homepage`, `sources`, `issues`, ...).
    #[serde(default)]
    pub contact: HashMap<String, String>,

    #[serde(default)]
    pub license: OneOrMany<String>,

    #[serde(default)]
    pub icon: Option<FabricIcon>,

    /// `*`, `client` or `server`.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Entrypoint type (`main`, `client`, ...) to the classes that implement it.
    #[serde(default)]
    pub entrypoints: HashMap<String, Vec<FabricEntrypoint>>,

    #[serde(default)]
    pub mixins: Vec<FabricMixin>,

    #[serde(default)]
    pub access_widener: Option<String>,

    #[serde(default)]
    pub depends: HashMap<String, OneOrMany<String>>,

    #[serde(default)]
    pub recommends: HashMap<String, OneOrMany<String>>,

    #[serde(default)]
    pub suggests: HashMap<String, OneOrMany<String>>,

    #[serde(default)]
    pub breaks: HashMap<String, OneOrMany<String>>,

    #[serde(default)]
    pub conflicts: HashMap<String, OneOrMany<String>>,

    /// Free-form data for other mods; not interpreted.
    #[serde(default)]
    pub custom: HashMap<String, serde_json::Value>,

    /// Nested jar-in-jar mods.
    #[serde(default)]
    pub jars: Vec<FabricJar>,
}

fn default_environment() -> String {
    "*".to_string()
}

/// One element of an `authors` or `contributors` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FabricAuthor {
    /// Written as a bare string.
    Name(String),
    /// Written as an object.
    Person(FabricPerson),
}

/// A structured author entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FabricPerson {
    pub name: String,

    #[serde(default)]
    pub contact: HashMap<String, String>,
}

impl FabricAuthor {
    /// The author's name, whichever shape it was written in.
    pub fn name(&self) -> &str {
        match self {
            FabricAuthor::Name(name) => name,
            FabricAuthor::Person(person) => &person.name,
        }
    }

    /// The structured entry, if the element was written as an object.
    pub fn as_person(&self) -> Option<&FabricPerson> {
        match self {
            FabricAuthor::Person(person) => Some(person),
            FabricAuthor::Name(_) => None,
        }
    }

    /// View the element as a person; bare names get an empty contact map.
    pub fn to_person(&self) -> FabricPerson {
        match self {
            FabricAuthor::Name(name) => FabricPerson {
                name: name.clone(),
                contact: HashMap::new(),
            },
            FabricAuthor::Person(person) => person.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for FabricAuthor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decode generically first, then branch on the shape actually written.
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(FabricAuthor::Name(name)),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(FabricAuthor::Person)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "author entry must be a string or an object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Mod icon: one path, or a map from pixel size to path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FabricIcon {
    Path(String),
    Sized(HashMap<String, String>),
}

/// An entrypoint class, optionally routed through a language adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FabricEntrypoint {
    Class(String),
    Adapted {
        #[serde(default = "default_adapter")]
        adapter: String,
        value: String,
    },
}

fn default_adapter() -> String {
    "default".to_string()
}

impl FabricEntrypoint {
    /// The referenced class (or adapter-specific reference).
    pub fn value(&self) -> &str {
        match self {
            FabricEntrypoint::Class(value) => value,
            FabricEntrypoint::Adapted { value, .. } => value,
        }
    }
}

/// A mixin config path, optionally limited to one environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FabricMixin {
    Config(String),
    Scoped {
        config: String,
        #[serde(default)]
        environment: Option<String>,
    },
}

impl FabricMixin {
    pub fn config(&self) -> &str {
        match self {
            FabricMixin::Config(config) => config,
            FabricMixin::Scoped { config, .. } => config,
        }
    }
}

/// A nested jar reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FabricJar {
    pub file: String,
}

impl FabricMod {
    /// Parse a `fabric.mod.json` document.
    pub fn from_json(content: &str) -> MetadataResult<Self> {
        let fabric_mod: Self = serde_json::from_str(content)?;
        fabric_mod.identifier()?;
        Ok(fabric_mod)
    }
}

impl Manifest for FabricMod {
    const DIALECT: Dialect = Dialect::Fabric;

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
