//! Shared deserialization helpers for loosely-typed manifest fields.

use crate::{Dialect, MetadataError, MetadataResult};
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A field that may hold a single value or a list of values.
///
/// Manifest authors write `license = "MIT"` and `license = ["MIT", "CC0"]`
/// interchangeably; both decode without loss.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Borrow the values as a slice, whichever shape was written.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// Turns one scalar into text, whatever type the parser gave it.
struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_owned())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        // Debug keeps the trailing `.0` that Display drops.
        Ok(format!("{value:?}"))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(ScalarText)
    }
}

/// Like [`ScalarText`], but asks for the scalar as written.
struct VerbatimScalarText;

impl<'de> Visitor<'de> for VerbatimScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar")
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_string(ScalarText)
    }
}

/// Deserialize a JSON or TOML scalar into text.
///
/// Numbers and booleans are typed tokens in these formats, so the written
/// digits are gone by the time they reach us: `"version": 3` becomes `"3"`,
/// and an unquoted `1.10` comes back as `"1.1"`. `null` becomes the empty
/// string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText)
}

/// Deserialize a YAML scalar into the text the author wrote.
///
/// `api-version: 1.20` stays `"1.20"` rather than going through a float.
/// Null (`~`, `null`, or no value) becomes the empty string; sequences and
/// mappings are rejected.
pub(crate) fn verbatim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(VerbatimScalarText)
}

/// Deserialize a field whose `null` means "nothing declared".
///
/// YAML manifests routinely carry `depend:` with no value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the value only if it is non-empty after trimming.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse a YAML document into `T`.
///
/// Content that is not YAML at all is a [`MetadataError::Yaml`]; YAML whose
/// structure does not fit `T` is a [`MetadataError::InvalidShape`].
pub(crate) fn yaml_document<T: DeserializeOwned>(
    content: &str,
    dialect: Dialect,
) -> MetadataResult<T> {
    serde_yaml::from_str::<serde_yaml::Value>(content)?;
    serde_yaml::from_str(content).map_err(|err| MetadataError::InvalidShape {
        dialect,
        message: err.to_string(),
    })
}

/// Parse a TOML document into `T`, split the same way as [`yaml_document`].
pub(crate) fn toml_document<T: DeserializeOwned>(
    content: &str,
    dialect: Dialect,
) -> MetadataResult<T> {
    content.parse::<toml::Table>()?;
    toml::from_str(content).map_err(|err| MetadataError::InvalidShape {
        dialect,
        message: err.to_string(),
    })
}
