//! `check` command: decode a manifest file outside of any archive

use anyhow::{Context, Result, bail};
use mcmeta_core::{Dialect, ModMetadata, decode_entry};
use std::path::{Component, Path};

/// Work out which entry path a loose file stands for.
///
/// An explicit `--path` must be a known manifest path. Otherwise the last one
/// or two components of the file path are tried, so both `fabric.mod.json` and
/// `.../META-INF/mods.toml` are recognized.
pub fn entry_path_for(file: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(path) = explicit {
        if Dialect::from_path(path).is_none() {
            bail!("Unknown manifest path: {path}");
        }
        return Ok(path.to_string());
    }

    let components: Vec<&str> = file
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect();

    let candidates = [
        components.last().map(|name| name.to_string()),
        match components.as_slice() {
            [.., parent, name] => Some(format!("{parent}/{name}")),
            _ => None,
        },
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| Dialect::from_path(candidate).is_some())
        .with_context(|| {
            format!(
                "Cannot tell the manifest dialect of {}; pass --path",
                file.display()
            )
        })
}

/// Decode the file and return the typed record.
pub fn decode_file(file: &Path, explicit: Option<&str>) -> Result<ModMetadata> {
    let entry_path = entry_path_for(file, explicit)?;
    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read manifest: {}", file.display()))?;

    decode_entry(&entry_path, &bytes)
        .with_context(|| format!("Failed to decode {} as {entry_path}", file.display()))
}

/// Check command implementation
pub fn run(file: &Path, explicit: Option<&str>) -> Result<()> {
    println!("Checking manifest: {}", file.display());

    let metadata = decode_file(file, explicit)?;

    println!("✓ Dialect: {}", metadata.dialect());
    for id in metadata.identifiers() {
        println!("✓ Identifier: {id}");
    }
    println!("\nManifest is valid!");

    Ok(())
}
