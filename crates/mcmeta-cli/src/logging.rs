//! Logging setup for the CLI
//!
//! Logs go to stderr so that identifier output on stdout stays pipeable.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Build the filter: `RUST_LOG` wins, otherwise `level`.
///
/// `level` is a bare level name (`debug`) unless it contains `=` or `,`, in
/// which case it is read as full filter directives.
pub fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|value| !value.trim().is_empty()) {
        return EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG value: {directives}"));
    }

    if level.contains(['=', ',']) {
        return EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log directives: {level}"));
    }

    let level = level
        .trim()
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level: {level}"))?;
    Ok(EnvFilter::default().add_directive(level.into()))
}

/// Install the global fmt subscriber writing to stderr.
pub fn init(level: &str) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
