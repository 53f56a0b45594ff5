//! mcmeta CLI - Read Minecraft mod and plugin manifests
//!
//! Commands:
//! - `mcmeta scan` - List the mod identifiers declared by one archive
//! - `mcmeta scan-dir` - Scan every matching archive in a folder
//! - `mcmeta check` - Decode a loose manifest file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod logging;
mod scan;
mod settings;

#[derive(Parser)]
#[command(name = "mcmeta")]
#[command(author, version, about = "Read identifiers from Minecraft mod manifests", long_about = None)]
struct Cli {
    /// Path to a mcmeta.toml scan configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the identifiers declared by one archive
    Scan {
        /// Path to a .jar or .zip archive
        file: PathBuf,

        /// Report every mod of multi-mod manifests
        #[arg(short, long)]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Scan every matching archive in a directory
    ScanDir {
        /// Directory containing archives (not searched recursively)
        dir: PathBuf,

        /// Only scan archives whose file name contains this text
        #[arg(long)]
        contains: Option<String>,

        /// Archive extension to include (repeatable, default: jar)
        #[arg(short, long = "ext")]
        extensions: Vec<String>,

        /// Report every mod of multi-mod manifests
        #[arg(short, long)]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a loose manifest file
    Check {
        /// Manifest file to decode
        file: PathBuf,

        /// Entry path to treat the file as (e.g. META-INF/mods.toml)
        #[arg(short, long)]
        path: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    logging::init(&config.log_level)?;

    match cli.command {
        Commands::Scan { file, all, json } => {
            settings::apply_overrides(&mut config, all, None, Vec::new());
            scan::run(&file, &config, json)?;
        }
        Commands::ScanDir {
            dir,
            contains,
            extensions,
            all,
            json,
        } => {
            settings::apply_overrides(&mut config, all, contains, extensions);
            scan::run_dir(&dir, &config, json)?;
        }
        Commands::Check { file, path } => {
            check::run(&file, path.as_deref())?;
        }
    }

    Ok(())
}
