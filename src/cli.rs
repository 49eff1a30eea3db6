//! CLI Argument Parsing
//!
//! Global flags (--project, --json, --color, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// assetsync - keep pubspec.yaml assets and generated constants in sync
#[derive(Parser, Debug)]
#[command(name = "assetsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to the nearest directory with assetsync.toml
    /// or pubspec.yaml)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    /// Output NDJSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the assets directory and keep manifest and constants in sync
    Watch {
        /// Override the debounce window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Settle strategy: batch (one shared window) or per-path
        #[arg(long)]
        strategy: Option<String>,
    },

    /// Regenerate the Dart constants file
    Generate {
        /// Exit non-zero if the file is stale instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// Declare an asset in the manifest
    Add {
        /// Asset path relative to the project root (directories end with '/')
        path: String,
    },

    /// Remove an asset declaration from the manifest
    Remove {
        /// Asset path exactly as declared
        path: String,
    },

    /// Report undeclared assets, missing files, and a stale constants file
    Check,

    /// List declared assets
    List,
}
