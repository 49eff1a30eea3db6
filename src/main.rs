//! assetsync CLI
//!
//! Usage: assetsync <COMMAND>
//!
//! Commands:
//!   watch     Keep the manifest and generated constants in sync while assets change
//!   generate  Regenerate the Dart constants file
//!   add       Declare an asset in the manifest
//!   remove    Remove an asset declaration
//!   check     Report drift between manifest, disk, and constants
//!   list      List declared assets

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    commands::run(cli)
}
