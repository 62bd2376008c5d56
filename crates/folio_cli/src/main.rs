//! `folio` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, resolve site configuration once, and dispatch commands.
//! - Keep all filtering semantics inside `folio_core`.

mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli)
}
