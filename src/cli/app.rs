//! Main CLI application structure

use anyhow::Result;
use clap::Parser;
use std::io;

use super::menu;
use super::output::{Output, OutputFormat};
use crate::domain::Catalog;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Interactive catalog manager for small book collections")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
///
/// Builds the session-scoped catalog and hands it to the menu loop
/// together with locked stdin. Nothing outlives the session.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Shelf CLI starting");

    let mut catalog = Catalog::new();
    menu::run_session(&mut catalog, io::stdin().lock(), &output)?;

    output.verbose_ctx(
        "session",
        &format!("Ended with {} book(s) in catalog", catalog.len()),
    );
    Ok(())
}
