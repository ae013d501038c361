//! Command line entry point.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arcanum::document::Document;
use arcanum::reconstruct::{constant_term, format_constant};

/// Reconstructs a polynomial's constant term from a JSON share document.
#[derive(Debug, Parser)]
#[command(name = "arcanum", version, about)]
struct Cli {
    /// Path to the JSON share document.
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let doc = Document::from_json(&text)?;
    tracing::debug!(n = doc.n(), k = doc.k(), "parsed share document");

    let constant = constant_term(&doc)?;
    println!("{}", format_constant(&constant));
    Ok(())
}
