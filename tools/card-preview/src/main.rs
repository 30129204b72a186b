//! Card preview - renders a static shoe-card listing page.
//!
//! Writes an HTML page built from built-in sample records so the card
//! can be eyeballed in a browser:
//! - `card-preview` - print the page to stdout
//! - `card-preview --out preview.html` - write it to a file
//! - `card-preview --at 2026-08-30T12:00:00Z` - pin the evaluation time

mod output;
mod page;
mod samples;

use std::fs;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

/// Render a shoe-card preview page
#[derive(Parser)]
#[command(name = "card-preview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<String>,

    /// Evaluation time (RFC 3339); defaults to now
    #[arg(long)]
    at: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose);

    let now: DateTime<Utc> = match &cli.at {
        Some(at) => DateTime::parse_from_rfc3339(at)
            .with_context(|| format!("Invalid --at timestamp: {}", at))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    output.debug(&format!("Evaluation time: {}", now.to_rfc3339()));

    let shoes = samples::sample_shoes(now)?;
    output.debug(&format!("Loaded {} sample shoes", shoes.len()));

    let html = page::render_listing_page(&shoes, now);

    match &cli.out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write preview to {}", path))?;
            output.success(&format!("Wrote preview to {}", path));
            output.kv("cards", &shoes.len().to_string());
            output.kv("bytes", &html.len().to_string());
        }
        None => {
            println!("{}", html);
        }
    }

    Ok(())
}
