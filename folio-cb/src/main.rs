//! folio-cb (Content Builder) - CSV-to-document build tool
//!
//! Reads the portfolio source tables (projects, focus areas, resume)
//! from the content directory and writes the normalized JSON documents
//! consumed by the presentation layer. Single-threaded batch run: read
//! everything, build everything, write everything, exit.

use anyhow::Result;
use clap::Parser;
use folio_common::config::PathResolver;
use tracing::{info, warn};

/// Rebuild the portfolio documents from the CSV source tables
#[derive(Parser, Debug)]
#[command(name = "folio-cb", version)]
struct Cli {
    /// Directory containing the CSV source tables
    #[arg(long)]
    content_dir: Option<String>,

    /// Directory the JSON documents are written to
    #[arg(long)]
    output_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let resolver = PathResolver::new("folio-cb");
    let toml_config = resolver.load_toml_config();

    // Initialize tracing subscriber before anything else logs. The
    // configured level is the default directive; RUST_LOG still wins.
    let default_level: tracing::Level = toml_config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    info!("Starting Folio Content Builder (folio-cb) v{}", env!("CARGO_PKG_VERSION"));

    let paths = resolver.resolve_from(&toml_config, cli.content_dir.as_deref(), cli.output_dir.as_deref());
    info!("Content directory: {}", paths.content_dir.display());
    info!("Output directory: {}", paths.output_dir.display());

    let report = folio_cb::run_build(&paths.content_dir, &paths.output_dir)?;

    if report.skipped_rows() > 0 {
        warn!(
            "{} malformed row(s) were skipped; see diagnostics above",
            report.skipped_rows()
        );
    }
    if report.warnings() > 0 {
        warn!("{} table-level warning(s) during build", report.warnings());
    }

    Ok(())
}
