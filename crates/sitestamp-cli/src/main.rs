//! sitestamp CLI - refresh freshness metadata in XML sitemaps
//!
//! Stamps every `<lastmod>` with the run date, deduplicates and sorts `<url>`
//! entries, then prints a single `changed=true|false` line on stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sitestamp_core::{SitemapUpdater, StampDate, UpdaterConfig};
use tracing::debug;

mod cli;
mod utils;

use cli::Cli;
use utils::logging::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = resolve_config(&cli)?;
    config
        .validate()
        .context("Invalid sitestamp configuration")?;

    let date = cli.date.unwrap_or_else(StampDate::today);
    debug!(?config, %date, "Resolved run settings");

    let root = config.root.clone();
    let report = SitemapUpdater::new(config, date)
        .dry_run(cli.dry_run)
        .run()
        .with_context(|| format!("Failed to update sitemaps under {}", root.display()))?;

    for file in report.changed_files() {
        debug!(path = %file.path.display(), outcome = ?file.outcome, "Changed");
    }
    println!("{report}");

    Ok(())
}

/// An explicit `--config` wins over discovery; `--root` overrides the root
/// either way.
fn resolve_config(cli: &Cli) -> Result<UpdaterConfig> {
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));

    match cli.config.as_deref() {
        Some(path) => {
            let mut config = load_config(path)?;
            if let Some(explicit_root) = &cli.root {
                config.root.clone_from(explicit_root);
            }
            Ok(config)
        },
        None => UpdaterConfig::discover(&root)
            .with_context(|| format!("Failed to load configuration from {}", root.display())),
    }
}

fn load_config(path: &Path) -> Result<UpdaterConfig> {
    UpdaterConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))
}
