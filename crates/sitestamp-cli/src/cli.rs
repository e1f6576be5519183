//! Command-line arguments for `sitestamp`.
//!
//! Every flag is optional; a bare `sitestamp` run in the site root stamps the
//! default sitemap files with today's date.
//!
//! ```bash
//! # Default run from the site root
//! sitestamp
//!
//! # Pin the stamp date and preview without writing
//! sitestamp --root public --date 2024-06-01 --dry-run
//! ```

use std::path::PathBuf;

use clap::Parser;
use sitestamp_core::StampDate;

/// Main CLI structure for the `sitestamp` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sitestamp")]
#[command(version)]
#[command(
    about = "sitestamp - refresh <lastmod> dates and tidy <url> entries in XML sitemaps",
    long_about = None
)]
pub struct Cli {
    /// Site root containing the sitemap files (default: current directory). Also via `SITESTAMP_ROOT`.
    #[arg(long, value_name = "DIR", env = "SITESTAMP_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to a sitestamp.toml file (overrides discovery in the root). Also via `SITESTAMP_CONFIG`.
    #[arg(long, value_name = "FILE", env = "SITESTAMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stamp this date instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<StampDate>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress everything on stderr except errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}
