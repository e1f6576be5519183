//! # sitestamp-core
//!
//! Core functionality for sitestamp, a maintenance tool that keeps XML
//! sitemaps fresh: it stamps `<lastmod>` dates, deduplicates and sorts
//! `<url>` entries by `<loc>`, and normalizes inter-tag whitespace.
//!
//! ## Architecture
//!
//! - **Transforms**: [`update_urlset`] and [`update_index`] are pure text
//!   rewrites parameterised by a [`StampDate`]
//! - **Configuration**: [`UpdaterConfig`] names the site root and the files to
//!   touch
//! - **Driver**: [`SitemapUpdater`] reads, transforms and writes back only the
//!   files whose content changed, producing a [`RunReport`]
//! - **Error Handling**: [`Error`] and [`Result`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sitestamp_core::{SitemapUpdater, StampDate, UpdaterConfig};
//! use std::path::Path;
//!
//! let config = UpdaterConfig::discover(Path::new("."))?;
//! let report = SitemapUpdater::new(config, StampDate::today()).run()?;
//! println!("{report}"); // changed=true / changed=false
//! # Ok::<(), sitestamp_core::Error>(())
//! ```

/// Site root and file list configuration
pub mod config;
/// The `YYYY-MM-DD` stamp date
pub mod date;
/// Error types and result aliases
pub mod error;
/// Sitemap index stamping
pub mod index;
/// File-level driver and run reports
pub mod updater;
/// Urlset stamping, deduplication and sorting
pub mod urlset;

pub use config::{CONFIG_FILE_NAME, UpdaterConfig};
pub use date::StampDate;
pub use error::{Error, Result};
pub use index::{is_sitemap_index, update_index};
pub use updater::{DocumentKind, FileOutcome, FileReport, RunReport, SitemapUpdater};
pub use urlset::{UrlEntry, dedup_and_sort, extract_entries, update_urlset};
