//! Configuration for which sitemap files a run touches.
//!
//! The defaults describe the usual site layout: two urlset documents and one
//! sitemap index, all directly under the site root. A `sitestamp.toml` file in
//! the root (or passed explicitly) can override any of them:
//!
//! ```toml
//! # Relative to the directory containing this file.
//! root = "public"
//! urlsets = ["sitemap-main.xml", "sitemap-locations.xml", "sitemap-blog.xml"]
//! index = "sitemap_index.xml"
//! ```
//!
//! ```rust,no_run
//! use sitestamp_core::UpdaterConfig;
//! use std::path::Path;
//!
//! let config = UpdaterConfig::discover(Path::new("."))?;
//! for path in config.urlset_paths() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), sitestamp_core::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// File name looked up in the site root by [`UpdaterConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "sitestamp.toml";

/// Default urlset documents, processed in this order.
pub const DEFAULT_URLSETS: [&str; 2] = ["sitemap-main.xml", "sitemap-locations.xml"];

/// Default sitemap index document.
pub const DEFAULT_INDEX: &str = "sitemap_index.xml";

/// Resolved settings for one updater run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Directory the sitemap paths are relative to.
    pub root: PathBuf,
    /// Urlset documents, relative to `root`.
    pub urlsets: Vec<PathBuf>,
    /// Sitemap index document, relative to `root`.
    pub index: PathBuf,
}

/// On-disk shape of `sitestamp.toml`; every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    root: Option<PathBuf>,
    urlsets: Option<Vec<PathBuf>>,
    index: Option<PathBuf>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self::for_root(PathBuf::from("."))
    }
}

impl UpdaterConfig {
    /// Default file layout under `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            urlsets: DEFAULT_URLSETS.iter().map(PathBuf::from).collect(),
            index: PathBuf::from(DEFAULT_INDEX),
        }
    }

    /// Load settings from a TOML file.
    ///
    /// A relative `root` is resolved against the directory holding the file;
    /// without a `root` key that directory is the root. Missing keys fall back
    /// to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        let file: ConfigFile = toml::from_str(&contents)?;

        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let root = file.root.map_or_else(|| base.clone(), |r| base.join(r));

        let mut config = Self::for_root(root);
        if let Some(urlsets) = file.urlsets {
            config.urlsets = urlsets;
        }
        if let Some(index) = file.index {
            config.index = index;
        }

        debug!(path = %path.display(), root = %config.root.display(), "Loaded config");
        Ok(config)
    }

    /// Use `root/sitestamp.toml` when present, otherwise the defaults for `root`.
    pub fn discover(root: &Path) -> Result<Self> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::for_root(root))
        }
    }

    /// Check that the root is a directory and no file is listed twice.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(Error::Config(format!(
                "Site root {} is not a directory",
                self.root.display()
            )));
        }
        for (i, path) in self.urlsets.iter().enumerate() {
            if self.urlsets[..i].contains(path) || *path == self.index {
                return Err(Error::Config(format!(
                    "{} is listed more than once",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Absolute-or-root-relative locations of the urlset documents.
    pub fn urlset_paths(&self) -> Vec<PathBuf> {
        self.urlsets.iter().map(|p| self.root.join(p)).collect()
    }

    /// Location of the sitemap index document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index)
    }
}
