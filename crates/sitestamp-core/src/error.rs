//! Error types and handling for sitestamp-core operations.
//!
//! Malformed sitemap content is never an error here: the transforms fall back
//! to returning their input unchanged. Errors come from the filesystem, from
//! configuration files, and from user-supplied stamp dates.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading or writing sitemap files
//! - **Configuration Errors**: invalid or unreadable `sitestamp.toml`
//! - **Date Errors**: a pinned stamp date that is not `YYYY-MM-DD`

use thiserror::Error;

/// The main error type for sitestamp-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading sitemap files and committing rewritten content. A file
    /// that simply does not exist is not reported through this variant; it is
    /// skipped by the updater.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stamp date could not be parsed.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
