//! Read-transform-write driver over the configured sitemap files.
//!
//! Files are handled strictly in order: every urlset document first, then the
//! sitemap index. A missing file is skipped, an unchanged file is never
//! rewritten, and the first I/O error aborts the run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{Result, StampDate, UpdaterConfig, update_index, update_urlset};

/// Which transform a file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A `<urlset>` document.
    Urlset,
    /// A `<sitemapindex>` document.
    Index,
}

impl DocumentKind {
    fn transform(self, xml: &str, date: StampDate) -> String {
        match self {
            Self::Urlset => update_urlset(xml, date),
            Self::Index => update_index(xml, date),
        }
    }
}

/// What happened to a single file during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file does not exist and was skipped.
    Missing,
    /// The transform produced identical content; nothing was written.
    Unchanged,
    /// New content was written.
    Updated,
    /// New content differs but was not written (dry run).
    WouldUpdate,
}

impl FileOutcome {
    /// Whether this outcome counts towards `changed=true`.
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Updated | Self::WouldUpdate)
    }
}

/// Outcome for one configured file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Location of the file.
    pub path: PathBuf,
    /// Transform applied to the file.
    pub kind: DocumentKind,
    /// What happened.
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a run, in processing order.
///
/// Displays as the status line `changed=true` or `changed=false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per configured file.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// True if any file was (or in a dry run, would have been) rewritten.
    pub fn changed(&self) -> bool {
        self.files.iter().any(|f| f.outcome.is_change())
    }

    /// Reports for files whose content changed.
    pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome.is_change())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "changed={}", self.changed())
    }
}

/// Applies the urlset and index transforms to the files named by an
/// [`UpdaterConfig`].
///
/// ```rust,no_run
/// use sitestamp_core::{SitemapUpdater, StampDate, UpdaterConfig};
///
/// let updater = SitemapUpdater::new(UpdaterConfig::default(), StampDate::today());
/// let report = updater.run()?;
/// println!("{report}");
/// # Ok::<(), sitestamp_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SitemapUpdater {
    config: UpdaterConfig,
    date: StampDate,
    dry_run: bool,
}

impl SitemapUpdater {
    /// Create an updater stamping every file with `date`.
    pub const fn new(config: UpdaterConfig, date: StampDate) -> Self {
        Self {
            config,
            date,
            dry_run: false,
        }
    }

    /// Compute changes without writing any file.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every urlset document, then the sitemap index.
    #[instrument(skip_all, fields(root = %self.config.root.display(), date = %self.date, dry_run = self.dry_run))]
    pub fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::default();

        for path in self.config.urlset_paths() {
            let outcome = self.process(&path, DocumentKind::Urlset)?;
            report.files.push(FileReport {
                path,
                kind: DocumentKind::Urlset,
                outcome,
            });
        }

        let index = self.config.index_path();
        let outcome = self.process(&index, DocumentKind::Index)?;
        report.files.push(FileReport {
            path: index,
            kind: DocumentKind::Index,
            outcome,
        });

        debug!(changed = report.changed(), "Run complete");
        Ok(report)
    }

    fn process(&self, path: &Path, kind: DocumentKind) -> Result<FileOutcome> {
        if !path.exists() {
            debug!(path = %path.display(), "Skipping missing file");
            return Ok(FileOutcome::Missing);
        }

        let old = normalize_newlines(fs::read_to_string(path)?);
        let new = kind.transform(&old, self.date);
        if new == old {
            debug!(path = %path.display(), "Already up to date");
            return Ok(FileOutcome::Unchanged);
        }

        if self.dry_run {
            info!(path = %path.display(), "Would update sitemap");
            return Ok(FileOutcome::WouldUpdate);
        }

        // In place: a symlinked sitemap keeps its link and the target keeps its mode
        fs::write(path, &new)?;
        info!(path = %path.display(), "Updated sitemap");
        Ok(FileOutcome::Updated)
    }
}

/// Fold `\r\n` and lone `\r` into `\n`, as text-mode reads do.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
