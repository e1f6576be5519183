//! Stamping and normalization of `<urlset>` sitemap documents.
//!
//! The document is treated as text, not parsed as XML. Everything outside the
//! `<urlset ...>` wrapper (XML declaration, comments, wrapper attributes and
//! trailing whitespace) is preserved byte for byte; only the body between the
//! wrapper tags is rebuilt.
//!
//! ```
//! use sitestamp_core::{StampDate, update_urlset};
//!
//! let xml = "<urlset>\n  <url>\n    <loc>https://x.com/b</loc>\n  </url>\n  \
//!            <url><loc>https://x.com/a</loc></url>\n</urlset>\n";
//! let date: StampDate = "2024-05-01".parse()?;
//!
//! assert_eq!(
//!     update_urlset(xml, date),
//!     "<urlset>\n  \
//!      <url><loc>https://x.com/a</loc><lastmod>2024-05-01</lastmod></url>\n  \
//!      <url><loc>https://x.com/b</loc><lastmod>2024-05-01</lastmod></url>\n\
//!      </urlset>\n",
//! );
//! # Ok::<(), sitestamp_core::Error>(())
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::{debug, instrument};

use crate::StampDate;

/// `<url>` blocks, which may span lines.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static URL_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<url>.*?</url>").unwrap());

/// The `<loc>` value of a block; must sit on a single line.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static LOC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<loc>(.*?)</loc>").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
pub(crate) static LASTMOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<lastmod>.*?</lastmod>").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static INTER_TAG_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Head up to the first `<urlset ...>` tag, the body, and the last `</urlset>`
/// together with any trailing whitespace.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static URLSET_WRAPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?<urlset[^>]*>)(.*)(</urlset>\s*)$").unwrap());

const CLOSE_LOC: &str = "</loc>";
const ENTRY_INDENT: &str = "\n  ";

/// A single `<url>` block after stamping and whitespace normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Trimmed text of the `<loc>` element; the identity key of the entry.
    pub loc: String,
    /// The full `<url>…</url>` block as it will be written back.
    pub raw: String,
}

impl UrlEntry {
    /// Stamp a raw `<url>` block with `date`.
    ///
    /// Returns `None` when the block has no `<loc>`, since such a block can be
    /// neither deduplicated nor sorted.
    pub fn from_block(block: &str, date: StampDate) -> Option<Self> {
        let loc = LOC_RE.captures(block)?.get(1)?.as_str().trim().to_string();
        let stamp = lastmod_element(date);

        let stamped = if LASTMOD_RE.is_match(block) {
            LASTMOD_RE
                .replace_all(block, NoExpand(&stamp))
                .into_owned()
        } else {
            insert_after_first_loc(block, &stamp)
        };

        Some(Self {
            loc,
            raw: collapse_inter_tag_whitespace(&stamped),
        })
    }
}

/// Render the `<lastmod>` element for `date`.
pub(crate) fn lastmod_element(date: StampDate) -> String {
    format!("<lastmod>{date}</lastmod>")
}

fn insert_after_first_loc(block: &str, element: &str) -> String {
    let Some(pos) = block.find(CLOSE_LOC) else {
        return block.to_string();
    };
    let split = pos + CLOSE_LOC.len();
    let mut out = String::with_capacity(block.len() + element.len());
    out.push_str(&block[..split]);
    out.push_str(element);
    out.push_str(&block[split..]);
    out
}

fn collapse_inter_tag_whitespace(block: &str) -> String {
    INTER_TAG_WS_RE.replace_all(block.trim(), "><").into_owned()
}

/// Extract and stamp every `<url>` block in document order.
///
/// Duplicates are kept; blocks without a `<loc>` are dropped.
pub fn extract_entries(xml: &str, date: StampDate) -> Vec<UrlEntry> {
    URL_BLOCK_RE
        .find_iter(xml)
        .filter_map(|m| UrlEntry::from_block(m.as_str(), date))
        .collect()
}

/// Deduplicate entries by `loc` and sort them case-insensitively.
///
/// The last occurrence of a `loc` supplies the block, while the position of
/// its first occurrence breaks ties between locs that differ only in case.
pub fn dedup_and_sort(entries: Vec<UrlEntry>) -> Vec<UrlEntry> {
    let mut ordered: Vec<UrlEntry> = Vec::with_capacity(entries.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(entries.len());

    for entry in entries {
        match positions.entry(entry.loc.clone()) {
            Entry::Occupied(slot) => ordered[*slot.get()] = entry,
            Entry::Vacant(slot) => {
                slot.insert(ordered.len());
                ordered.push(entry);
            },
        }
    }

    ordered.sort_by_cached_key(|entry| entry.loc.to_lowercase());
    ordered
}

/// Stamp, deduplicate and sort the `<url>` entries of a urlset document.
///
/// Text without any `<url>` block, or without a matching
/// `<urlset ...>`/`</urlset>` pair, is returned unchanged. The output is
/// stable for a fixed `date`: running it twice yields the same text.
#[instrument(skip_all, fields(xml_len = xml.len(), date = %date))]
pub fn update_urlset(xml: &str, date: StampDate) -> String {
    if !URL_BLOCK_RE.is_match(xml) {
        debug!("No <url> blocks found; leaving document unchanged");
        return xml.to_string();
    }

    let extracted = extract_entries(xml, date);
    let found = extracted.len();
    let entries = dedup_and_sort(extracted);
    debug!(entries = entries.len(), duplicates = found - entries.len(), "Collected url entries");

    let Some(caps) = URLSET_WRAPPER_RE.captures(xml) else {
        debug!("No <urlset> wrapper matched; leaving document unchanged");
        return xml.to_string();
    };
    let (Some(head), Some(tail)) = (caps.get(1), caps.get(3)) else {
        return xml.to_string();
    };

    let body_len: usize = entries.iter().map(|e| e.raw.len() + ENTRY_INDENT.len()).sum();
    let mut out = String::with_capacity(head.len() + body_len + tail.len() + ENTRY_INDENT.len());
    out.push_str(head.as_str());
    out.push_str(ENTRY_INDENT);
    let blocks: Vec<&str> = entries.iter().map(|e| e.raw.as_str()).collect();
    out.push_str(&blocks.join(ENTRY_INDENT));
    out.push('\n');
    out.push_str(tail.as_str());
    out
}
