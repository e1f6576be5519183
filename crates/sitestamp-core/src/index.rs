//! Stamping of `<sitemapindex>` documents.

use regex::NoExpand;
use tracing::{debug, instrument};

use crate::StampDate;
use crate::urlset::{LASTMOD_RE, lastmod_element};

const SITEMAP_INDEX_MARKER: &str = "<sitemapindex";

/// Check if the XML content is a sitemap index.
#[must_use]
pub fn is_sitemap_index(xml: &str) -> bool {
    xml.contains(SITEMAP_INDEX_MARKER)
}

/// Overwrite every `<lastmod>` value in a sitemap index with `date`.
///
/// Text that is not a sitemap index is returned unchanged, as is everything
/// outside the `<lastmod>` elements.
///
/// ```
/// use sitestamp_core::{StampDate, update_index};
///
/// let xml = "<sitemapindex><sitemap><loc>https://x.com/a.xml</loc>\
///            <lastmod>2020-01-01</lastmod></sitemap></sitemapindex>";
/// let date: StampDate = "2024-05-01".parse()?;
///
/// assert!(update_index(xml, date).contains("<lastmod>2024-05-01</lastmod>"));
/// # Ok::<(), sitestamp_core::Error>(())
/// ```
#[instrument(skip_all, fields(xml_len = xml.len(), date = %date))]
pub fn update_index(xml: &str, date: StampDate) -> String {
    if !is_sitemap_index(xml) {
        debug!("Not a sitemap index; leaving document unchanged");
        return xml.to_string();
    }
    LASTMOD_RE
        .replace_all(xml, NoExpand(&lastmod_element(date)))
        .into_owned()
}
