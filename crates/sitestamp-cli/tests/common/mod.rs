#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const STAMP: &str = "2024-06-01";

#[allow(dead_code)]
pub const MAIN_SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://x.com/b</loc>
  </url>
  <url>
    <loc>https://x.com/a</loc>
    <lastmod>2020-01-01</lastmod>
  </url>
  <url>
    <loc>https://x.com/a</loc>
    <lastmod>2021-01-01</lastmod>
  </url>
</urlset>
"#;

#[allow(dead_code)]
pub const SITEMAP_INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://x.com/sitemap-main.xml</loc>
    <lastmod>2020-01-01</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://x.com/sitemap-locations.xml</loc>
    <lastmod>2020-01-01</lastmod>
  </sitemap>
</sitemapindex>
"#;

/// Create a `sitestamp` command isolated from the caller's environment.
#[allow(dead_code)]
pub fn sitestamp_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitestamp"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("SITESTAMP_ROOT");
    cmd.env_remove("SITESTAMP_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `sitestamp --root <root> --date 2024-06-01`
#[allow(dead_code)]
pub fn sitestamp_in(root: &Path) -> Command {
    let mut cmd = sitestamp_cmd();
    cmd.arg("--root").arg(root).args(["--date", STAMP]);
    cmd
}
