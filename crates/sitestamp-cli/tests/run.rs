#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{MAIN_SITEMAP, SITEMAP_INDEX, sitestamp_cmd, sitestamp_in};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_files_report_no_change() -> anyhow::Result<()> {
    let site = tempdir()?;

    sitestamp_in(site.path())
        .assert()
        .success()
        .stdout("changed=false\n");

    assert_eq!(fs::read_dir(site.path())?.count(), 0);
    Ok(())
}

#[test]
fn stamps_sorts_and_dedups_then_settles() -> anyhow::Result<()> {
    let site = tempdir()?;
    let main = site.path().join("sitemap-main.xml");
    let index = site.path().join("sitemap_index.xml");
    fs::write(&main, MAIN_SITEMAP)?;
    fs::write(&index, SITEMAP_INDEX)?;

    sitestamp_in(site.path())
        .assert()
        .success()
        .stdout("changed=true\n");

    let expected_main = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://x.com/a</loc><lastmod>2024-06-01</lastmod></url>
  <url><loc>https://x.com/b</loc><lastmod>2024-06-01</lastmod></url>
</urlset>
"#;
    assert_eq!(fs::read_to_string(&main)?, expected_main);
    assert_eq!(
        fs::read_to_string(&index)?,
        SITEMAP_INDEX.replace("2020-01-01", "2024-06-01")
    );

    sitestamp_in(site.path())
        .assert()
        .success()
        .stdout("changed=false\n");
    assert_eq!(fs::read_to_string(&main)?, expected_main);
    Ok(())
}

#[test]
fn dry_run_reports_without_writing() -> anyhow::Result<()> {
    let site = tempdir()?;
    let locations = site.path().join("sitemap-locations.xml");
    fs::write(&locations, MAIN_SITEMAP)?;

    sitestamp_in(site.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("changed=true\n");

    assert_eq!(fs::read_to_string(&locations)?, MAIN_SITEMAP);
    Ok(())
}

#[test]
fn defaults_to_current_directory() -> anyhow::Result<()> {
    let site = tempdir()?;
    fs::write(site.path().join("sitemap_index.xml"), SITEMAP_INDEX)?;

    sitestamp_cmd()
        .current_dir(site.path())
        .args(["--date", "2030-01-02"])
        .assert()
        .success()
        .stdout("changed=true\n");

    let index = fs::read_to_string(site.path().join("sitemap_index.xml"))?;
    assert_eq!(index.matches("<lastmod>2030-01-02</lastmod>").count(), 2);
    Ok(())
}

#[test]
fn discovers_config_in_root() -> anyhow::Result<()> {
    let site = tempdir()?;
    fs::write(
        site.path().join("sitestamp.toml"),
        "urlsets = [\"blog.xml\"]\nindex = \"index.xml\"\n",
    )?;
    fs::write(site.path().join("blog.xml"), MAIN_SITEMAP)?;
    fs::write(site.path().join("sitemap-main.xml"), MAIN_SITEMAP)?;

    sitestamp_in(site.path())
        .assert()
        .success()
        .stdout("changed=true\n");

    assert_ne!(fs::read_to_string(site.path().join("blog.xml"))?, MAIN_SITEMAP);
    assert_eq!(
        fs::read_to_string(site.path().join("sitemap-main.xml"))?,
        MAIN_SITEMAP
    );
    Ok(())
}

#[test]
fn explicit_config_with_root_override() -> anyhow::Result<()> {
    let config_dir = tempdir()?;
    let site = tempdir()?;
    let config = config_dir.path().join("stamp.toml");
    fs::write(&config, "urlsets = [\"pages.xml\"]\n")?;
    fs::write(site.path().join("pages.xml"), MAIN_SITEMAP)?;

    sitestamp_in(site.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("changed=true\n");

    let pages = fs::read_to_string(site.path().join("pages.xml"))?;
    assert!(pages.contains("<lastmod>2024-06-01</lastmod>"));
    Ok(())
}

#[test]
fn verbose_logs_stay_off_stdout() -> anyhow::Result<()> {
    let site = tempdir()?;
    fs::write(site.path().join("sitemap-main.xml"), MAIN_SITEMAP)?;

    sitestamp_in(site.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout("changed=true\n")
        .stderr(predicate::str::contains("Updated sitemap"));
    Ok(())
}

#[test]
fn rejects_malformed_date() {
    sitestamp_cmd()
        .args(["--date", "01/06/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn missing_root_is_an_error() -> anyhow::Result<()> {
    let site = tempdir()?;

    sitestamp_in(&site.path().join("absent"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a directory"));
    Ok(())
}

#[test]
fn unreadable_sitemap_aborts() -> anyhow::Result<()> {
    let site = tempdir()?;
    fs::create_dir(site.path().join("sitemap-main.xml"))?;

    sitestamp_in(site.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to update sitemaps"));
    Ok(())
}
