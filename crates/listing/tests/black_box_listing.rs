use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{TimeZone, Utc};
use storefront_catalog::RecencyWindow;
use storefront_listing::{ListingConfig, load_catalog, load_catalog_file, render_catalog};

const EXPECTED_LISTING: &str = "\
Pegasus 40 | $150.00 -> $120.00 | 2 Colors | Sale
Blazer Mid | $150.00 | 1 Color
Vaporfly 3 | $150.00 | 0 Colors | Just Released!
Air Max 1234 | $1,234.50 -> $0.00 | 12 Colors | Sale
";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

fn listing_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storefront-listing"));
    cmd.env("RUST_LOG", "off")
        .env_remove("STOREFRONT_RECENCY_DAYS")
        .env("STOREFRONT_NOW", "2024-06-15");
    cmd
}

#[test]
fn renders_fixture_catalog() {
    let products = load_catalog_file(&fixture()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

    let text = render_catalog(&products, now, RecencyWindow::default()).unwrap();
    assert_eq!(text, EXPECTED_LISTING);
}

#[test]
fn wider_window_turns_older_release_into_new_release() {
    let products = load_catalog_file(&fixture()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

    let text = render_catalog(&products, now, RecencyWindow::from_days(60).unwrap()).unwrap();
    assert!(text.contains("Blazer Mid | $150.00 | 1 Color | Just Released!"));
}

#[test]
fn catalog_with_malformed_release_date_fails_to_load() {
    let json = r#"[{"slug":"x","name":"X","price":10,"releaseDate":"31/12/2024","numOfColors":1}]"#;
    let err = load_catalog(json.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("unparseable release date"));
}

#[test]
fn negative_color_count_fails_rendering() {
    let json = r#"[{"slug":"x","name":"X","price":10,"releaseDate":"2024-06-01","numOfColors":-1}]"#;
    let products = load_catalog(json.as_bytes()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

    let err = render_catalog(&products, now, RecencyWindow::default()).unwrap_err();
    assert!(format!("{err:#}").contains("must be non-negative"));
}

#[test]
fn missing_catalog_file_is_reported() {
    let err = storefront_listing::run(Path::new("does/not/exist.json"), &ListingConfig::default()).unwrap_err();
    assert!(err.to_string().contains("failed to open catalog"));
}

#[test]
fn binary_prints_listing() {
    let output = listing_command().arg(fixture()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_LISTING);
}

#[test]
fn binary_honours_recency_window_override() {
    let output = listing_command()
        .env("STOREFRONT_RECENCY_DAYS", "60")
        .arg(fixture())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Blazer Mid | $150.00 | 1 Color | Just Released!"));
}

#[test]
fn binary_rejects_invalid_config() {
    let output = listing_command()
        .env("STOREFRONT_RECENCY_DAYS", "-3")
        .arg(fixture())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_requires_catalog_argument() {
    let output = listing_command().output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: storefront-listing"));
}
