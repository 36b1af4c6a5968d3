mod common;

use chrono::{TimeZone, Utc};
use gsm_core::GsmError;
use gsm_site::{ReleaseKind, VersionCatalog};

use common::fixture_catalog;

#[test]
fn catalog_splits_timelines() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), 3);
    let majors: Vec<&str> = catalog.majors().iter().map(|r| r.version.as_str()).collect();
    assert_eq!(majors, ["1.0.0", "2.0.0"]);
    assert_eq!(catalog.minors().len(), 1);
    assert_eq!(catalog.total_downloads(), 460);
    assert_eq!(catalog.find("1.1.0").unwrap().status.as_deref(), Some("stable"));
}

#[test]
fn compare_reports_growth() {
    let catalog = fixture_catalog();
    let cmp = catalog.compare("1.0.0", "1.1.0").unwrap();
    assert_eq!(cmp.added_changes, 1);
    assert_eq!(cmp.added_files, 2);
    assert_eq!(cmp.download_growth_pct, Some(30));
    assert_eq!(
        cmp.differences,
        [
            "Added 1 theory improvements",
            "Added 2 document files",
            "Downloads grew by 30%"
        ]
    );
}

#[test]
fn compare_skips_missing_file_lists_and_declines() {
    let catalog = fixture_catalog();
    let cmp = catalog.compare("1.1.0", "2.0.0").unwrap();
    assert_eq!(cmp.added_files, -3);
    assert_eq!(cmp.download_growth_pct, Some(-100));
    assert_eq!(cmp.differences, ["Added 1 theory improvements"]);

    let back = catalog.compare("2.0.0", "1.0.0").unwrap();
    assert_eq!(back.download_growth_pct, None);
}

#[test]
fn unknown_version_is_rejected() {
    let catalog = fixture_catalog();
    match catalog.compare("1.0.0", "9.9.9").unwrap_err() {
        GsmError::Catalog(info) => {
            assert_eq!(info.code, "unknown_version");
            assert_eq!(info.context.get("version").map(String::as_str), Some("9.9.9"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn downloads_are_counted() {
    let mut catalog = fixture_catalog();
    assert_eq!(catalog.record_download("2.0.0").unwrap(), 1);
    assert_eq!(catalog.record_download("2.0.0").unwrap(), 2);
    assert!(catalog.record_download("0.1.0").is_err());
}

#[test]
fn bare_array_catalog_parses_with_defaults() {
    let catalog = VersionCatalog::from_json_slice(
        br#"[{"version":"0.9.0","title":"Draft","date":"2023-11-01"}]"#,
    )
    .unwrap();
    let record = &catalog.versions()[0];
    assert_eq!(record.kind, ReleaseKind::Minor);
    assert!(record.changes.is_empty());
    assert_eq!(record.file_count(), 0);
}

#[test]
fn history_export_is_camel_case() {
    let catalog = fixture_catalog();
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    let export = catalog.history_export("2.0.0", at).unwrap();
    let value = serde_json::to_value(&export).unwrap();
    assert_eq!(value["currentVersion"], "2.0.0");
    assert_eq!(value["totalVersions"], 3);
    assert_eq!(value["exportDate"], "2026-10-17T12:00:00.000Z");
    assert_eq!(value["versions"][0]["type"], "major");
    assert!(catalog.history_export("3.0.0", at).is_err());
}
