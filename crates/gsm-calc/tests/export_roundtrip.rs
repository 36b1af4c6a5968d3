use chrono::{NaiveDate, TimeZone, Utc};
use gsm_calc::{build_report, export_file_name, write_export, ExportDocument, ModelProfile, ParameterSet};
use gsm_core::from_json_slice;

#[test]
fn export_document_has_expected_shape() {
    let report = build_report(ModelProfile::Academic, &ParameterSet::default()).unwrap();
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();
    let document = ExportDocument::new(&report, at);
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["parameters"]["energyScale"], 2500.0);
    assert_eq!(value["parameters"]["extraDimensions"], 9);
    assert_eq!(value["calculations"]["darkMatterDensity"], 0.12);
    assert_eq!(value["confidence"]["width"], 100);
    assert_eq!(value["confidence"]["dm"], 95);
    assert_eq!(value["timestamp"], "2026-10-17T08:30:00.000Z");
    assert_eq!(value["profile"], "academic");
    assert_eq!(value["report_hash"], report.report_hash.as_str());
}

#[test]
fn written_export_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let report = build_report(ModelProfile::Classic, &ParameterSet::default()).unwrap();
    let document = ExportDocument::now(&report);
    let path = dir.path().join("nested").join("export.json");
    write_export(&path, &document).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("\n  \"calculations\""));
    let back: ExportDocument = from_json_slice(&bytes).unwrap();
    assert_eq!(back, document);
}

#[test]
fn export_file_name_uses_iso_date() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    assert_eq!(export_file_name(date), "gsm-calculation-2026-01-05.json");
}
