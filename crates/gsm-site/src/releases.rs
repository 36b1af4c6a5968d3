use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use gsm_core::errors::{ErrorInfo, GsmError};
use gsm_core::serde::from_json_slice as parse_json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Label written into exported version histories.
pub const HISTORY_SYSTEM: &str = "Geometric string theory academic version system";

/// Release category, written as `type` in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseKind {
    /// Shown on the upper timeline.
    Major,
    /// Shown on the revision timeline.
    #[default]
    Minor,
    /// Fix release.
    Patch,
}

/// One release of the theory documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Version label, e.g. `1.1.0`.
    pub version: String,
    /// Release title.
    pub title: String,
    /// Release date as written in the catalog.
    pub date: String,
    /// Summary paragraph.
    #[serde(default)]
    pub description: String,
    /// Release category.
    #[serde(rename = "type", default)]
    pub kind: ReleaseKind,
    /// Listed theory changes.
    #[serde(default)]
    pub changes: Vec<String>,
    /// Document files shipped with the release, when listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Download count.
    #[serde(default)]
    pub downloads: u64,
    /// Peer review count.
    #[serde(default)]
    pub reviews: u64,
    /// Publication status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Editorial notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VersionRecord {
    /// Number of listed files; zero when the record lists none.
    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { versions: Vec<VersionRecord> },
    Bare(Vec<VersionRecord>),
}

/// Differences between two releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    /// Older version.
    pub from: String,
    /// Newer version.
    pub to: String,
    /// Change entries gained (negative when fewer are listed).
    pub added_changes: i64,
    /// Files gained; unlisted files count as zero.
    pub added_files: i64,
    /// Rounded download growth in percent; absent when the baseline has no downloads.
    pub download_growth_pct: Option<i64>,
    /// Human readable improvements, only for quantities that grew.
    pub differences: Vec<String>,
}

/// Downloadable snapshot of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistoryExport {
    /// Producer label.
    pub system: String,
    /// Released version at export time.
    pub current_version: String,
    /// Number of catalog entries.
    pub total_versions: usize,
    /// Every catalog entry.
    pub versions: Vec<VersionRecord>,
    /// RFC 3339 export timestamp.
    pub export_date: String,
}

/// Release history loaded from `versions.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VersionCatalog {
    versions: Vec<VersionRecord>,
}

fn unknown_version(version: &str) -> GsmError {
    GsmError::Catalog(
        ErrorInfo::new("unknown_version", "version not found in catalog")
            .with_context("version", version),
    )
}

impl VersionCatalog {
    /// Wraps an in-memory record list.
    pub fn new(versions: Vec<VersionRecord>) -> Self {
        Self { versions }
    }

    /// Parses either a bare array of records or `{"versions": [...]}`.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, GsmError> {
        let versions = match parse_json::<CatalogFile>(data)? {
            CatalogFile::Wrapped { versions } | CatalogFile::Bare(versions) => versions,
        };
        info!(count = versions.len(), "loaded versions");
        Ok(Self { versions })
    }

    /// Reads and parses a versions file.
    pub fn load(path: &Path) -> Result<Self, GsmError> {
        let bytes = fs::read(path).map_err(|err| GsmError::io("catalog_read", path, err))?;
        Self::from_json_slice(&bytes)
    }

    /// Records in file order.
    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Record for `version`, if present.
    pub fn find(&self, version: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|record| record.version == version)
    }

    fn require(&self, version: &str) -> Result<&VersionRecord, GsmError> {
        self.find(version).ok_or_else(|| unknown_version(version))
    }

    /// Records of one category, in file order.
    pub fn of_kind(&self, kind: ReleaseKind) -> Vec<&VersionRecord> {
        self.versions.iter().filter(|record| record.kind == kind).collect()
    }

    /// Major releases for the upper timeline.
    pub fn majors(&self) -> Vec<&VersionRecord> {
        self.of_kind(ReleaseKind::Major)
    }

    /// Minor releases for the revision timeline.
    pub fn minors(&self) -> Vec<&VersionRecord> {
        self.of_kind(ReleaseKind::Minor)
    }

    /// Downloads across all records.
    pub fn total_downloads(&self) -> u64 {
        self.versions.iter().map(|record| record.downloads).sum()
    }

    /// Counts one download of `version` and returns its new total.
    pub fn record_download(&mut self, version: &str) -> Result<u64, GsmError> {
        let record = self
            .versions
            .iter_mut()
            .find(|record| record.version == version)
            .ok_or_else(|| unknown_version(version))?;
        record.downloads += 1;
        Ok(record.downloads)
    }

    /// Compares `from` against `to`; both must exist.
    pub fn compare(&self, from: &str, to: &str) -> Result<VersionComparison, GsmError> {
        let older = self.require(from)?;
        let newer = self.require(to)?;

        let added_changes = newer.changes.len() as i64 - older.changes.len() as i64;
        let added_files = newer.file_count() as i64 - older.file_count() as i64;
        let download_growth_pct = (older.downloads > 0).then(|| {
            ((newer.downloads as f64 / older.downloads as f64 - 1.0) * 100.0).round() as i64
        });

        let mut differences = Vec::new();
        if added_changes > 0 {
            differences.push(format!("Added {added_changes} theory improvements"));
        }
        if older.files.is_some() && newer.files.is_some() && added_files > 0 {
            differences.push(format!("Added {added_files} document files"));
        }
        if let Some(growth) = download_growth_pct.filter(|_| newer.downloads > older.downloads) {
            differences.push(format!("Downloads grew by {growth}%"));
        }

        Ok(VersionComparison {
            from: older.version.clone(),
            to: newer.version.clone(),
            added_changes,
            added_files,
            download_growth_pct,
            differences,
        })
    }

    /// Snapshot of the catalog with `current` marked as the released version.
    pub fn history_export(&self, current: &str, at: DateTime<Utc>) -> Result<VersionHistoryExport, GsmError> {
        self.require(current)?;
        Ok(VersionHistoryExport {
            system: HISTORY_SYSTEM.to_string(),
            current_version: current.to_string(),
            total_versions: self.versions.len(),
            versions: self.versions.clone(),
            export_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
