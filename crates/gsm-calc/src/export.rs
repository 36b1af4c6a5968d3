use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use gsm_core::errors::GsmError;
use gsm_core::serde::to_pretty_json_string;
use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceScores;
use crate::profile::ModelProfile;
use crate::report::PredictionReport;

/// Label identifying the producer of an export.
pub const EXPORT_VERSION: &str = "Geometric string theory calculator v1.0";

/// Inputs as written to an export document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParameters {
    /// Energy scale in GeV.
    pub energy_scale: f64,
    /// Coupling constant.
    pub coupling_constant: f64,
    /// Extra dimension count.
    pub extra_dimensions: u32,
}

/// Computed quantities as written to an export document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCalculations {
    /// Resonance mass in TeV.
    pub resonance_mass: f64,
    /// Cross section in pb.
    pub cross_section: f64,
    /// Decay width in MeV.
    pub decay_width: f64,
    /// Dark matter density in GeV/cm³.
    pub dark_matter_density: f64,
}

/// Downloadable record of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Calculation inputs.
    pub parameters: ExportParameters,
    /// Calculation outputs.
    pub calculations: ExportCalculations,
    /// Confidence per quantity, keyed `mass`, `cross`, `width`, `dm`.
    pub confidence: ConfidenceScores,
    /// Profile used for the calculation.
    pub profile: ModelProfile,
    /// Report hash of the calculation.
    pub report_hash: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
    /// Producer label.
    pub version: String,
}

impl ExportDocument {
    /// Builds the export for `report`, stamped with `at`.
    pub fn new(report: &PredictionReport, at: DateTime<Utc>) -> Self {
        let quantities = &report.result.quantities;
        Self {
            parameters: ExportParameters {
                energy_scale: report.parameters.energy_scale(),
                coupling_constant: report.parameters.coupling_constant(),
                extra_dimensions: report.parameters.extra_dimensions().get(),
            },
            calculations: ExportCalculations {
                resonance_mass: quantities.resonance_mass,
                cross_section: quantities.cross_section,
                decay_width: quantities.decay_width,
                dark_matter_density: quantities.dark_matter_density,
            },
            confidence: report.result.confidence,
            profile: report.profile,
            report_hash: report.report_hash.clone(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Builds the export for `report`, stamped with the current time.
    pub fn now(report: &PredictionReport) -> Self {
        Self::new(report, Utc::now())
    }
}

/// Suggested download name for an export produced on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("gsm-calculation-{}.json", date.format("%Y-%m-%d"))
}

/// Writes `document` to `path` as indented JSON.
pub fn write_export(path: &Path, document: &ExportDocument) -> Result<(), GsmError> {
    let body = to_pretty_json_string(document)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| GsmError::io("export_dir", parent, err))?;
    }
    fs::write(path, body).map_err(|err| GsmError::io("export_write", path, err))?;
    tracing::info!(path = %path.display(), hash = %document.report_hash, "wrote calculation export");
    Ok(())
}
