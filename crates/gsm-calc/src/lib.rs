#![deny(missing_docs)]
#![doc = "Parameter-to-prediction engine for the geometric string theory calculator: formulas, confidence bands, chart series, exports and a view-agnostic widget adapter."]

/// View-agnostic calculator widget state.
pub mod adapter;
/// YAML calculator configuration.
pub mod config;
/// Heuristic confidence banding.
pub mod confidence;
/// JSON export documents.
pub mod export;
pub mod format;
pub mod formulas;
/// Input parameters and their domains.
pub mod params;
/// Formula variants.
pub mod profile;
/// Result and report assembly.
pub mod report;
/// Sampled series for charting.
pub mod series;

pub use adapter::{Calculator, InputEvent, Notice, NoticeLevel, ResultView, TextView};
pub use config::CalculatorConfig;
pub use confidence::{compute_confidence, ConfidenceScores};
pub use export::{export_file_name, write_export, ExportDocument};
pub use format::{DisplayOptions, ResultField, ResultPanel};
pub use params::{AdjustDirection, AdjustTarget, ExtraDimensions, ParameterSet};
pub use profile::ModelProfile;
pub use report::{build_report, predict, PredictionReport, PredictionResult, Quantities, TheoryAnalysis};
pub use series::{
    clamp_energy_points, sample_series, ChartSeries, PredictionSeries, DEFAULT_ENERGY_POINTS,
};
