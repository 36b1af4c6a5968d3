use gsm_core::errors::GsmError;
use gsm_core::hash::stable_hash_string;
use gsm_core::provenance::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::confidence::{compute_confidence, ConfidenceScores};
use crate::formulas;
use crate::params::ParameterSet;
use crate::profile::ModelProfile;

/// Schema version stamped on serialized reports.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// The four derived physical quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantities {
    /// Resonance mass in TeV.
    pub resonance_mass: f64,
    /// Production cross section in pb.
    pub cross_section: f64,
    /// Decay width in MeV.
    pub decay_width: f64,
    /// Dark matter density in GeV/cm³.
    pub dark_matter_density: f64,
}

impl Quantities {
    /// Evaluates the default formulas for `params`.
    pub fn compute(params: &ParameterSet) -> Self {
        let energy = params.energy_scale();
        let coupling = params.coupling_constant();
        let dimensions = params.extra_dimensions().get();
        Self {
            resonance_mass: formulas::resonance_mass(energy, coupling, dimensions),
            cross_section: formulas::cross_section(energy, coupling, dimensions),
            decay_width: formulas::decay_width(energy, coupling, dimensions),
            dark_matter_density: formulas::dark_matter_density(dimensions, coupling),
        }
    }
}

/// Quantities together with their confidence scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Derived quantities.
    #[serde(flatten)]
    pub quantities: Quantities,
    /// Heuristic score per quantity.
    pub confidence: ConfidenceScores,
}

/// Evaluates the default formulas and confidence bands for `params`.
pub fn predict(params: &ParameterSet) -> PredictionResult {
    let quantities = Quantities::compute(params);
    PredictionResult {
        quantities,
        confidence: compute_confidence(&quantities, params.extra_dimensions().get()),
    }
}

/// Experimental follow-up derived from a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheoryAnalysis {
    /// Mass window to search, rounded to 0.1 TeV.
    pub search_mass_tev: f64,
    /// Integrated luminosity `1/σ` in fb⁻¹, rounded; absent when σ is zero or not finite.
    pub discovery_luminosity_fb: Option<f64>,
    /// Dimension count of the underlying geometry.
    pub dimensions: u32,
}

impl TheoryAnalysis {
    /// Derives the analysis for a computed result.
    pub fn from_result(result: &PredictionResult, dimensions: u32) -> Self {
        let sigma = result.quantities.cross_section;
        let discovery_luminosity_fb = if sigma > 0.0 && sigma.is_finite() {
            Some((1.0 / sigma).round())
        } else {
            None
        };
        Self {
            search_mass_tev: (result.quantities.resonance_mass * 10.0).round() / 10.0,
            discovery_luminosity_fb,
            dimensions,
        }
    }
}

/// Fully described calculation, stamped with a reproducibility hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Formula and banding variant used.
    pub profile: ModelProfile,
    /// Inputs of the calculation.
    pub parameters: ParameterSet,
    /// Computed quantities and scores.
    pub result: PredictionResult,
    /// Follow-up analysis.
    pub analysis: TheoryAnalysis,
    /// SHA-256 over profile, parameters and result.
    pub report_hash: String,
}

/// Runs `profile` on `params` and assembles a hashed report.
pub fn build_report(profile: ModelProfile, params: &ParameterSet) -> Result<PredictionReport, GsmError> {
    let result = profile.predict(params);
    let dimensions = params.extra_dimensions().get();
    let report_hash = stable_hash_string(&(profile, params, &result))?;
    Ok(PredictionReport {
        schema_version: REPORT_SCHEMA,
        profile,
        parameters: *params,
        result,
        analysis: TheoryAnalysis::from_result(&result, dimensions),
        report_hash,
    })
}
