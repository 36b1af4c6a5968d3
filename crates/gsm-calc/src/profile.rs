use std::fmt;
use std::str::FromStr;

use gsm_core::errors::{ErrorInfo, GsmError};
use serde::{Deserialize, Serialize};

use crate::confidence::{self, ConfidenceScores};
use crate::formulas;
use crate::params::ParameterSet;
use crate::report::{predict, PredictionResult, Quantities};
use crate::series::PredictionSeries;

/// Formula and confidence-banding variant of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelProfile {
    /// Dimension-aware formulas with the published confidence bands.
    #[default]
    Academic,
    /// Simplified formulas of the first online calculator.
    Classic,
}

impl ModelProfile {
    /// Resonance mass in TeV under this profile.
    pub fn resonance_mass(self, energy: f64, coupling: f64, dimensions: u32) -> f64 {
        match self {
            ModelProfile::Academic => formulas::resonance_mass(energy, coupling, dimensions),
            ModelProfile::Classic => formulas::classic::resonance_mass(energy),
        }
    }

    /// Cross section in pb under this profile.
    pub fn cross_section(self, energy: f64, coupling: f64, dimensions: u32) -> f64 {
        match self {
            ModelProfile::Academic => formulas::cross_section(energy, coupling, dimensions),
            ModelProfile::Classic => formulas::classic::cross_section(energy, coupling),
        }
    }

    /// Derived quantities for `params`.
    pub fn quantities(self, params: &ParameterSet) -> Quantities {
        match self {
            ModelProfile::Academic => Quantities::compute(params),
            ModelProfile::Classic => {
                let energy = params.energy_scale();
                let coupling = params.coupling_constant();
                Quantities {
                    resonance_mass: formulas::classic::resonance_mass(energy),
                    cross_section: formulas::classic::cross_section(energy, coupling),
                    decay_width: formulas::classic::decay_width(energy, coupling),
                    dark_matter_density: formulas::dark_matter_density(
                        params.extra_dimensions().get(),
                        coupling,
                    ),
                }
            }
        }
    }

    /// Confidence scores for already computed quantities.
    pub fn confidence(self, quantities: &Quantities, params: &ParameterSet) -> ConfidenceScores {
        let dimensions = params.extra_dimensions().get();
        match self {
            ModelProfile::Academic => confidence::compute_confidence(quantities, dimensions),
            ModelProfile::Classic => confidence::classic::compute_confidence(
                quantities,
                params.coupling_constant(),
                dimensions,
            ),
        }
    }

    /// Quantities and confidence scores for `params`.
    pub fn predict(self, params: &ParameterSet) -> PredictionResult {
        if self == ModelProfile::Academic {
            return predict(params);
        }
        let quantities = self.quantities(params);
        PredictionResult {
            quantities,
            confidence: self.confidence(&quantities, params),
        }
    }

    /// Mass and cross-section curves over `energy_points` with the other inputs held fixed.
    pub fn sample_series(self, coupling: f64, dimensions: u32, energy_points: &[f64]) -> PredictionSeries {
        PredictionSeries {
            energies: energy_points.to_vec(),
            masses: energy_points
                .iter()
                .map(|&energy| self.resonance_mass(energy, coupling, dimensions))
                .collect(),
            cross_sections: energy_points
                .iter()
                .map(|&energy| self.cross_section(energy, coupling, dimensions))
                .collect(),
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelProfile::Academic => "academic",
            ModelProfile::Classic => "classic",
        }
    }
}

impl fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProfile {
    type Err = GsmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "academic" => Ok(ModelProfile::Academic),
            "classic" => Ok(ModelProfile::Classic),
            other => Err(GsmError::Parameter(
                ErrorInfo::new("unknown_profile", "unknown model profile")
                    .with_context("value", other)
                    .with_hint("use `academic` or `classic`"),
            )),
        }
    }
}
