use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::params::{ParameterSet, ENERGY_DOMAIN};
use crate::profile::ModelProfile;

/// Energy scales sampled for the parameter-space chart, in GeV.
pub const DEFAULT_ENERGY_POINTS: [f64; 5] = [500.0, 1000.0, 2500.0, 5000.0, 10_000.0];

/// Factor applied to cross sections so both curves share a readable log axis.
pub const CROSS_SECTION_DISPLAY_SCALE: f64 = 1e6;

/// Mass and cross-section values sampled over a sequence of energies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSeries {
    /// Sampled energies in GeV, in input order.
    pub energies: Vec<f64>,
    /// Resonance mass per energy, in TeV.
    pub masses: Vec<f64>,
    /// Cross section per energy, in pb.
    pub cross_sections: Vec<f64>,
}

impl PredictionSeries {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// Whether no point was sampled.
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Iterates `(energy, mass, cross_section)` triples; may be called repeatedly.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.energies
            .iter()
            .zip(&self.masses)
            .zip(&self.cross_sections)
            .map(|((&energy, &mass), &sigma)| (energy, mass, sigma))
    }
}

/// Moves chart energies onto [`ENERGY_DOMAIN`]; `NaN` points take the default energy scale.
pub fn clamp_energy_points(energy_points: &[f64]) -> Vec<f64> {
    let fallback = ParameterSet::default().energy_scale();
    let clamped: Vec<f64> = energy_points
        .iter()
        .map(|&energy| ENERGY_DOMAIN.clamp(energy, fallback))
        .collect();
    let changed = energy_points
        .iter()
        .zip(&clamped)
        .any(|(requested, applied)| requested != applied);
    if changed {
        warn!(requested = ?energy_points, applied = ?clamped, "energy points clamped");
    }
    clamped
}

/// Samples the default formulas over `energy_points`.
pub fn sample_series(coupling: f64, dimensions: u32, energy_points: &[f64]) -> PredictionSeries {
    ModelProfile::Academic.sample_series(coupling, dimensions, energy_points)
}

/// One curve of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Legend label including the unit.
    pub label: String,
    /// Plotted values.
    pub values: Vec<f64>,
    /// Whether the axis should be logarithmic.
    pub logarithmic: bool,
}

/// Data handed to the chart drawing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Chart title.
    pub title: String,
    /// X axis labels, one per energy point.
    pub labels: Vec<String>,
    /// Mass curve followed by the scaled cross-section curve.
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    /// Samples `profile` at `energy_points` using the coupling and dimensions of `params`.
    ///
    /// Points outside the energy domain are clamped first.
    pub fn build(profile: ModelProfile, params: &ParameterSet, energy_points: &[f64]) -> Self {
        let series = profile.sample_series(
            params.coupling_constant(),
            params.extra_dimensions().get(),
            &clamp_energy_points(energy_points),
        );
        let labels = series
            .energies
            .iter()
            .map(|energy| format!("{energy} GeV"))
            .collect();
        let scaled = series
            .cross_sections
            .iter()
            .map(|sigma| sigma * CROSS_SECTION_DISPLAY_SCALE)
            .collect();
        Self {
            title: "Predictions versus energy scale".to_string(),
            labels,
            datasets: vec![
                ChartDataset {
                    label: "Resonance mass (TeV)".to_string(),
                    values: series.masses,
                    logarithmic: true,
                },
                ChartDataset {
                    label: "Cross section (×10⁻⁶ pb)".to_string(),
                    values: scaled,
                    logarithmic: true,
                },
            ],
        }
    }
}
