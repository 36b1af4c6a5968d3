//! Display strings for the result cards.

use serde::{Deserialize, Serialize};

use crate::profile::ModelProfile;
use crate::report::PredictionReport;

/// Formats `value` like `Number.prototype.toExponential`: `3.20e-4`, `1.00e+3`.
pub fn exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{value:.fraction_digits$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// Formats `value` like `Number.prototype.toFixed`: exact decimal ties round away from zero.
pub fn fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Exact ties are the values odd / 2^(fraction_digits + 1).
    let scale = 2f64.powi(fraction_digits as i32 + 1);
    let scaled = value.abs() * scale;
    let is_tie = scaled < 9_007_199_254_740_992.0 && scaled.fract() == 0.0 && scaled % 2.0 == 1.0;
    if !is_tie {
        return format!("{value:.fraction_digits$}");
    }
    let digits = format!("{:.*}", fraction_digits + 1, value.abs());
    let mut rounded = round_up_last_digit(&digits[..digits.len() - 1]);
    if value.is_sign_negative() {
        rounded.insert(0, '-');
    }
    rounded
}

fn round_up_last_digit(truncated: &str) -> String {
    let mut bytes = truncated.trim_end_matches('.').as_bytes().to_vec();
    for index in (0..bytes.len()).rev() {
        match bytes[index] {
            b'.' => continue,
            b'9' => bytes[index] = b'0',
            digit => {
                bytes[index] = digit + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    bytes.insert(0, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Resonance mass with unit.
pub fn format_mass(profile: ModelProfile, mass: f64) -> String {
    match profile {
        ModelProfile::Academic => format!("{} TeV", fixed(mass, 3)),
        ModelProfile::Classic => format!("{} ± {} TeV", fixed(mass, 2), fixed(mass * 0.02, 2)),
    }
}

/// Cross section in exponential notation with unit.
pub fn format_cross_section(cross_section: f64) -> String {
    format!("{} pb", exponential(cross_section, 2))
}

/// Decay width with unit.
pub fn format_decay_width(width: f64) -> String {
    format!("{} MeV", fixed(width, 1))
}

/// Dark matter density with unit.
pub fn format_dark_matter(profile: ModelProfile, density: f64) -> String {
    match profile {
        ModelProfile::Academic => format!("{} GeV/cm³", fixed(density, 3)),
        ModelProfile::Classic => format!("{} GeV/cm³", fixed(density, 2)),
    }
}

/// Confidence percentage.
pub fn format_confidence(score: u8) -> String {
    format!("{score}%")
}

/// Result card identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultField {
    /// Resonance mass card.
    ResonanceMass,
    /// Cross section card.
    CrossSection,
    /// Decay width card.
    DecayWidth,
    /// Dark matter density card.
    DarkMatterDensity,
}

impl ResultField {
    /// Every card in display order.
    pub const ALL: [ResultField; 4] = [
        ResultField::ResonanceMass,
        ResultField::CrossSection,
        ResultField::DecayWidth,
        ResultField::DarkMatterDensity,
    ];

    /// Card heading.
    pub fn label(self) -> &'static str {
        match self {
            ResultField::ResonanceMass => "Resonance mass",
            ResultField::CrossSection => "Cross section",
            ResultField::DecayWidth => "Decay width",
            ResultField::DarkMatterDensity => "Dark matter density",
        }
    }
}

/// Which result cards the view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Cards to render, in order.
    #[serde(default = "DisplayOptions::default_fields")]
    pub fields: Vec<ResultField>,
    /// Whether to append the follow-up analysis.
    #[serde(default = "DisplayOptions::default_analysis")]
    pub show_analysis: bool,
}

impl DisplayOptions {
    fn default_fields() -> Vec<ResultField> {
        ResultField::ALL.to_vec()
    }

    const fn default_analysis() -> bool {
        true
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            fields: Self::default_fields(),
            show_analysis: Self::default_analysis(),
        }
    }
}

/// One formatted result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    /// Card identifier.
    pub field: ResultField,
    /// Card heading.
    pub label: String,
    /// Formatted value with unit.
    pub value: String,
    /// Confidence score backing the meter width.
    pub confidence: u8,
    /// Formatted confidence.
    pub confidence_text: String,
}

/// Formatted contents of the results area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPanel {
    /// Cards selected by the display options.
    pub entries: Vec<PanelEntry>,
    /// Follow-up analysis lines, empty when disabled.
    pub analysis: Vec<String>,
}

impl ResultPanel {
    /// Formats `report` according to `options`.
    pub fn build(report: &PredictionReport, options: &DisplayOptions) -> Self {
        let quantities = &report.result.quantities;
        let confidence = &report.result.confidence;
        let entries = options
            .fields
            .iter()
            .map(|&field| {
                let (value, score) = match field {
                    ResultField::ResonanceMass => (
                        format_mass(report.profile, quantities.resonance_mass),
                        confidence.mass,
                    ),
                    ResultField::CrossSection => (
                        format_cross_section(quantities.cross_section),
                        confidence.cross_section,
                    ),
                    ResultField::DecayWidth => (
                        format_decay_width(quantities.decay_width),
                        confidence.decay_width,
                    ),
                    ResultField::DarkMatterDensity => (
                        format_dark_matter(report.profile, quantities.dark_matter_density),
                        confidence.dark_matter,
                    ),
                };
                PanelEntry {
                    field,
                    label: field.label().to_string(),
                    value,
                    confidence: score,
                    confidence_text: format_confidence(score),
                }
            })
            .collect();
        let analysis = if options.show_analysis {
            analysis_lines(report)
        } else {
            Vec::new()
        };
        Self { entries, analysis }
    }
}

fn analysis_lines(report: &PredictionReport) -> Vec<String> {
    let analysis = &report.analysis;
    let mut lines = vec![
        format!(
            "Resonance mass {} TeV lies within collider reach",
            fixed(report.result.quantities.resonance_mass, 3)
        ),
        format!(
            "Cross section {} pb is compatible with current data",
            exponential(report.result.quantities.cross_section, 2)
        ),
        format!("{}-dimensional geometry", analysis.dimensions),
        format!(
            "Search for a resonance near {} TeV",
            fixed(analysis.search_mass_tev, 1)
        ),
    ];
    if let Some(luminosity) = analysis.discovery_luminosity_fb {
        lines.push(format!(
            "About {} fb⁻¹ of data reaches a 5σ discovery",
            fixed(luminosity, 0)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ExtraDimensions, ParameterSet};

    #[test]
    fn exponential_matches_script_notation() {
        assert_eq!(exponential(3.2e-4, 2), "3.20e-4");
        assert_eq!(exponential(1000.0, 2), "1.00e+3");
        assert_eq!(exponential(1.0, 2), "1.00e+0");
        assert_eq!(exponential(6.4e-17, 2), "6.40e-17");
    }

    #[test]
    fn classic_mass_carries_uncertainty() {
        assert_eq!(format_mass(ModelProfile::Classic, 2.5), "2.50 ± 0.05 TeV");
        assert_eq!(format_mass(ModelProfile::Academic, 0.35355), "0.354 TeV");
    }

    #[test]
    fn fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(fixed(0.25, 1), "0.3");
        assert_eq!(fixed(2.125, 2), "2.13");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(9.95, 1), "9.9");
        assert_eq!(fixed(9.75, 1), "9.8");
        assert_eq!(fixed(99.5, 0), "100");
        assert_eq!(fixed(-2.125, 2), "-2.13");
    }

    #[test]
    fn fixed_leaves_inexact_values_to_nearest_rounding() {
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(0.35355, 3), "0.354");
        assert_eq!(fixed(0.12, 3), "0.120");
        assert_eq!(fixed(7.0, 1), "7.0");
    }

    #[test]
    fn display_strings_use_script_tie_rounding() {
        let params = ParameterSet::new(500.0, 0.001, ExtraDimensions::Nine);
        let width = ModelProfile::Classic.predict(&params).quantities.decay_width;
        assert_eq!(width, 0.25);
        assert_eq!(format_decay_width(width), "0.3 MeV");
        assert_eq!(format_mass(ModelProfile::Classic, 2.125), "2.13 ± 0.04 TeV");
        assert_eq!(format_dark_matter(ModelProfile::Classic, 0.125), "0.13 GeV/cm³");
    }
}
