use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::Quantities;

/// Heuristic plausibility scores, as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    /// Resonance mass score.
    pub mass: u8,
    /// Cross section score.
    #[serde(rename = "cross")]
    pub cross_section: u8,
    /// Decay width score.
    #[serde(rename = "width")]
    pub decay_width: u8,
    /// Dark matter density score.
    #[serde(rename = "dm")]
    pub dark_matter: u8,
}

impl ConfidenceScores {
    /// Returns the scores keyed by quantity name.
    pub fn as_map(&self) -> BTreeMap<String, u8> {
        BTreeMap::from([
            ("mass".to_string(), self.mass),
            ("cross".to_string(), self.cross_section),
            ("width".to_string(), self.decay_width),
            ("dm".to_string(), self.dark_matter),
        ])
    }
}

/// 85 inside [2, 3] TeV, 70 inside [1.5, 3.5] TeV, otherwise 50.
pub fn mass_confidence(mass: f64) -> u8 {
    if (2.0..=3.0).contains(&mass) {
        85
    } else if (1.5..=3.5).contains(&mass) {
        70
    } else {
        50
    }
}

/// 75 inside [1e-6, 1e-3] pb, 60 inside [1e-7, 1e-2] pb, otherwise 40.
pub fn cross_section_confidence(cross_section: f64) -> u8 {
    if (1e-6..=1e-3).contains(&cross_section) {
        75
    } else if (1e-7..=1e-2).contains(&cross_section) {
        60
    } else {
        40
    }
}

/// `max(40, 100 - |D - 9| · 10)`; depends on the dimension count only.
pub fn decay_width_confidence(dimensions: u32) -> u8 {
    let distance = (i64::from(dimensions) - 9).abs();
    (100 - distance * 10).max(40) as u8
}

/// `min(95, 70 + 3D)`.
pub fn dark_matter_confidence(dimensions: u32) -> u8 {
    (70 + u64::from(dimensions) * 3).min(95) as u8
}

/// Applies the four banding rules to a set of computed quantities.
pub fn compute_confidence(quantities: &Quantities, dimensions: u32) -> ConfidenceScores {
    ConfidenceScores {
        mass: mass_confidence(quantities.resonance_mass),
        cross_section: cross_section_confidence(quantities.cross_section),
        decay_width: decay_width_confidence(dimensions),
        dark_matter: dark_matter_confidence(dimensions),
    }
}

/// Banding rules of the simplified calculator variant.
pub mod classic {
    use super::ConfidenceScores;
    use crate::report::Quantities;

    /// 85 strictly between 1 and 10 TeV, otherwise 60.
    pub fn mass_confidence(mass: f64) -> u8 {
        if mass > 1.0 && mass < 10.0 {
            85
        } else {
            60
        }
    }

    /// `round(min(75, 60 + 500α))`; depends on the coupling only.
    pub fn cross_section_confidence(coupling: f64) -> u8 {
        (60.0 + coupling.max(0.0) * 500.0).min(75.0).round() as u8
    }

    /// `max(0, 70 - |D - 9| · 5)`.
    pub fn decay_width_confidence(dimensions: u32) -> u8 {
        let distance = (i64::from(dimensions) - 9).abs();
        (70 - distance * 5).max(0) as u8
    }

    /// `min(90, 80 + 2D)`.
    pub fn dark_matter_confidence(dimensions: u32) -> u8 {
        (80 + u64::from(dimensions) * 2).min(90) as u8
    }

    /// Applies the simplified banding rules.
    pub fn compute_confidence(quantities: &Quantities, coupling: f64, dimensions: u32) -> ConfidenceScores {
        ConfidenceScores {
            mass: mass_confidence(quantities.resonance_mass),
            cross_section: cross_section_confidence(coupling),
            decay_width: decay_width_confidence(dimensions),
            dark_matter: dark_matter_confidence(dimensions),
        }
    }
}
