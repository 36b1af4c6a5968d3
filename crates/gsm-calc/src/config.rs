use std::fs;
use std::path::Path;

use gsm_core::errors::GsmError;
use gsm_core::serde::from_yaml_slice as parse_yaml;
use serde::{Deserialize, Serialize};

use crate::format::DisplayOptions;
use crate::params::ParameterSet;
use crate::profile::ModelProfile;
use crate::series::{clamp_energy_points, DEFAULT_ENERGY_POINTS};

/// Construction settings for a [`crate::Calculator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Parameters shown on start and restored on reset.
    #[serde(default)]
    pub initial: ParameterSet,
    /// Formula and banding variant.
    #[serde(default)]
    pub profile: ModelProfile,
    /// Result cards to display.
    #[serde(default)]
    pub display: DisplayOptions,
    /// Energy scales sampled for the chart, in GeV.
    #[serde(default = "CalculatorConfig::default_energy_points")]
    pub energy_points: Vec<f64>,
}

impl CalculatorConfig {
    fn default_energy_points() -> Vec<f64> {
        DEFAULT_ENERGY_POINTS.to_vec()
    }

    /// Parses a YAML document; missing keys take their defaults and energy points are clamped.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, GsmError> {
        let mut config: Self = parse_yaml(data)?;
        config.energy_points = clamp_energy_points(&config.energy_points);
        Ok(config)
    }

    /// Reads and parses a YAML file.
    pub fn load(path: &Path) -> Result<Self, GsmError> {
        let bytes = fs::read(path).map_err(|err| GsmError::io("config_read", path, err))?;
        Self::from_yaml_slice(&bytes)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial: ParameterSet::default(),
            profile: ModelProfile::default(),
            display: DisplayOptions::default(),
            energy_points: Self::default_energy_points(),
        }
    }
}
