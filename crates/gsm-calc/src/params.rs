use std::fmt;

use gsm_core::errors::{ErrorInfo, GsmError};
use serde::{Deserialize, Serialize};

/// Inclusive range of accepted values for a continuous parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    /// Minimum accepted value.
    pub min: f64,
    /// Maximum accepted value.
    pub max: f64,
}

impl Domain {
    /// Returns whether the provided value lies within the inclusive range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Moves `value` onto the nearest boundary when it lies outside the range.
    ///
    /// `NaN` has no nearest boundary and is replaced by `fallback`.
    pub fn clamp(&self, value: f64, fallback: f64) -> f64 {
        if value.is_nan() {
            return fallback;
        }
        value.clamp(self.min, self.max)
    }
}

/// Energy scale domain in GeV.
pub const ENERGY_DOMAIN: Domain = Domain {
    min: 100.0,
    max: 10_000.0,
};

/// Dimensionless coupling constant domain.
pub const COUPLING_DOMAIN: Domain = Domain {
    min: 0.001,
    max: 0.1,
};

/// Increment applied by the energy step buttons, in GeV.
pub const ENERGY_STEP: f64 = 100.0;

/// Increment applied by the coupling step buttons.
pub const COUPLING_STEP: f64 = 0.001;

const DEFAULT_ENERGY: f64 = 2500.0;
const DEFAULT_COUPLING: f64 = 0.02;

/// Number of extra spatial dimensions offered by the dimension selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(from = "u32", into = "u32")]
pub enum ExtraDimensions {
    /// Six compact dimensions.
    Six,
    /// Nine dimensions, the value favoured by the geometric theory.
    #[default]
    Nine,
    /// Ten dimensions.
    Ten,
    /// Eleven dimensions.
    Eleven,
}

impl ExtraDimensions {
    /// All selectable values in ascending order.
    pub const ALL: [ExtraDimensions; 4] = [
        ExtraDimensions::Six,
        ExtraDimensions::Nine,
        ExtraDimensions::Ten,
        ExtraDimensions::Eleven,
    ];

    /// Returns the integer dimension count.
    pub const fn get(self) -> u32 {
        match self {
            ExtraDimensions::Six => 6,
            ExtraDimensions::Nine => 9,
            ExtraDimensions::Ten => 10,
            ExtraDimensions::Eleven => 11,
        }
    }

    /// Returns the selectable value closest to `count`; ties resolve to the smaller value.
    pub fn nearest(count: u32) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|candidate| candidate.get().abs_diff(count))
            .unwrap_or_default()
    }

    /// Returns the exact selectable value for `count`, if any.
    pub fn exact(count: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.get() == count)
    }
}

impl From<u32> for ExtraDimensions {
    fn from(count: u32) -> Self {
        Self::nearest(count)
    }
}

impl From<ExtraDimensions> for u32 {
    fn from(dimensions: ExtraDimensions) -> Self {
        dimensions.get()
    }
}

impl fmt::Display for ExtraDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Parameter targeted by a step adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustTarget {
    /// Energy scale.
    Energy,
    /// Coupling constant.
    Coupling,
}

/// Direction of a step adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustDirection {
    /// Add one step.
    Increase,
    /// Subtract one step.
    Decrease,
}

impl AdjustDirection {
    fn sign(self) -> f64 {
        match self {
            AdjustDirection::Increase => 1.0,
            AdjustDirection::Decrease => -1.0,
        }
    }
}

#[derive(Deserialize)]
struct RawParameterSet {
    #[serde(default = "ParameterSet::default_energy")]
    energy_scale: f64,
    #[serde(default = "ParameterSet::default_coupling")]
    coupling_constant: f64,
    #[serde(default)]
    extra_dimensions: ExtraDimensions,
}

impl From<RawParameterSet> for ParameterSet {
    fn from(raw: RawParameterSet) -> Self {
        ParameterSet::new(raw.energy_scale, raw.coupling_constant, raw.extra_dimensions)
    }
}

/// Calculator inputs, always held inside their declared domains.
///
/// Every constructor clamps, so a `ParameterSet` can be handed to the
/// prediction formulas without further checks. Deserialization clamps too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParameterSet")]
pub struct ParameterSet {
    energy_scale: f64,
    coupling_constant: f64,
    extra_dimensions: ExtraDimensions,
}

impl ParameterSet {
    const fn default_energy() -> f64 {
        DEFAULT_ENERGY
    }

    const fn default_coupling() -> f64 {
        DEFAULT_COUPLING
    }

    /// Builds a parameter set, clamping each value to its domain.
    pub fn new(energy_scale: f64, coupling_constant: f64, extra_dimensions: ExtraDimensions) -> Self {
        Self {
            energy_scale: ENERGY_DOMAIN.clamp(energy_scale, DEFAULT_ENERGY),
            coupling_constant: COUPLING_DOMAIN.clamp(coupling_constant, DEFAULT_COUPLING),
            extra_dimensions,
        }
    }

    /// Builds a parameter set from raw widget values, clamping every input.
    pub fn clamped(energy_scale: f64, coupling_constant: f64, extra_dimensions: u32) -> Self {
        Self::new(
            energy_scale,
            coupling_constant,
            ExtraDimensions::nearest(extra_dimensions),
        )
    }

    /// Builds a parameter set from raw values, rejecting anything outside the domain.
    pub fn validated(
        energy_scale: f64,
        coupling_constant: f64,
        extra_dimensions: u32,
    ) -> Result<Self, GsmError> {
        if !ENERGY_DOMAIN.contains(energy_scale) {
            return Err(out_of_domain("energy_scale", energy_scale, ENERGY_DOMAIN));
        }
        if !COUPLING_DOMAIN.contains(coupling_constant) {
            return Err(out_of_domain(
                "coupling_constant",
                coupling_constant,
                COUPLING_DOMAIN,
            ));
        }
        let dimensions = ExtraDimensions::exact(extra_dimensions).ok_or_else(|| {
            GsmError::Parameter(
                ErrorInfo::new("invalid_parameter", "extra dimension count is not selectable")
                    .with_context("field", "extra_dimensions")
                    .with_context("value", extra_dimensions.to_string())
                    .with_hint("choose one of 6, 9, 10, 11"),
            )
        })?;
        Ok(Self {
            energy_scale,
            coupling_constant,
            extra_dimensions: dimensions,
        })
    }

    /// Energy scale in GeV.
    pub fn energy_scale(&self) -> f64 {
        self.energy_scale
    }

    /// Dimensionless coupling constant.
    pub fn coupling_constant(&self) -> f64 {
        self.coupling_constant
    }

    /// Selected extra dimension count.
    pub fn extra_dimensions(&self) -> ExtraDimensions {
        self.extra_dimensions
    }

    /// Returns a copy with a new energy scale.
    pub fn with_energy(self, energy_scale: f64) -> Self {
        Self::new(energy_scale, self.coupling_constant, self.extra_dimensions)
    }

    /// Returns a copy with a new coupling constant.
    pub fn with_coupling(self, coupling_constant: f64) -> Self {
        Self::new(self.energy_scale, coupling_constant, self.extra_dimensions)
    }

    /// Returns a copy with a new dimension selection.
    pub fn with_dimensions(self, extra_dimensions: ExtraDimensions) -> Self {
        Self {
            extra_dimensions,
            ..self
        }
    }

    /// Applies one step of the helper buttons to `target`.
    pub fn adjusted(self, target: AdjustTarget, direction: AdjustDirection) -> Self {
        match target {
            AdjustTarget::Energy => {
                self.with_energy(self.energy_scale + direction.sign() * ENERGY_STEP)
            }
            AdjustTarget::Coupling => {
                self.with_coupling(self.coupling_constant + direction.sign() * COUPLING_STEP)
            }
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            energy_scale: DEFAULT_ENERGY,
            coupling_constant: DEFAULT_COUPLING,
            extra_dimensions: ExtraDimensions::Nine,
        }
    }
}

fn out_of_domain(field: &str, value: f64, domain: Domain) -> GsmError {
    GsmError::Parameter(
        ErrorInfo::new("invalid_parameter", format!("{field} is outside its domain"))
            .with_context("field", field)
            .with_context("value", value.to_string())
            .with_hint(format!("expected a value in [{}, {}]", domain.min, domain.max)),
    )
}
