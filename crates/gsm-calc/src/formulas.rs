//! Closed-form prediction formulas.
//!
//! The functions are total over their arguments: zero energy yields an
//! infinite cross section and a negative coupling is treated as zero by the
//! dark matter density. Callers normally pass values from a clamped
//! [`crate::ParameterSet`].

/// Reference dimension count around which every formula is normalised.
pub const REFERENCE_DIMENSIONS: f64 = 9.0;

/// Resonance mass scale; folds the GeV to TeV conversion.
pub const MASS_SCALE: f64 = 0.001;

/// Reference cross section σ0 in pb.
pub const SIGMA_0: f64 = 1e-6;

/// Reference width Γ0 in MeV per GeV.
pub const GAMMA_0: f64 = 0.1;

/// Observed dark matter density ρ0 in GeV/cm³.
pub const RHO_0: f64 = 0.12;

/// Coupling at which the dark matter density equals ρ0 for nine dimensions.
pub const REFERENCE_COUPLING: f64 = 0.02;

/// `M = k · E · α^(1/2) · (D/9)^(1/4)`, in TeV.
pub fn resonance_mass(energy: f64, coupling: f64, dimensions: u32) -> f64 {
    MASS_SCALE * energy * coupling.sqrt() * (dimensions as f64 / REFERENCE_DIMENSIONS).powf(0.25)
}

/// `σ = σ0 · α² · E⁻² · (9/D)^(3/2)`, in pb.
pub fn cross_section(energy: f64, coupling: f64, dimensions: u32) -> f64 {
    if energy == 0.0 {
        return f64::INFINITY;
    }
    SIGMA_0
        * coupling.powi(2)
        * energy.powi(-2)
        * (REFERENCE_DIMENSIONS / dimensions as f64).powf(1.5)
}

/// `Γ = Γ0 · α · E · (D/9)^(1/2)`, in MeV.
pub fn decay_width(energy: f64, coupling: f64, dimensions: u32) -> f64 {
    GAMMA_0 * coupling * energy * (dimensions as f64 / REFERENCE_DIMENSIONS).sqrt()
}

/// `ρ = ρ0 · (D/9) · (α/0.02)^(1/2)`, in GeV/cm³.
pub fn dark_matter_density(dimensions: u32, coupling: f64) -> f64 {
    RHO_0
        * (dimensions as f64 / REFERENCE_DIMENSIONS)
        * (coupling.max(0.0) / REFERENCE_COUPLING).sqrt()
}

/// Formulas of the simplified calculator variant.
pub mod classic {
    /// `M = E / 1000`, in TeV.
    pub fn resonance_mass(energy: f64) -> f64 {
        energy / 1000.0
    }

    /// `σ = 0.01 · α² · E⁻²`, in pb.
    pub fn cross_section(energy: f64, coupling: f64) -> f64 {
        if energy == 0.0 {
            return f64::INFINITY;
        }
        0.01 * coupling.powi(2) * energy.powi(-2)
    }

    /// `Γ = 0.5 · α · E`, in MeV.
    pub fn decay_width(energy: f64, coupling: f64) -> f64 {
        0.5 * coupling * energy
    }
}
