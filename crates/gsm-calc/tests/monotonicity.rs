use gsm_calc::formulas::{cross_section, resonance_mass};
use proptest::prelude::*;

fn dimensions() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![6u32, 9, 10, 11])
}

proptest! {
    #[test]
    fn mass_non_decreasing_in_energy(
        a in 100.0f64..10_000.0,
        b in 100.0f64..10_000.0,
        coupling in 0.001f64..0.1,
        dims in dimensions(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resonance_mass(lo, coupling, dims) <= resonance_mass(hi, coupling, dims));
    }

    #[test]
    fn mass_non_decreasing_in_coupling(
        energy in 100.0f64..10_000.0,
        a in 0.001f64..0.1,
        b in 0.001f64..0.1,
        dims in dimensions(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resonance_mass(energy, lo, dims) <= resonance_mass(energy, hi, dims));
    }

    #[test]
    fn cross_section_non_increasing_in_energy(
        a in 100.0f64..10_000.0,
        b in 100.0f64..10_000.0,
        coupling in 0.001f64..0.1,
        dims in dimensions(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(cross_section(hi, coupling, dims) <= cross_section(lo, coupling, dims));
    }

    #[test]
    fn formulas_are_deterministic(
        energy in 100.0f64..10_000.0,
        coupling in 0.001f64..0.1,
        dims in dimensions(),
    ) {
        prop_assert_eq!(
            resonance_mass(energy, coupling, dims).to_bits(),
            resonance_mass(energy, coupling, dims).to_bits()
        );
        prop_assert_eq!(
            cross_section(energy, coupling, dims).to_bits(),
            cross_section(energy, coupling, dims).to_bits()
        );
    }
}
