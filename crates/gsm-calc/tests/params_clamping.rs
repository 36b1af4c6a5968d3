use gsm_calc::params::{COUPLING_DOMAIN, ENERGY_DOMAIN};
use gsm_calc::{AdjustDirection, AdjustTarget, ExtraDimensions, ParameterSet};

#[test]
fn out_of_range_values_clamp_to_nearest_boundary() {
    let low = ParameterSet::clamped(0.0, -1.0, 2);
    assert_eq!(low.energy_scale(), ENERGY_DOMAIN.min);
    assert_eq!(low.coupling_constant(), COUPLING_DOMAIN.min);
    assert_eq!(low.extra_dimensions(), ExtraDimensions::Six);

    let high = ParameterSet::clamped(14_000.0, 0.5, 26);
    assert_eq!(high.energy_scale(), ENERGY_DOMAIN.max);
    assert_eq!(high.coupling_constant(), COUPLING_DOMAIN.max);
    assert_eq!(high.extra_dimensions(), ExtraDimensions::Eleven);
}

#[test]
fn in_range_values_pass_through() {
    let params = ParameterSet::clamped(3300.0, 0.045, 10);
    assert_eq!(params.energy_scale(), 3300.0);
    assert_eq!(params.coupling_constant(), 0.045);
    assert_eq!(params.extra_dimensions().get(), 10);
}

#[test]
fn validated_rejects_instead_of_clamping() {
    let err = ParameterSet::validated(50.0, 0.02, 9).unwrap_err();
    assert_eq!(err.info().code, "invalid_parameter");
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("energy_scale"));

    let err = ParameterSet::validated(2500.0, 0.2, 9).unwrap_err();
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("coupling_constant"));

    let err = ParameterSet::validated(2500.0, 0.02, 7).unwrap_err();
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("extra_dimensions"));

    assert_eq!(
        ParameterSet::validated(2500.0, 0.02, 9).unwrap(),
        ParameterSet::default()
    );
}

#[test]
fn step_buttons_move_one_step_and_stop_at_boundaries() {
    let params = ParameterSet::default();
    let up = params.adjusted(AdjustTarget::Energy, AdjustDirection::Increase);
    assert_eq!(up.energy_scale(), 2600.0);
    let down = params.adjusted(AdjustTarget::Coupling, AdjustDirection::Decrease);
    assert!((down.coupling_constant() - 0.019).abs() < 1e-12);

    let floor = ParameterSet::clamped(100.0, 0.001, 9);
    let still = floor
        .adjusted(AdjustTarget::Energy, AdjustDirection::Decrease)
        .adjusted(AdjustTarget::Coupling, AdjustDirection::Decrease);
    assert_eq!(still, floor);
}

#[test]
fn deserialization_clamps_and_defaults() {
    let params: ParameterSet =
        serde_json::from_str(r#"{"energy_scale": 99999.0, "extra_dimensions": 8}"#).unwrap();
    assert_eq!(params.energy_scale(), ENERGY_DOMAIN.max);
    assert_eq!(params.coupling_constant(), 0.02);
    assert_eq!(params.extra_dimensions(), ExtraDimensions::Nine);

    let json = serde_json::to_value(ParameterSet::default()).unwrap();
    assert_eq!(json["extra_dimensions"], 9);
}
