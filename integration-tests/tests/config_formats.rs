use approx::assert_relative_eq;
use carnot_cycle::{CycleInputs, solve};
use integration_tests::load_data;
use uom::si::{energy::joule, pressure::pascal, volume::cubic_meter};

#[test]
fn reference_case_loads_identically_from_every_format() {
    let json = load_data("reference_case.json");
    let toml = load_data("reference_case.toml");
    let yaml = load_data("reference_case.yaml");

    assert_eq!(json, CycleInputs::default());
    assert_eq!(toml, json);
    assert_eq!(yaml, json);
}

#[test]
fn loaded_reference_case_solves_to_known_values() {
    let result = solve(&load_data("reference_case.yaml")).unwrap();
    let states = result.states;

    assert_relative_eq!(states.s1.pressure.get::<pascal>(), 172_200.0);
    assert_relative_eq!(
        states.s2.volume.get::<cubic_meter>(),
        1.787_325_007_5,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        states.s4.volume.get::<cubic_meter>(),
        2.0_f64.powf(2.5),
        max_relative = 1e-12
    );
    assert_relative_eq!(result.work.get::<joule>(), 50_000.0, max_relative = 1e-9);
}

#[test]
fn helium_case_solves() {
    let inputs = load_data("helium.toml");
    let result = solve(&inputs).unwrap();

    // 1 − 320 / 900
    assert_relative_eq!(
        result.theoretical_efficiency.value,
        0.644_444_444_444_444_4,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.efficiency.value,
        result.theoretical_efficiency.value,
        epsilon = 1e-12
    );
}

#[test]
fn result_serializes_in_si_base_units() {
    let result = solve(&CycleInputs::default()).unwrap();
    let value = serde_json::to_value(result).unwrap();

    assert_eq!(value["states"]["s1"]["pressure"], 172_200.0);
    assert_eq!(value["states"]["s3"]["temperature"], 300.0);
    assert_eq!(value["heat_high"], 100_000.0);
    assert_eq!(value["entropy"]["low"], 0.0);
}
