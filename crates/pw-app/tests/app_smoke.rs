//! Smoke test for pw-app service layer.

use std::path::PathBuf;
use pw_app::{evaluate_scenario, load_scenario, scenario_summary, validate_scenario};

#[test]
fn test_load_demo_scenario() {
    let mut scenario_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    scenario_path.pop(); // go to crates
    scenario_path.pop(); // go to repo root
    scenario_path.push("demos");
    scenario_path.push("pumping_station.yaml");

    if !scenario_path.exists() {
        eprintln!(
            "Skipping test: demo scenario not found at {:?}",
            scenario_path
        );
        return;
    }

    let scenario = load_scenario(&scenario_path).expect("Failed to load scenario");
    validate_scenario(&scenario).expect("Validation should succeed");

    let summary = scenario_summary(&scenario);
    assert!(!summary.name.is_empty());
    assert!(!summary.manual_head, "Demo scenario computes head from piping");
    assert!(summary.has_sweep, "Demo scenario configures a sweep");

    let evaluation = evaluate_scenario(&scenario).expect("Evaluation should succeed");
    assert!(evaluation.total_head_m > 0.0);
    assert!(evaluation.energy.electrical_power_kw > 0.0);
    assert!(!evaluation.advisories.is_empty());

    println!("Scenario: {} ({})", summary.name, summary.fluid);
    println!(
        " Head: {:.2} m, Power: {:.2} kW",
        evaluation.total_head_m, evaluation.energy.electrical_power_kw
    );
}
