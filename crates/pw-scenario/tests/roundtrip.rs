use pw_scenario::schema::*;
use pw_scenario::{ScenarioError, from_yaml_str, load_json, load_yaml, save_json, save_yaml};

#[test]
fn roundtrip_yaml_manual_head() {
    let scenario = Scenario::new("Manual Head", "water");

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pw_scenario_roundtrip_manual.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_yaml_piping_with_sweep() {
    let scenario = Scenario {
        head: HeadSpec::FromPiping {
            static_head_m: 15.0,
            length_m: 100.0,
            diameter_mm: 100.0,
            roughness_mm: 0.15,
            k_total: 5.0,
            sweep: Some(SweepRangeDef {
                min_mm: 50.0,
                max_mm: 300.0,
                step_mm: 25.0,
            }),
        },
        ..Scenario::new("Pumping Station", "water")
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pw_scenario_roundtrip_piping.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json() {
    let scenario = Scenario {
        flow_m3_per_h: 12.5,
        ..Scenario::new("Viscous Duty", "glycerin")
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pw_scenario_roundtrip.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_rejects_invalid_scenario() {
    let scenario = Scenario {
        flow_m3_per_h: -10.0,
        ..Scenario::new("Backwards Flow", "water")
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pw_scenario_never_written.yaml");
    let _ = std::fs::remove_file(&path);

    let result = save_yaml(&path, &scenario);
    assert!(matches!(result, Err(ScenarioError::Validation(_))));
    assert!(!path.exists(), "invalid scenario must not reach disk");
}

#[test]
fn parse_rejects_unknown_fluid() {
    let yaml = r#"
version: 1
name: bad fluid
fluid: mercury
flow_m3_per_h: 50.0
head:
  type: Manual
  total_head_m: 30.0
equipment:
  pump_efficiency_pct: 70.0
  motor_efficiency_pct: 90.0
operation:
  hours_per_day: 8.0
  tariff_per_kwh: 0.75
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
    assert!(err.to_string().contains("mercury"));
}

#[test]
fn parse_rejects_malformed_yaml() {
    let err = from_yaml_str("version: [not a scenario").unwrap_err();
    assert!(matches!(err, ScenarioError::Yaml(_)));
}
