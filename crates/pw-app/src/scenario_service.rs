//! Scenario loading, saving, validation, and introspection.

use std::path::Path;

use pw_scenario::{HeadSpec, Scenario};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub name: String,
    pub fluid: String,
    /// True when the total head is operator-supplied rather than assembled
    /// from piping losses.
    pub manual_head: bool,
    pub has_sweep: bool,
}

/// Load and validate a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario = pw_scenario::from_yaml_str(&content)?;
    tracing::debug!(name = %scenario.name, fluid = %scenario.fluid, "scenario loaded");
    Ok(scenario)
}

/// Save a scenario to a YAML file.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    pw_scenario::validate_scenario(scenario)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let content = serde_yaml_string(scenario)?;

    std::fs::write(path, content).map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn serde_yaml_string(scenario: &Scenario) -> AppResult<String> {
    pw_scenario::to_yaml_string(scenario)
        .map_err(|e| AppError::Scenario(format!("Failed to serialize scenario: {}", e)))
}

/// Validate a scenario without evaluating it.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    pw_scenario::validate_scenario(scenario).map_err(|e| AppError::Validation(e.to_string()))
}

/// Summarize a scenario for listing front-ends.
pub fn scenario_summary(scenario: &Scenario) -> ScenarioSummary {
    let (manual_head, has_sweep) = match &scenario.head {
        HeadSpec::Manual { .. } => (true, false),
        HeadSpec::FromPiping { sweep, .. } => (false, sweep.is_some()),
    };
    ScenarioSummary {
        name: scenario.name.clone(),
        fluid: scenario.fluid.clone(),
        manual_head,
        has_sweep,
    }
}
