//! Shared application service layer for pumpwise.
//!
//! This crate provides a unified interface for front-ends, centralizing
//! scenario management, evaluation, and report assembly.

pub mod analysis_service;
pub mod error;
pub mod report_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use analysis_service::{ScenarioEvaluation, evaluate_scenario};
pub use error::{AppError, AppResult};
pub use report_service::{build_scenario_report, export_report, export_sweep_csv, sweep_points};
pub use scenario_service::{
    ScenarioSummary, load_scenario, save_scenario, scenario_summary, validate_scenario,
};
