//! Error types for the pw-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front-ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Unknown fluid: {0}")]
    UnknownFluid(String),

    #[error("Report error: {0}")]
    Report(String),
}

/// Result type for pw-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pw_scenario::ScenarioError> for AppError {
    fn from(err: pw_scenario::ScenarioError) -> Self {
        match err {
            pw_scenario::ScenarioError::Validation(inner) => AppError::Validation(inner.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<pw_fluids::FluidError> for AppError {
    fn from(err: pw_fluids::FluidError) -> Self {
        match err {
            pw_fluids::FluidError::UnknownFluid { name } => AppError::UnknownFluid(name),
        }
    }
}

impl From<pw_report::ReportError> for AppError {
    fn from(err: pw_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
