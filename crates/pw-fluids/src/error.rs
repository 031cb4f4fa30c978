//! Fluid catalog errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Name outside the fixed catalog. The analysis layers constrain
    /// selection to the known set, so this surfaces a configuration or
    /// scenario-file mistake.
    #[error("Unknown fluid '{name}'")]
    UnknownFluid { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownFluid {
            name: "mercury".into(),
        };
        assert!(err.to_string().contains("mercury"));
    }
}
