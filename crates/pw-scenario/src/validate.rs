//! Scenario validation logic.

use crate::schema::{HeadSpec, SCHEMA_VERSION, Scenario};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    UnknownFluid(#[from] pw_fluids::FluidError),

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check a scenario before it reaches the calculators.
///
/// The piping diameter is deliberately left unconstrained: a non-positive
/// diameter is the documented way to skip loss computation, and the
/// hydraulics layer handles it.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    pw_fluids::lookup(&scenario.fluid)?;

    validate_positive_finite("flow_m3_per_h", scenario.flow_m3_per_h)?;
    validate_percentage(
        "equipment.pump_efficiency_pct",
        scenario.equipment.pump_efficiency_pct,
    )?;
    validate_percentage(
        "equipment.motor_efficiency_pct",
        scenario.equipment.motor_efficiency_pct,
    )?;
    validate_hours("operation.hours_per_day", scenario.operation.hours_per_day)?;
    validate_non_negative_finite("operation.tariff_per_kwh", scenario.operation.tariff_per_kwh)?;

    match &scenario.head {
        HeadSpec::Manual { total_head_m } => {
            validate_positive_finite("head.total_head_m", *total_head_m)?;
        }
        HeadSpec::FromPiping {
            static_head_m,
            length_m,
            diameter_mm,
            roughness_mm,
            k_total,
            sweep: _,
        } => {
            validate_non_negative_finite("head.static_head_m", *static_head_m)?;
            validate_non_negative_finite("head.length_m", *length_m)?;
            validate_finite("head.diameter_mm", *diameter_mm)?;
            validate_non_negative_finite("head.roughness_mm", *roughness_mm)?;
            validate_non_negative_finite("head.k_total", *k_total)?;
        }
    }

    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    pw_core::ensure_finite(value, "scenario field")
        .map_err(|_| invalid(field, value, "must be finite"))?;
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn validate_non_negative_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, value, "must be non-negative"));
    }
    Ok(())
}

fn validate_percentage(field: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 || value > 100.0 {
        return Err(invalid(field, value, "must be in (0, 100]"));
    }
    Ok(())
}

fn validate_hours(field: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 || value > 24.0 {
        return Err(invalid(field, value, "must be in (0, 24]"));
    }
    Ok(())
}
