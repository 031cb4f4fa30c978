//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// Schema version written by this crate.
pub const SCHEMA_VERSION: u32 = 1;

/// One pumping-system analysis scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    /// Catalog key of the working fluid: canonical id, display name, or
    /// alias.
    pub fluid: String,
    pub flow_m3_per_h: f64,
    pub head: HeadSpec,
    pub equipment: EquipmentDef,
    pub operation: OperationDef,
}

impl Scenario {
    /// Starting point for building scenarios in code and tests.
    pub fn new(name: impl Into<String>, fluid: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            name: name.into(),
            fluid: fluid.into(),
            flow_m3_per_h: 50.0,
            head: HeadSpec::Manual { total_head_m: 30.0 },
            equipment: EquipmentDef {
                pump_efficiency_pct: 70.0,
                motor_efficiency_pct: 90.0,
            },
            operation: OperationDef {
                hours_per_day: 8.0,
                tariff_per_kwh: 0.75,
            },
        }
    }
}

/// How the total manometric head is obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum HeadSpec {
    /// Operator-supplied total head.
    Manual { total_head_m: f64 },
    /// Static lift plus computed piping losses.
    FromPiping {
        static_head_m: f64,
        length_m: f64,
        diameter_mm: f64,
        roughness_mm: f64,
        /// Sum of fitting loss coefficients along the line.
        k_total: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sweep: Option<SweepRangeDef>,
    },
}

/// Pump and motor efficiencies in percent, the way operators quote them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EquipmentDef {
    pub pump_efficiency_pct: f64,
    pub motor_efficiency_pct: f64,
}

/// Duty cycle and energy tariff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OperationDef {
    pub hours_per_day: f64,
    pub tariff_per_kwh: f64,
}

/// Candidate diameter range for the cost-sensitivity chart (mm).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepRangeDef {
    pub min_mm: f64,
    pub max_mm: f64,
    pub step_mm: f64,
}
