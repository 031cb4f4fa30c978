//! pw-advisor: operational suggestions for evaluated pumping systems.
//!
//! A small fixed rule set over the evaluated duty point: efficiency
//! thresholds, an annual-cost threshold, and a standing maintenance
//! reminder. Rules only read results; they never feed back into the
//! calculation.

pub mod rules;

pub use rules::{
    ANNUAL_COST_VFD_THRESHOLD, Advisory, MOTOR_EFFICIENCY_WARN, PUMP_EFFICIENCY_WARN, evaluate,
};
