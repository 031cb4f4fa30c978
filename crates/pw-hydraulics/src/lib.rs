//! pw-hydraulics: head-loss and pumping-energy calculations for pumpwise.
//!
//! Contains:
//! - friction (flow regime + Darcy friction factor)
//! - head_loss (Darcy-Weisbach major losses + K-factor minor losses)
//! - energy (hydraulic → shaft → electrical power chain with cost)
//! - sweep (cost-vs-diameter sampling for sizing charts)
//!
//! Every function here is pure: no state between evaluations, and the
//! documented degenerate inputs (undefined diameter, unusable viscosity,
//! non-positive efficiency) produce zero-valued results instead of errors.

pub mod energy;
pub mod friction;
pub mod head_loss;
pub mod sweep;

pub use energy::{EnergyInput, EnergyResult, compute_energy_cost};
pub use friction::{FlowRegime, TURBULENT_REYNOLDS, friction_factor, reynolds_number};
pub use head_loss::{HydraulicInput, HydraulicResult, compute_head_loss};
pub use sweep::{SweepContext, SweepPoint, SweepRange, sweep_diameter_cost};
