//! pw-fluids: working-fluid catalog for pumpwise.
//!
//! A fixed table of liquids at reference conditions, each carrying the two
//! transport properties the calculators need: density for the power chain
//! and kinematic viscosity for the Reynolds number. Selection is by
//! canonical id, display name, or alias, and anything outside the table is
//! an explicit error.

pub mod catalog;
pub mod error;

pub use catalog::{Fluid, FluidSpecies, catalog, lookup, properties};
pub use error::{FluidError, FluidResult};
