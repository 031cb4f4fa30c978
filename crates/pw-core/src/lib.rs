//! pw-core: stable foundation for pumpwise.
//!
//! Contains:
//! - units (user-unit conversion constants + helpers)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PwError, PwResult};
pub use numeric::*;
pub use units::*;
