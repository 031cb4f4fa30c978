//! Darcy-Weisbach head loss for a straight pipe run with fittings.

use std::f64::consts::PI;

use pw_core::units::{G_MPS2, m3h_to_m3s, mm_to_m};
use pw_fluids::Fluid;

use crate::friction::{friction_factor, reynolds_number};

/// Inputs for one head-loss evaluation, in the units front-ends collect
/// them (m³/h, mm, m).
#[derive(Debug, Clone, Copy)]
pub struct HydraulicInput {
    pub flow_m3_per_h: f64,
    /// Inner pipe diameter (mm). Non-positive marks the geometry as
    /// undefined and short-circuits to the all-zero result.
    pub diameter_mm: f64,
    pub length_m: f64,
    /// Absolute surface roughness (mm).
    pub roughness_mm: f64,
    /// Sum of fitting loss coefficients (K factors) along the line.
    pub k_total: f64,
    pub fluid: &'static Fluid,
}

/// Loss breakdown for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicResult {
    /// Friction loss along the pipe length (m of fluid column).
    pub major_loss_m: f64,
    /// Fitting loss from the summed K factors (m of fluid column).
    pub minor_loss_m: f64,
    /// Mean flow velocity in the pipe (m/s).
    pub velocity_m_per_s: f64,
}

impl HydraulicResult {
    /// The undefined-geometry result. Callers read zeros as "not
    /// computed", never as a failure.
    pub const ZERO: Self = Self {
        major_loss_m: 0.0,
        minor_loss_m: 0.0,
        velocity_m_per_s: 0.0,
    };
}

/// Compute friction and fitting head losses.
///
/// Returns [`HydraulicResult::ZERO`] when `diameter_mm <= 0`. Other
/// out-of-range inputs are the scenario layer's job to reject; fed in
/// directly they produce the arithmetic they imply.
pub fn compute_head_loss(input: &HydraulicInput) -> HydraulicResult {
    if input.diameter_mm <= 0.0 {
        return HydraulicResult::ZERO;
    }

    let flow_m3_per_s = m3h_to_m3s(input.flow_m3_per_h);
    let diameter_m = mm_to_m(input.diameter_mm);
    let roughness_m = mm_to_m(input.roughness_mm);

    let area_m2 = PI * diameter_m.powi(2) / 4.0;
    let velocity_m_per_s = flow_m3_per_s / area_m2;
    let reynolds = reynolds_number(
        velocity_m_per_s,
        diameter_m,
        input.fluid.kinematic_viscosity_m2_per_s,
    );
    let f = friction_factor(reynolds, roughness_m, diameter_m);

    let velocity_head_m = velocity_m_per_s.powi(2) / (2.0 * G_MPS2);
    let major_loss_m = f * (input.length_m / diameter_m) * velocity_head_m;
    let minor_loss_m = input.k_total * velocity_head_m;

    HydraulicResult {
        major_loss_m,
        minor_loss_m,
        velocity_m_per_s,
    }
}
