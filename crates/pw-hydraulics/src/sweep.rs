//! Cost-vs-diameter sweep for pipe sizing sensitivity.

use pw_fluids::Fluid;

use crate::energy::{EnergyInput, compute_energy_cost};
use crate::head_loss::{HydraulicInput, compute_head_loss};

/// Candidate diameter range (mm), stepped inclusively from `min_mm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub min_mm: f64,
    pub max_mm: f64,
    pub step_mm: f64,
}

impl SweepRange {
    /// A range is usable when min < max and the step is positive.
    /// Unusable ranges sample to an empty series, not an error.
    pub fn is_usable(&self) -> bool {
        self.min_mm < self.max_mm && self.step_mm > 0.0
    }

    /// Sampled diameters: `min, min+step, …`, stopping at the first value
    /// at or beyond `max`. A step that does not divide the span evenly
    /// overshoots `max` rather than dropping the endpoint.
    pub fn diameters(&self) -> Vec<f64> {
        if !self.is_usable() {
            return Vec::new();
        }
        let stop = self.max_mm + self.step_mm;
        let count = ((stop - self.min_mm) / self.step_mm).ceil() as usize;
        (0..count)
            .map(|i| self.min_mm + i as f64 * self.step_mm)
            .collect()
    }
}

/// Parameters held fixed across the sweep. Each sampled diameter reuses
/// this geometry and duty; its total head is the static head plus that
/// diameter's computed losses.
#[derive(Debug, Clone, Copy)]
pub struct SweepContext {
    pub flow_m3_per_h: f64,
    /// Elevation head the losses are added onto (m).
    pub static_head_m: f64,
    pub length_m: f64,
    pub roughness_mm: f64,
    pub k_total: f64,
    /// Fractional efficiencies, as the energy calculator takes them.
    pub pump_efficiency: f64,
    pub motor_efficiency: f64,
    pub hours_per_day: f64,
    pub tariff_per_kwh: f64,
    pub fluid: &'static Fluid,
}

/// One sample of the cost-vs-diameter curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub diameter_mm: f64,
    pub annual_cost: f64,
}

/// Sample the annual energy cost across the diameter range, ascending.
pub fn sweep_diameter_cost(range: SweepRange, ctx: &SweepContext) -> Vec<SweepPoint> {
    range
        .diameters()
        .into_iter()
        .map(|diameter_mm| {
            let losses = compute_head_loss(&HydraulicInput {
                flow_m3_per_h: ctx.flow_m3_per_h,
                diameter_mm,
                length_m: ctx.length_m,
                roughness_mm: ctx.roughness_mm,
                k_total: ctx.k_total,
                fluid: ctx.fluid,
            });
            let total_head_m = ctx.static_head_m + losses.major_loss_m + losses.minor_loss_m;
            let energy = compute_energy_cost(&EnergyInput {
                flow_m3_per_h: ctx.flow_m3_per_h,
                total_head_m,
                pump_efficiency: ctx.pump_efficiency,
                motor_efficiency: ctx.motor_efficiency,
                hours_per_day: ctx.hours_per_day,
                tariff_per_kwh: ctx.tariff_per_kwh,
                fluid: ctx.fluid,
            });
            SweepPoint {
                diameter_mm,
                annual_cost: energy.annual_cost,
            }
        })
        .collect()
}
