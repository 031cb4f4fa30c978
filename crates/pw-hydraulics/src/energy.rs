//! Pumping power chain and energy cost.

use pw_core::units::{DAYS_PER_MONTH, G_MPS2, MONTHS_PER_YEAR, m3h_to_m3s, w_to_kw};
use pw_fluids::Fluid;

/// Inputs for one energy-cost evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EnergyInput {
    pub flow_m3_per_h: f64,
    /// Total manometric head the pump must overcome (m).
    pub total_head_m: f64,
    /// Pump efficiency as a fraction. Non-positive values zero the shaft
    /// power instead of dividing by zero.
    pub pump_efficiency: f64,
    /// Motor efficiency as a fraction, same convention.
    pub motor_efficiency: f64,
    pub hours_per_day: f64,
    pub tariff_per_kwh: f64,
    pub fluid: &'static Fluid,
}

/// Power and cost figures for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyResult {
    pub electrical_power_kw: f64,
    /// Energy drawn over the fixed 30-day billing month (kWh).
    pub monthly_consumption_kwh: f64,
    /// Twelve billing months at the given tariff.
    pub annual_cost: f64,
}

/// Derive electrical power and energy cost from the duty point.
///
/// Hydraulic power is ρ·g·Q·H, lifted to shaft power by the pump
/// efficiency and to electrical power by the motor efficiency. The 30-day
/// month and 12-month year are fixed parts of the cost model.
pub fn compute_energy_cost(input: &EnergyInput) -> EnergyResult {
    let flow_m3_per_s = m3h_to_m3s(input.flow_m3_per_h);
    let hydraulic_power_w =
        flow_m3_per_s * input.fluid.density_kg_per_m3 * G_MPS2 * input.total_head_m;

    let shaft_power_w = if input.pump_efficiency > 0.0 {
        hydraulic_power_w / input.pump_efficiency
    } else {
        0.0
    };
    let electrical_power_w = if input.motor_efficiency > 0.0 {
        shaft_power_w / input.motor_efficiency
    } else {
        0.0
    };

    let electrical_power_kw = w_to_kw(electrical_power_w);
    let monthly_consumption_kwh = electrical_power_kw * input.hours_per_day * DAYS_PER_MONTH;
    let annual_cost = monthly_consumption_kwh * input.tariff_per_kwh * MONTHS_PER_YEAR;

    EnergyResult {
        electrical_power_kw,
        monthly_consumption_kwh,
        annual_cost,
    }
}
