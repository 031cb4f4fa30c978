//! Scenario evaluation: head assembly, energy cost, advisories, sweep.

use pw_advisor::Advisory;
use pw_fluids::Fluid;
use pw_hydraulics::{
    EnergyInput, EnergyResult, HydraulicInput, HydraulicResult, SweepContext, SweepPoint,
    SweepRange, compute_energy_cost, compute_head_loss, sweep_diameter_cost,
};
use pw_scenario::{HeadSpec, Scenario};

use crate::error::AppResult;

/// Complete outcome of evaluating one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioEvaluation {
    pub fluid: &'static Fluid,
    /// Total manometric head the energy figures are based on (m).
    pub total_head_m: f64,
    /// Loss breakdown, present when the head was assembled from piping.
    pub hydraulics: Option<HydraulicResult>,
    pub energy: EnergyResult,
    pub advisories: Vec<Advisory>,
    /// Cost-vs-diameter series: present when the scenario configures a
    /// sweep, empty when the configured range is unusable.
    pub sweep: Option<Vec<SweepPoint>>,
}

/// Evaluate a scenario end to end.
///
/// Resolves the fluid, assembles the total head (manual value, or static
/// head plus computed losses), derives power and cost from fractional
/// efficiencies, runs the advisory rules, and samples the sweep when one
/// is configured.
pub fn evaluate_scenario(scenario: &Scenario) -> AppResult<ScenarioEvaluation> {
    let fluid = pw_fluids::lookup(&scenario.fluid)?;

    // Percent from the file, fractions from here on.
    let pump_efficiency = scenario.equipment.pump_efficiency_pct / 100.0;
    let motor_efficiency = scenario.equipment.motor_efficiency_pct / 100.0;

    let mut hydraulics = None;
    let mut sweep = None;

    let total_head_m = match scenario.head {
        HeadSpec::Manual { total_head_m } => total_head_m,
        HeadSpec::FromPiping {
            static_head_m,
            length_m,
            diameter_mm,
            roughness_mm,
            k_total,
            sweep: sweep_range,
        } => {
            let losses = compute_head_loss(&HydraulicInput {
                flow_m3_per_h: scenario.flow_m3_per_h,
                diameter_mm,
                length_m,
                roughness_mm,
                k_total,
                fluid,
            });

            if let Some(range) = sweep_range {
                let series = sweep_diameter_cost(
                    SweepRange {
                        min_mm: range.min_mm,
                        max_mm: range.max_mm,
                        step_mm: range.step_mm,
                    },
                    &SweepContext {
                        flow_m3_per_h: scenario.flow_m3_per_h,
                        static_head_m,
                        length_m,
                        roughness_mm,
                        k_total,
                        pump_efficiency,
                        motor_efficiency,
                        hours_per_day: scenario.operation.hours_per_day,
                        tariff_per_kwh: scenario.operation.tariff_per_kwh,
                        fluid,
                    },
                );
                if series.is_empty() {
                    tracing::warn!(
                        min_mm = range.min_mm,
                        max_mm = range.max_mm,
                        step_mm = range.step_mm,
                        "sweep range produced no samples"
                    );
                }
                sweep = Some(series);
            }

            let total = static_head_m + losses.major_loss_m + losses.minor_loss_m;
            hydraulics = Some(losses);
            total
        }
    };

    let energy = compute_energy_cost(&EnergyInput {
        flow_m3_per_h: scenario.flow_m3_per_h,
        total_head_m,
        pump_efficiency,
        motor_efficiency,
        hours_per_day: scenario.operation.hours_per_day,
        tariff_per_kwh: scenario.operation.tariff_per_kwh,
        fluid,
    });

    let advisories = pw_advisor::evaluate(pump_efficiency, motor_efficiency, energy.annual_cost);

    tracing::debug!(
        total_head_m,
        electrical_power_kw = energy.electrical_power_kw,
        annual_cost = energy.annual_cost,
        "scenario evaluated"
    );

    Ok(ScenarioEvaluation {
        fluid,
        total_head_m,
        hydraulics,
        energy,
        advisories,
        sweep,
    })
}
