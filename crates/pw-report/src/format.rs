//! Report assembly: formatted input echo, result section, suggestions.

use pw_advisor::Advisory;
use pw_fluids::Fluid;
use pw_hydraulics::{EnergyResult, HydraulicResult, SweepPoint};

use crate::types::{AnalysisReport, LabeledValue, SweepSeriesPoint};

/// Currency symbol used in formatted cost values. Display-only; no value
/// carries a currency unit.
pub const CURRENCY: &str = "R$";

/// Scenario parameters echoed into the report's input section.
#[derive(Debug, Clone, Copy)]
pub struct InputEcho<'a> {
    pub fluid: &'a Fluid,
    pub flow_m3_per_h: f64,
    pub total_head_m: f64,
    pub pump_efficiency_pct: f64,
    pub motor_efficiency_pct: f64,
    pub hours_per_day: f64,
    pub tariff_per_kwh: f64,
    /// Pipe velocity when piping losses were computed. Echoed only when
    /// positive; a manual-head scenario has no velocity to show.
    pub velocity_m_per_s: f64,
}

/// Assemble the full report payload for one evaluated scenario.
pub fn build_report(
    generated_at: String,
    scenario_name: &str,
    echo: &InputEcho<'_>,
    hydraulics: Option<&HydraulicResult>,
    energy: &EnergyResult,
    advisories: &[Advisory],
    sweep: Option<&[SweepPoint]>,
) -> AnalysisReport {
    AnalysisReport {
        generated_at,
        scenario_name: scenario_name.to_string(),
        inputs: input_section(echo),
        results: result_section(hydraulics, energy, echo.tariff_per_kwh),
        suggestions: advisories
            .iter()
            .map(|advisory| advisory.message().to_string())
            .collect(),
        sweep: sweep.map(|points| {
            points
                .iter()
                .map(|point| SweepSeriesPoint {
                    diameter_mm: point.diameter_mm,
                    annual_cost: point.annual_cost,
                })
                .collect()
        }),
    }
}

fn input_section(echo: &InputEcho<'_>) -> Vec<LabeledValue> {
    let mut inputs = vec![
        LabeledValue::new("Fluid", echo.fluid.display_name),
        LabeledValue::new("Flow rate", format!("{} m³/h", echo.flow_m3_per_h)),
        LabeledValue::new("Total head", format!("{:.2} m", echo.total_head_m)),
        LabeledValue::new("Pump efficiency", format!("{}%", echo.pump_efficiency_pct)),
        LabeledValue::new("Motor efficiency", format!("{}%", echo.motor_efficiency_pct)),
        LabeledValue::new("Hours per day", format!("{} h", echo.hours_per_day)),
        LabeledValue::new(
            "Energy tariff",
            format!("{CURRENCY} {:.2}/kWh", echo.tariff_per_kwh),
        ),
    ];
    if echo.velocity_m_per_s > 0.0 {
        inputs.push(LabeledValue::new(
            "Pipe velocity",
            format!("{:.2} m/s", echo.velocity_m_per_s),
        ));
    }
    inputs
}

fn result_section(
    hydraulics: Option<&HydraulicResult>,
    energy: &EnergyResult,
    tariff_per_kwh: f64,
) -> Vec<LabeledValue> {
    let mut results = Vec::new();
    if let Some(losses) = hydraulics {
        results.push(LabeledValue::new(
            "Major head loss",
            format!("{:.2} m", losses.major_loss_m),
        ));
        results.push(LabeledValue::new(
            "Minor head loss",
            format!("{:.2} m", losses.minor_loss_m),
        ));
    }
    results.push(LabeledValue::new(
        "Electrical power",
        format!("{:.2} kW", energy.electrical_power_kw),
    ));
    // The monthly figure is priced at format time from consumption and
    // tariff; only the annual cost is carried as a result value.
    results.push(LabeledValue::new(
        "Monthly energy cost",
        format!(
            "{CURRENCY} {:.2}",
            energy.monthly_consumption_kwh * tariff_per_kwh
        ),
    ));
    results.push(LabeledValue::new(
        "Annual energy cost",
        format!("{CURRENCY} {:.2}", energy.annual_cost),
    ));
    results
}
