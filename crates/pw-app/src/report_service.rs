//! Report assembly and export for evaluated scenarios.

use std::path::Path;

use pw_report::{AnalysisReport, InputEcho, SweepSeriesPoint, build_report, write_report_json};
use pw_scenario::Scenario;

use crate::analysis_service::ScenarioEvaluation;
use crate::error::AppResult;

/// Assemble the report payload for a completed evaluation, stamped with
/// the local time.
pub fn build_scenario_report(scenario: &Scenario, evaluation: &ScenarioEvaluation) -> AnalysisReport {
    let velocity_m_per_s = evaluation
        .hydraulics
        .map(|losses| losses.velocity_m_per_s)
        .unwrap_or(0.0);

    let echo = InputEcho {
        fluid: evaluation.fluid,
        flow_m3_per_h: scenario.flow_m3_per_h,
        total_head_m: evaluation.total_head_m,
        pump_efficiency_pct: scenario.equipment.pump_efficiency_pct,
        motor_efficiency_pct: scenario.equipment.motor_efficiency_pct,
        hours_per_day: scenario.operation.hours_per_day,
        tariff_per_kwh: scenario.operation.tariff_per_kwh,
        velocity_m_per_s,
    };

    let generated_at = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();

    build_report(
        generated_at,
        &scenario.name,
        &echo,
        evaluation.hydraulics.as_ref(),
        &evaluation.energy,
        &evaluation.advisories,
        evaluation.sweep.as_deref(),
    )
}

/// Write the report JSON for an evaluation.
pub fn export_report(
    path: &Path,
    scenario: &Scenario,
    evaluation: &ScenarioEvaluation,
) -> AppResult<()> {
    let report = build_scenario_report(scenario, evaluation);
    write_report_json(path, &report)?;
    tracing::info!(path = %path.display(), "report data written");
    Ok(())
}

/// Sweep series of an evaluation in report form. Empty when the scenario
/// configured no sweep or the range was unusable.
pub fn sweep_points(evaluation: &ScenarioEvaluation) -> Vec<SweepSeriesPoint> {
    evaluation
        .sweep
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|point| SweepSeriesPoint {
            diameter_mm: point.diameter_mm,
            annual_cost: point.annual_cost,
        })
        .collect()
}

/// Write the sweep series CSV for an evaluation. Returns the number of
/// samples written.
pub fn export_sweep_csv(path: &Path, evaluation: &ScenarioEvaluation) -> AppResult<usize> {
    let points = sweep_points(evaluation);
    pw_report::write_sweep_csv(path, &points)?;
    Ok(points.len())
}
