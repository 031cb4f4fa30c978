//! Writers for report JSON and sweep series CSV.

use std::path::Path;

use crate::ReportResult;
use crate::types::{AnalysisReport, SweepSeriesPoint};

pub fn write_report_json(path: &Path, report: &AnalysisReport) -> ReportResult<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Render the sweep series as CSV with a `diameter_mm,annual_cost` header.
pub fn sweep_series_csv(points: &[SweepSeriesPoint]) -> String {
    let mut csv = String::from("diameter_mm,annual_cost\n");
    for point in points {
        csv.push_str(&format!("{},{}\n", point.diameter_mm, point.annual_cost));
    }
    csv
}

pub fn write_sweep_csv(path: &Path, points: &[SweepSeriesPoint]) -> ReportResult<()> {
    std::fs::write(path, sweep_series_csv(points))?;
    Ok(())
}
