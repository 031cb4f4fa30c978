//! Report data types.

use serde::{Deserialize, Serialize};

/// A formatted label/value pair echoed into the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One sample of the cost-vs-diameter series as embedded in reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepSeriesPoint {
    pub diameter_mm: f64,
    pub annual_cost: f64,
}

/// Everything an external renderer needs to typeset one analysis report.
///
/// This crate stops at structured data: page layout, pagination, and chart
/// drawing belong to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Local timestamp in `%Y%m%d-%H%M%S` form, also suitable for report
    /// file names.
    pub generated_at: String,
    pub scenario_name: String,
    pub inputs: Vec<LabeledValue>,
    pub results: Vec<LabeledValue>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Vec<SweepSeriesPoint>>,
}
