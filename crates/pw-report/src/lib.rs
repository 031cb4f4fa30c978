//! pw-report: structured report data for external renderers.
//!
//! Assembles the input echo, formatted results, suggestion list, and
//! optional sweep series into one serializable payload. Rendering (PDF,
//! HTML, charts) is out of scope; renderers consume the JSON.

pub mod format;
pub mod types;
pub mod writer;

pub use format::{CURRENCY, InputEcho, build_report};
pub use types::{AnalysisReport, LabeledValue, SweepSeriesPoint};
pub use writer::{sweep_series_csv, write_report_json, write_sweep_csv};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
