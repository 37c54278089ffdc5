//! Report download extension point. Exporting is not implemented; the stub
//! only tells the caller so.

use serde::Serialize;

use crate::report::AnalysisReport;

pub const NOT_IMPLEMENTED_MESSAGE: &str =
    "Feature not implemented yet. Placeholder for future download feature.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    NotImplemented { message: String },
}

pub trait ReportExporter: Send + Sync {
    fn export(&self, report: Option<&AnalysisReport>) -> ExportOutcome;
}

/// The only exporter today.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderExporter;

impl ReportExporter for PlaceholderExporter {
    fn export(&self, _report: Option<&AnalysisReport>) -> ExportOutcome {
        ExportOutcome::NotImplemented {
            message: NOT_IMPLEMENTED_MESSAGE.to_string(),
        }
    }
}
