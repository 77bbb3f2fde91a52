//! Reporters: output formats for an analysis record.

pub mod csv;
pub mod json;

use siterisk_core::errors::ReportError;

use crate::synthesis::SiteRiskAnalysis;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, analysis: &SiteRiskAnalysis) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "csv" => Some(Box::new(csv::CsvReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "csv"]
}
