//! JSON reporter: the whole record, camelCase field names.

use siterisk_core::errors::ReportError;

use super::Reporter;
use crate::synthesis::SiteRiskAnalysis;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, analysis: &SiteRiskAnalysis) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(analysis)?)
    }
}
