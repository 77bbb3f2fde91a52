//! Stable error codes for callers that cannot match on Rust enums.

/// Every error enum implements this to expose a structured code string.
pub trait SiteRiskErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SIGNAL_ERROR: &str = "SIGNAL_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
