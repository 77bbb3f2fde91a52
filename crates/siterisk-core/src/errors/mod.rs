//! Error handling for the synthesis engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod report_error;
pub mod signal_error;

pub use config_error::ConfigError;
pub use error_code::SiteRiskErrorCode;
pub use report_error::ReportError;
pub use signal_error::SignalError;
