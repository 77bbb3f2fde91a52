//! Errors decoding an upstream signal document.

use super::error_code::{self, SiteRiskErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("Cannot read signal document {path}: {message}")]
    Io { path: String, message: String },

    #[error("Signal document parse error in {source_name}: {message}")]
    ParseError { source_name: String, message: String },
}

impl SiteRiskErrorCode for SignalError {
    fn error_code(&self) -> &'static str {
        error_code::SIGNAL_ERROR
    }
}
