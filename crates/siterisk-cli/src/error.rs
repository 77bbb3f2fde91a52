use siterisk_core::errors::error_code;
use siterisk_core::errors::{ConfigError, ReportError, SignalError, SiteRiskErrorCode};

/// Everything that can end a CLI run early.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}

impl SiteRiskErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Signal(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
