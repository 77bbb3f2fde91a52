//! Core types, rulebook schema, errors, config, tracing, and constants for the
//! site-risk synthesis engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{Rulebook, SiteRiskConfig};
pub use types::{Priority, Severity, Signal, SignalDocument};
