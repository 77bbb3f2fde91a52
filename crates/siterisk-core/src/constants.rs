//! Shared constants for the site-risk synthesis engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Monte Carlo trial count.
pub const DEFAULT_SAMPLE_SIZE: u32 = 2000;

/// Signal values that mark a fact as unavailable for completeness scoring.
pub const MISSING_VALUE_SENTINELS: &[&str] = &["Not available", "Unknown"];

/// Value assigned to a signal whose upstream payload omitted `value`.
pub const DEFAULT_SIGNAL_VALUE: &str = "Not available";

/// Confidence penalty per upstream warning.
pub const WARNING_PENALTY_PER_WARNING: u32 = 6;

/// Cap on the total warning penalty.
pub const MAX_WARNING_PENALTY: u32 = 30;

/// Confidence penalty per missing percentage point of data completeness.
pub const AVAILABILITY_PENALTY_FACTOR: f64 = 0.4;

/// Lowest confidence score the scorer will report.
pub const CONFIDENCE_FLOOR: u32 = 35;

/// Signal id that triggers the high-flood bid clause.
pub const FLOOD_ZONE_SIGNAL_ID: &str = "flood-zone";

/// Signal id that triggers the high-fire bid clause.
pub const WILDFIRE_RISK_SIGNAL_ID: &str = "wildfire-risk";

/// Project-level engine settings file name.
pub const PROJECT_CONFIG_FILE: &str = "siterisk.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "SITERISK_LOG";
