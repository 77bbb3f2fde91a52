//! Severity and priority ladders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative severity attached to a signal by the upstream derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// The three severities a rule can price.
    pub const RATED: [Severity; 3] = [Self::High, Self::Medium, Self::Low];

    /// Ordinal weight: high=3, medium=2, low=1, unknown=0.
    pub fn rank(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unknown => 0,
        }
    }

    /// True for high, medium and low.
    pub fn is_rated(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a rated severity key. `unknown` and anything else yield `None`.
    pub fn parse_rated(key: &str) -> Option<Self> {
        match key {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`Severity::rank`], used as a sort key.
pub fn rank(severity: Severity) -> u32 {
    severity.rank()
}

/// Priority of a PM action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Priority an elevated signal earns. Low and unknown signals earn none.
    pub fn for_severity(severity: Severity) -> Option<Self> {
        match severity {
            Severity::High => Some(Self::High),
            Severity::Medium => Some(Self::Medium),
            Severity::Low | Severity::Unknown => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
