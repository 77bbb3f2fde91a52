//! Signals: normalized, severity-tagged facts about a site.
//!
//! Upstream payloads are loosely shaped. Only `id` is mandatory; every other
//! field falls back to a default so a partial record still participates in
//! scoring instead of failing the whole document.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::Severity;
use crate::constants::{DEFAULT_SIGNAL_VALUE, MISSING_VALUE_SENTINELS};
use crate::errors::SignalError;

/// A single site-risk observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub label: String,
    /// Display string. Missing values read as "Not available".
    #[serde(default = "default_value", deserialize_with = "value_or_sentinel")]
    pub value: String,
    #[serde(default, deserialize_with = "severity_or_unknown")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "string_or_default")]
    pub explanation: String,
}

impl Signal {
    pub fn new(id: impl Into<String>, severity: Severity) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            value: DEFAULT_SIGNAL_VALUE.to_string(),
            severity,
            explanation: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// False when the value is one of the missing-data sentinels.
    pub fn is_known(&self) -> bool {
        !MISSING_VALUE_SENTINELS.contains(&self.value.as_str())
    }
}

/// Envelope handed over by the signal-derivation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDocument {
    #[serde(default)]
    pub signals: Vec<Signal>,
    /// Retrieval warnings raised while gathering the underlying facts.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl SignalDocument {
    pub fn from_json_str(json: &str) -> Result<Self, SignalError> {
        serde_json::from_str(json).map_err(|e| SignalError::ParseError {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, SignalError> {
        let content = std::fs::read_to_string(path).map_err(|e| SignalError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| SignalError::ParseError {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn default_value() -> String {
    DEFAULT_SIGNAL_VALUE.to_string()
}

fn string_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn value_or_sentinel<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(default_value))
}

fn severity_or_unknown<'de, D: Deserializer<'de>>(d: D) -> Result<Severity, D::Error> {
    Ok(Option::<Severity>::deserialize(d)?.unwrap_or_default())
}
