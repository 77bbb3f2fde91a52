//! Resolver output records.

use serde::{Deserialize, Serialize};
use siterisk_core::config::{ActionTemplate, DeltaRange, DuePhase, ImpactType, Owner};
use siterisk_core::types::{Priority, Severity};

/// A priced risk item derived from one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDriver {
    /// `driver-{signal_id}`
    pub id: String,
    pub signal_id: String,
    pub label: String,
    pub severity: Severity,
    pub cost_category: String,
    pub impact_type: ImpactType,
    pub cost_delta_pct: DeltaRange,
    pub schedule_delta_days: DeltaRange,
    pub rationale: String,
}

/// A responsible-party task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmAction {
    /// `action-{signal_id}`, or `action-baseline` for the fallback action.
    pub id: String,
    /// `None` only for the fallback action.
    pub related_signal_id: Option<String>,
    pub title: String,
    pub owner: Owner,
    pub due_phase: DuePhase,
    pub lead_time_days: u32,
    pub priority: Priority,
}

impl PmAction {
    pub fn from_template(signal_id: &str, template: &ActionTemplate, priority: Priority) -> Self {
        Self {
            id: format!("action-{signal_id}"),
            related_signal_id: Some(signal_id.to_string()),
            title: template.title.clone(),
            owner: template.owner,
            due_phase: template.due_phase,
            lead_time_days: template.lead_time_days,
            priority,
        }
    }

    /// Substituted when no signal earns an action.
    pub fn baseline() -> Self {
        Self {
            id: "action-baseline".to_string(),
            related_signal_id: None,
            title: "Proceed with standard preconstruction validation".to_string(),
            owner: Owner::ProjectManager,
            due_phase: DuePhase::Bid,
            lead_time_days: 3,
            priority: Priority::Low,
        }
    }
}

/// The contingency band chosen for an aggregate risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingencyRecommendation {
    pub min_pct: f64,
    pub max_pct: f64,
    pub basis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceAssessment {
    /// In `[35, 100]`.
    pub confidence_score: u32,
    /// In `[0, 100]`.
    pub data_completeness_pct: u32,
}
