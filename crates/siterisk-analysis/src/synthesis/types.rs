//! Engine input and output records.

use serde::{Deserialize, Serialize};
use siterisk_core::config::BidAssumption;
use siterisk_core::types::{Signal, SignalDocument};

use crate::resolvers::{ContingencyRecommendation, CostDriver, PmAction};
use crate::simulation::ProbabilisticEstimate;

/// One site to analyse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Order matters: it is the action tie-break.
    pub signals: Vec<Signal>,
    /// Upstream retrieval warnings, counted by the confidence scorer.
    #[serde(default)]
    pub warning_count: usize,
    #[serde(default)]
    pub baseline_cost_usd: Option<f64>,
    /// Reproducibility key, typically the analysed address.
    #[serde(default)]
    pub seed_key: String,
    /// `None` or 0 selects 2000 trials.
    #[serde(default)]
    pub sample_size: Option<u32>,
}

impl AnalysisRequest {
    pub fn new(signals: Vec<Signal>, seed_key: impl Into<String>) -> Self {
        Self {
            signals,
            seed_key: seed_key.into(),
            ..Default::default()
        }
    }

    /// Build from an upstream signal document; its warnings become the count.
    pub fn from_document(document: SignalDocument, seed_key: impl Into<String>) -> Self {
        Self {
            warning_count: document.warnings.len(),
            ..Self::new(document.signals, seed_key)
        }
    }

    pub fn with_baseline_cost_usd(mut self, baseline: f64) -> Self {
        self.baseline_cost_usd = Some(baseline);
        self
    }

    pub fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    pub fn with_warning_count(mut self, warning_count: usize) -> Self {
        self.warning_count = warning_count;
        self
    }
}

/// The decision package for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRiskAnalysis {
    pub confidence_score: u32,
    pub data_completeness_pct: u32,
    pub contingency: ContingencyRecommendation,
    pub cost_drivers: Vec<CostDriver>,
    pub actions: Vec<PmAction>,
    pub bid_assumptions: Vec<BidAssumption>,
    pub probabilistic_estimate: ProbabilisticEstimate,
}
