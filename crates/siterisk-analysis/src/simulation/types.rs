//! Simulation output types.

use serde::{Deserialize, Serialize};

/// P10/P50/P90 summary of a simulated distribution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentileTriple {
    /// 10th percentile (optimistic).
    pub p10: f64,
    /// 50th percentile (median).
    pub p50: f64,
    /// 90th percentile (pessimistic).
    pub p90: f64,
}

impl PercentileTriple {
    /// Validate the ordering invariant: p10 <= p50 <= p90.
    pub fn is_ordered(&self) -> bool {
        self.p10 <= self.p50 && self.p50 <= self.p90
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            p10: f(self.p10),
            p50: f(self.p50),
            p90: f(self.p90),
        }
    }
}

/// Probabilistic cost and schedule impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilisticEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_cost_usd: Option<f64>,
    /// Summed cost-percent delta across drivers.
    pub impact_pct: PercentileTriple,
    /// Summed schedule-day delta across drivers.
    pub schedule_days: PercentileTriple,
    /// `impact_pct` scaled by a positive baseline. Not a per-trial simulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_cost_usd: Option<PercentileTriple>,
    pub methodology: String,
    pub sample_size: u32,
}
