//! Synthesis engine.

use rayon::prelude::*;
use siterisk_core::config::Rulebook;
use siterisk_core::constants::DEFAULT_SAMPLE_SIZE;

use super::types::{AnalysisRequest, SiteRiskAnalysis};
use crate::resolvers::{
    ActionResolver, BidAssumptionResolver, ConfidenceScorer, ContingencyResolver,
    CostDriverResolver,
};
use crate::simulation::MonteCarloSimulator;

/// Borrows an immutable rulebook and holds no other state, so one engine can
/// serve any number of concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisEngine<'a> {
    rulebook: &'a Rulebook,
}

impl<'a> SynthesisEngine<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self { rulebook }
    }

    pub fn rulebook(&self) -> &'a Rulebook {
        self.rulebook
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> SiteRiskAnalysis {
        let signals = &request.signals;

        let cost_drivers = CostDriverResolver::new(self.rulebook).resolve(signals);
        let actions = ActionResolver::new(self.rulebook).resolve(signals);
        let contingency = ContingencyResolver::new(self.rulebook).resolve(signals);
        let bid_assumptions = BidAssumptionResolver::new(self.rulebook).resolve(signals);
        let confidence = ConfidenceScorer::score(signals, request.warning_count);

        let simulator = MonteCarloSimulator::new(request.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE));
        let probabilistic_estimate =
            simulator.estimate(&cost_drivers, request.baseline_cost_usd, &request.seed_key);

        tracing::info!(
            seed_key = %request.seed_key,
            signals = signals.len(),
            drivers = cost_drivers.len(),
            actions = actions.len(),
            confidence = confidence.confidence_score,
            "site risk analysis complete"
        );

        SiteRiskAnalysis {
            confidence_score: confidence.confidence_score,
            data_completeness_pct: confidence.data_completeness_pct,
            contingency,
            cost_drivers,
            actions,
            bid_assumptions,
            probabilistic_estimate,
        }
    }

    /// Analyse independent requests in parallel. Output order matches input
    /// order and each result equals the sequential `analyze` result.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<SiteRiskAnalysis> {
        requests.par_iter().map(|r| self.analyze(r)).collect()
    }
}
