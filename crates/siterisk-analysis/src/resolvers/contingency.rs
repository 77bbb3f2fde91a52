//! Contingency resolver: aggregate risk score → reserve band.

use std::cmp::Reverse;

use siterisk_core::config::{ContingencyBand, Rulebook};
use siterisk_core::types::Signal;

use super::types::ContingencyRecommendation;

pub struct ContingencyResolver<'a> {
    rulebook: &'a Rulebook,
}

impl<'a> ContingencyResolver<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self { rulebook }
    }

    /// Sum of severity ranks over every signal, matched by a rule or not.
    pub fn aggregate_score(signals: &[Signal]) -> u32 {
        signals.iter().map(|s| s.severity.rank()).sum()
    }

    pub fn resolve(&self, signals: &[Signal]) -> ContingencyRecommendation {
        let score = Self::aggregate_score(signals);
        let band = self.select_band(score);
        tracing::debug!(score, min_score = band.min_score, "contingency band selected");
        ContingencyRecommendation {
            min_pct: band.min_pct,
            max_pct: band.max_pct,
            basis: band.basis.clone(),
        }
    }

    /// Highest band whose `min_score` the score reaches; the lowest band when
    /// none qualifies. Bands sharing a `min_score` resolve in rulebook order.
    pub fn select_band(&self, score: u32) -> &'a ContingencyBand {
        let mut ladder: Vec<&'a ContingencyBand> = self.rulebook.contingency_bands().iter().collect();
        ladder.sort_by_key(|b| Reverse(b.min_score));

        // Rulebook validation guarantees at least one band.
        let lowest = ladder[ladder.len() - 1];
        ladder
            .into_iter()
            .find(|b| b.min_score <= score)
            .unwrap_or(lowest)
    }
}
