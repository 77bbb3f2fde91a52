//! Confidence scorer: data completeness and upstream warnings → 0-100 score.

use siterisk_core::constants::{
    AVAILABILITY_PENALTY_FACTOR, CONFIDENCE_FLOOR, MAX_WARNING_PENALTY,
    WARNING_PENALTY_PER_WARNING,
};
use siterisk_core::types::Signal;

use super::types::ConfidenceAssessment;

pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Percentage of signals whose value is not a missing-data sentinel.
    /// An empty signal list has no known data and scores 0.
    pub fn completeness_pct(signals: &[Signal]) -> u32 {
        if signals.is_empty() {
            return 0;
        }
        let known = signals.iter().filter(|s| s.is_known()).count();
        (100.0 * known as f64 / signals.len() as f64).round() as u32
    }

    /// Never below 35, even with every fact missing and every warning raised.
    pub fn score(signals: &[Signal], warning_count: usize) -> ConfidenceAssessment {
        let completeness = Self::completeness_pct(signals);

        let warnings = u32::try_from(warning_count).unwrap_or(u32::MAX);
        let warning_penalty = warnings
            .saturating_mul(WARNING_PENALTY_PER_WARNING)
            .min(MAX_WARNING_PENALTY);
        let availability_penalty =
            100u32.saturating_sub(completeness) as f64 * AVAILABILITY_PENALTY_FACTOR;

        let raw = (100.0 - warning_penalty as f64 - availability_penalty).round();
        let confidence_score = raw.max(CONFIDENCE_FLOOR as f64) as u32;

        ConfidenceAssessment {
            confidence_score,
            data_completeness_pct: completeness,
        }
    }
}
