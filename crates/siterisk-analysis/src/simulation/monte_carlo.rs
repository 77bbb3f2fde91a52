//! Monte Carlo simulation of summed driver impacts with P10/P50/P90 outputs.
//!
//! Results are a pure function of (drivers, baseline, seed key, sample size).

use siterisk_core::constants::DEFAULT_SAMPLE_SIZE;

use super::percentile::{percentile_nearest_rank, round2};
use super::prng::Lcg32;
use super::triangular::sample_symmetric;
use super::types::{PercentileTriple, ProbabilisticEstimate};
use crate::resolvers::CostDriver;

/// Reported with every estimate.
pub const METHODOLOGY: &str = "Monte Carlo simulation with a seeded linear congruential generator. \
Each trial draws one triangular sample per cost driver for cost percent and schedule days \
(mode at the range midpoint) and sums them independently. P10/P50/P90 use nearest-rank \
indexing on the sorted trial totals, rounded to 2 decimals. Dollar figures scale each \
cost-percent percentile by the baseline cost; they approximate, and are not drawn from, \
a per-trial dollar simulation.";

/// Monte Carlo estimator for cost-percent and schedule-day impact.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloSimulator {
    /// Number of trials.
    sample_size: u32,
}

/// Sorted per-trial totals for both dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialTotals {
    pub cost_pct: Vec<f64>,
    pub schedule_days: Vec<f64>,
}

impl MonteCarloSimulator {
    /// Zero trials falls back to the default of 2000.
    pub fn new(sample_size: u32) -> Self {
        if sample_size == 0 {
            tracing::warn!(default = DEFAULT_SAMPLE_SIZE, "sample_size 0 requested, using default");
            return Self::default();
        }
        Self { sample_size }
    }

    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Run every trial and return ascending totals.
    ///
    /// Per trial and per driver, the cost draw precedes the schedule draw.
    /// An empty driver list yields all-zero totals.
    pub fn simulate_totals(&self, drivers: &[CostDriver], seed_key: &str) -> TrialTotals {
        let n = self.sample_size as usize;
        let mut rng = Lcg32::from_key(seed_key);
        let mut cost_pct = Vec::with_capacity(n);
        let mut schedule_days = Vec::with_capacity(n);

        for _ in 0..n {
            let mut cost_total = 0.0;
            let mut days_total = 0.0;
            for driver in drivers {
                cost_total += sample_symmetric(driver.cost_delta_pct, &mut rng);
                days_total += sample_symmetric(driver.schedule_delta_days, &mut rng);
            }
            cost_pct.push(cost_total);
            schedule_days.push(days_total);
        }

        cost_pct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        schedule_days.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        TrialTotals {
            cost_pct,
            schedule_days,
        }
    }

    /// Simulate and summarise. Dollar figures are produced only for a
    /// positive, finite baseline.
    pub fn estimate(
        &self,
        drivers: &[CostDriver],
        baseline_cost_usd: Option<f64>,
        seed_key: &str,
    ) -> ProbabilisticEstimate {
        let totals = self.simulate_totals(drivers, seed_key);
        let impact_pct = summarise(&totals.cost_pct);
        let schedule_days = summarise(&totals.schedule_days);

        let impact_cost_usd = baseline_cost_usd
            .filter(|b| b.is_finite() && *b > 0.0)
            .map(|baseline| impact_pct.map(|pct| round2(pct / 100.0 * baseline)));

        tracing::debug!(
            drivers = drivers.len(),
            sample_size = self.sample_size,
            p50_pct = impact_pct.p50,
            p50_days = schedule_days.p50,
            "monte carlo estimate complete"
        );

        ProbabilisticEstimate {
            baseline_cost_usd,
            impact_pct,
            schedule_days,
            impact_cost_usd,
            methodology: METHODOLOGY.to_string(),
            sample_size: self.sample_size,
        }
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

fn summarise(sorted: &[f64]) -> PercentileTriple {
    PercentileTriple {
        p10: round2(percentile_nearest_rank(sorted, 10.0)),
        p50: round2(percentile_nearest_rank(sorted, 50.0)),
        p90: round2(percentile_nearest_rank(sorted, 90.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siterisk_core::config::{DeltaRange, ImpactType};
    use siterisk_core::types::Severity;

    fn driver(signal_id: &str, pct: (f64, f64), days: (f64, f64)) -> CostDriver {
        CostDriver {
            id: format!("driver-{signal_id}"),
            signal_id: signal_id.to_string(),
            label: signal_id.to_string(),
            severity: Severity::High,
            cost_category: "Site".to_string(),
            impact_type: ImpactType::Capex,
            cost_delta_pct: DeltaRange::new(pct.0, pct.1),
            schedule_delta_days: DeltaRange::new(days.0, days.1),
            rationale: String::new(),
        }
    }

    #[test]
    fn test_reference_flood_estimate() {
        let sim = MonteCarloSimulator::default();
        let drivers = [driver("flood-zone", (5.0, 12.0), (10.0, 25.0))];
        let est = sim.estimate(&drivers, Some(1_000_000.0), "123 Main St");

        assert_eq!(est.impact_pct, PercentileTriple { p10: 6.61, p50: 8.54, p90: 10.38 });
        assert_eq!(est.schedule_days, PercentileTriple { p10: 13.37, p50: 17.57, p90: 21.7 });
        assert_eq!(
            est.impact_cost_usd,
            Some(PercentileTriple { p10: 66_100.0, p50: 85_400.0, p90: 103_800.0 })
        );
        assert_eq!(est.sample_size, 2000);
    }

    #[test]
    fn test_single_trial_reference() {
        let sim = MonteCarloSimulator::new(1);
        let drivers = [driver("x", (0.0, 10.0), (0.0, 0.0))];
        let est = sim.estimate(&drivers, None, "a");
        assert_eq!(est.impact_pct, PercentileTriple { p10: 6.02, p50: 6.02, p90: 6.02 });
        assert_eq!(est.schedule_days, PercentileTriple::default());
        assert!(est.impact_cost_usd.is_none());
    }

    #[test]
    fn test_empty_drivers_all_zero() {
        let est = MonteCarloSimulator::new(500).estimate(&[], Some(2_000_000.0), "anywhere");
        assert_eq!(est.impact_pct, PercentileTriple::default());
        assert_eq!(est.schedule_days, PercentileTriple::default());
        assert_eq!(est.impact_cost_usd, Some(PercentileTriple::default()));
    }

    #[test]
    fn test_deterministic_with_seed_key() {
        let drivers = [
            driver("flood-zone", (5.0, 12.0), (10.0, 25.0)),
            driver("site-slope", (1.0, 2.5), (3.0, 8.0)),
        ];
        let a = MonteCarloSimulator::new(1000).estimate(&drivers, Some(5e6), "12 Elm St");
        let b = MonteCarloSimulator::new(1000).estimate(&drivers, Some(5e6), "12 Elm St");
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_positive_baseline_skips_dollars() {
        let drivers = [driver("x", (1.0, 2.0), (1.0, 2.0))];
        let sim = MonteCarloSimulator::new(100);
        assert!(sim.estimate(&drivers, Some(0.0), "k").impact_cost_usd.is_none());
        assert!(sim.estimate(&drivers, Some(-5.0), "k").impact_cost_usd.is_none());
        assert!(sim.estimate(&drivers, Some(f64::NAN), "k").impact_cost_usd.is_none());
    }

    #[test]
    fn test_zero_sample_size_uses_default() {
        assert_eq!(MonteCarloSimulator::new(0).sample_size(), DEFAULT_SAMPLE_SIZE);
    }
}
