use proptest::prelude::*;
use siterisk_analysis::resolvers::{ConfidenceScorer, CostDriver};
use siterisk_analysis::simulation::{sample_symmetric, Lcg32, MonteCarloSimulator};
use siterisk_core::config::{DeltaRange, ImpactType};
use siterisk_core::types::{Severity, Signal};

fn range_strategy() -> impl Strategy<Value = DeltaRange> {
    (-50.0f64..50.0, 0.0f64..40.0).prop_map(|(min, width)| DeltaRange::new(min, min + width))
}

fn driver_strategy() -> impl Strategy<Value = CostDriver> {
    ("[a-z]{1,8}", range_strategy(), range_strategy()).prop_map(|(id, pct, days)| CostDriver {
        id: format!("driver-{id}"),
        signal_id: id.clone(),
        label: id,
        severity: Severity::High,
        cost_category: "Site".to_string(),
        impact_type: ImpactType::Capex,
        cost_delta_pct: pct,
        schedule_delta_days: days,
        rationale: String::new(),
    })
}

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::High),
        Just(Severity::Medium),
        Just(Severity::Low),
        Just(Severity::Unknown),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn estimate_is_deterministic(
        drivers in prop::collection::vec(driver_strategy(), 0..5),
        key in ".{0,24}",
        n in 1u32..400,
        baseline in prop::option::of(0.0f64..1e8),
    ) {
        let sim = MonteCarloSimulator::new(n);
        let a = sim.estimate(&drivers, baseline, &key);
        let b = sim.estimate(&drivers, baseline, &key);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn percentiles_are_monotone(
        drivers in prop::collection::vec(driver_strategy(), 1..5),
        key in ".{0,24}",
        n in 1u32..400,
    ) {
        let est = MonteCarloSimulator::new(n).estimate(&drivers, Some(1e6), &key);
        prop_assert!(est.impact_pct.is_ordered(), "{:?}", est.impact_pct);
        prop_assert!(est.schedule_days.is_ordered(), "{:?}", est.schedule_days);
    }

    #[test]
    fn empty_drivers_are_zero(key in ".{0,24}", n in 1u32..400) {
        let est = MonteCarloSimulator::new(n).estimate(&[], None, &key);
        prop_assert_eq!(est.impact_pct.p10, 0.0);
        prop_assert_eq!(est.impact_pct.p90, 0.0);
        prop_assert_eq!(est.schedule_days.p50, 0.0);
    }

    #[test]
    fn samples_stay_within_range(range in range_strategy(), seed in any::<u32>()) {
        let mut rng = Lcg32::new(seed);
        for _ in 0..256 {
            let x = sample_symmetric(range, &mut rng);
            prop_assert!(x >= range.min && x <= range.max, "{} outside {:?}", x, range);
        }
    }

    #[test]
    fn confidence_in_range(
        severities in prop::collection::vec(severity_strategy(), 0..20),
        missing in prop::collection::vec(any::<bool>(), 20),
        warnings in 0usize..50,
    ) {
        let signals: Vec<Signal> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let value = if missing[i] { "Not available" } else { "observed" };
                Signal::new(format!("s{i}"), *s).with_value(value)
            })
            .collect();
        let c = ConfidenceScorer::score(&signals, warnings);
        prop_assert!((35..=100).contains(&c.confidence_score));
        prop_assert!(c.data_completeness_pct <= 100);
    }
}
