//! End-to-end engine tests against the built-in rulebook.

use siterisk_analysis::resolvers::PmAction;
use siterisk_analysis::simulation::PercentileTriple;
use siterisk_analysis::{AnalysisRequest, SynthesisEngine};
use siterisk_core::config::{BidAssumptionType, Rulebook};
use siterisk_core::types::{Priority, Severity, Signal, SignalDocument};

fn flood_high() -> Signal {
    Signal::new("flood-zone", Severity::High)
        .with_label("FEMA Flood Zone")
        .with_value("AE")
}

#[test]
fn test_single_high_flood_package() {
    let rulebook = Rulebook::builtin().unwrap();
    let engine = SynthesisEngine::new(&rulebook);
    let request = AnalysisRequest::new(vec![flood_high()], "123 Main St")
        .with_baseline_cost_usd(1_000_000.0);

    let analysis = engine.analyze(&request);

    assert_eq!(analysis.cost_drivers.len(), 1);
    let driver = &analysis.cost_drivers[0];
    assert_eq!(driver.signal_id, "flood-zone");
    assert_eq!((driver.cost_delta_pct.min, driver.cost_delta_pct.max), (5.0, 12.0));
    assert_eq!(
        (driver.schedule_delta_days.min, driver.schedule_delta_days.max),
        (10.0, 25.0)
    );

    assert_eq!(analysis.actions.len(), 1);
    assert_eq!(analysis.actions[0].related_signal_id.as_deref(), Some("flood-zone"));
    assert_eq!(analysis.actions[0].priority, Priority::High);

    assert_eq!(analysis.bid_assumptions.len(), 4);
    let last = analysis.bid_assumptions.last().unwrap();
    assert_eq!(last.title, "Flood hazard qualification");
    assert_eq!(last.kind, BidAssumptionType::Exclusion);

    // Aggregate score 3 sits in the lowest band.
    assert_eq!((analysis.contingency.min_pct, analysis.contingency.max_pct), (3.0, 5.0));

    assert_eq!(analysis.confidence_score, 100);
    assert_eq!(analysis.data_completeness_pct, 100);

    let est = &analysis.probabilistic_estimate;
    assert_eq!(est.sample_size, 2000);
    assert_eq!(est.impact_pct, PercentileTriple { p10: 6.61, p50: 8.54, p90: 10.38 });
    assert_eq!(est.schedule_days, PercentileTriple { p10: 13.37, p50: 17.57, p90: 21.7 });
    assert_eq!(
        est.impact_cost_usd,
        Some(PercentileTriple { p10: 66_100.0, p50: 85_400.0, p90: 103_800.0 })
    );
}

#[test]
fn test_no_elevated_signals_yields_baseline_action_only() {
    let rulebook = Rulebook::builtin().unwrap();
    let engine = SynthesisEngine::new(&rulebook);
    let signals = vec![
        Signal::new("flood-zone", Severity::Low).with_value("X"),
        Signal::new("seismic-design", Severity::Unknown),
    ];
    let analysis = engine.analyze(&AnalysisRequest::new(signals, "quiet lot"));

    assert_eq!(analysis.actions, vec![PmAction::baseline()]);
    assert_eq!(analysis.bid_assumptions, rulebook.baseline_bid_assumptions());
    // The low flood signal still prices a driver.
    assert_eq!(analysis.cost_drivers.len(), 1);
    assert_eq!(analysis.cost_drivers[0].severity, Severity::Low);
}

#[test]
fn test_empty_request() {
    let rulebook = Rulebook::builtin().unwrap();
    let analysis = SynthesisEngine::new(&rulebook).analyze(&AnalysisRequest::default());

    assert!(analysis.cost_drivers.is_empty());
    assert_eq!(analysis.actions, vec![PmAction::baseline()]);
    assert_eq!(analysis.confidence_score, 60);
    assert_eq!(analysis.data_completeness_pct, 0);
    assert_eq!(analysis.probabilistic_estimate.impact_pct, PercentileTriple::default());
    assert_eq!(analysis.probabilistic_estimate.impact_cost_usd, None);
}

#[test]
fn test_sample_size_override_and_zero_default() {
    let rulebook = Rulebook::builtin().unwrap();
    let engine = SynthesisEngine::new(&rulebook);

    let small = engine.analyze(&AnalysisRequest::new(vec![flood_high()], "k").with_sample_size(10));
    assert_eq!(small.probabilistic_estimate.sample_size, 10);

    let zero = engine.analyze(&AnalysisRequest::new(vec![flood_high()], "k").with_sample_size(0));
    assert_eq!(zero.probabilistic_estimate.sample_size, 2000);
}

#[test]
fn test_analysis_is_reproducible() {
    let rulebook = Rulebook::builtin().unwrap();
    let engine = SynthesisEngine::new(&rulebook);
    let request = AnalysisRequest::new(
        vec![
            flood_high(),
            Signal::new("wildfire-risk", Severity::Medium).with_value("Moderate"),
            Signal::new("soil-conditions", Severity::High).with_value("Expansive clay"),
        ],
        "44 Ridge Rd",
    )
    .with_baseline_cost_usd(3_200_000.0)
    .with_warning_count(2);

    assert_eq!(engine.analyze(&request), engine.analyze(&request));
}

#[test]
fn test_batch_matches_sequential() {
    let rulebook = Rulebook::builtin().unwrap();
    let engine = SynthesisEngine::new(&rulebook);
    let requests: Vec<AnalysisRequest> = (0..8)
        .map(|i| {
            let severity = match i % 3 {
                0 => Severity::High,
                1 => Severity::Medium,
                _ => Severity::Low,
            };
            AnalysisRequest::new(
                vec![
                    Signal::new("flood-zone", severity).with_value("AE"),
                    Signal::new("site-slope", Severity::Medium).with_value("12%"),
                ],
                format!("{i} Batch Ln"),
            )
            .with_sample_size(250)
            .with_baseline_cost_usd(1_000_000.0 + i as f64)
        })
        .collect();

    let batch = engine.analyze_batch(&requests);
    let sequential: Vec<_> = requests.iter().map(|r| engine.analyze(r)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_request_from_document_counts_warnings() {
    let json = r#"{
        "signals": [
            {"id": "flood-zone", "label": "FEMA Flood Zone", "value": "AE", "severity": "high"},
            {"id": "frost-depth", "value": null, "severity": "critical"}
        ],
        "warnings": ["flood service timed out", "elevation unavailable"]
    }"#;
    let document = SignalDocument::from_json_str(json).unwrap();
    let request = AnalysisRequest::from_document(document, "9 Elm St");
    assert_eq!(request.warning_count, 2);
    assert_eq!(request.signals[1].severity, Severity::Unknown);

    let rulebook = Rulebook::builtin().unwrap();
    let analysis = SynthesisEngine::new(&rulebook).analyze(&request);
    // 1 of 2 known -> 50%; 12 warning points + 20 availability points.
    assert_eq!(analysis.data_completeness_pct, 50);
    assert_eq!(analysis.confidence_score, 68);
    assert_eq!(analysis.cost_drivers.len(), 1);
}
