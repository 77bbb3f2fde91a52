//! Tests for signals and severity ranking.

use siterisk_core::types::{rank, Priority, Severity, Signal, SignalDocument};

#[test]
fn test_rank_ladder() {
    assert_eq!(rank(Severity::High), 3);
    assert_eq!(rank(Severity::Medium), 2);
    assert_eq!(rank(Severity::Low), 1);
    assert_eq!(rank(Severity::Unknown), 0);
}

#[test]
fn test_priority_for_severity() {
    assert_eq!(Priority::for_severity(Severity::High), Some(Priority::High));
    assert_eq!(Priority::for_severity(Severity::Medium), Some(Priority::Medium));
    assert_eq!(Priority::for_severity(Severity::Low), None);
    assert_eq!(Priority::for_severity(Severity::Unknown), None);
}

#[test]
fn test_signal_defaults_on_missing_fields() {
    let doc = SignalDocument::from_json_str(r#"{"signals": [{"id": "flood-zone"}]}"#).unwrap();
    let signal = &doc.signals[0];
    assert_eq!(signal.severity, Severity::Unknown);
    assert_eq!(signal.value, "Not available");
    assert_eq!(signal.label, "");
    assert!(!signal.is_known());
    assert!(doc.warnings.is_empty());
}

#[test]
fn test_signal_tolerates_nulls_and_unknown_severity() {
    let json = r#"{
        "signals": [
            {"id": "a", "label": null, "value": null, "severity": null, "explanation": null},
            {"id": "b", "value": "AE", "severity": "catastrophic"},
            {"id": "c", "value": "Zone X", "severity": "low"}
        ],
        "warnings": ["soil service timed out"]
    }"#;
    let doc = SignalDocument::from_json_str(json).unwrap();
    assert_eq!(doc.signals[0].severity, Severity::Unknown);
    assert_eq!(doc.signals[0].value, "Not available");
    assert_eq!(doc.signals[1].severity, Severity::Unknown);
    assert!(doc.signals[1].is_known());
    assert_eq!(doc.signals[2].severity, Severity::Low);
    assert_eq!(doc.warnings.len(), 1);
}

#[test]
fn test_signal_requires_id() {
    let result = SignalDocument::from_json_str(r#"{"signals": [{"severity": "high"}]}"#);
    assert!(result.is_err());
}

#[test]
fn test_unknown_sentinel_is_not_known() {
    assert!(!Signal::new("x", Severity::Low).with_value("Unknown").is_known());
    assert!(Signal::new("x", Severity::Low).with_value("0.4 g").is_known());
}
