//! Rule resolver: signals × cost rules → priced cost drivers.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;
use siterisk_core::config::Rulebook;
use siterisk_core::types::Signal;

use super::types::CostDriver;

pub struct CostDriverResolver<'a> {
    rulebook: &'a Rulebook,
}

impl<'a> CostDriverResolver<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self { rulebook }
    }

    /// One driver per rule whose signal is present with a rated severity.
    ///
    /// Output is sorted by descending severity rank. Equal ranks keep rulebook
    /// order (the sort is stable), not signal order.
    pub fn resolve(&self, signals: &[Signal]) -> Vec<CostDriver> {
        // First occurrence wins when upstream repeats an id.
        let mut by_id: FxHashMap<&str, &Signal> = FxHashMap::default();
        for signal in signals {
            by_id.entry(signal.id.as_str()).or_insert(signal);
        }

        let mut drivers: Vec<CostDriver> = self
            .rulebook
            .cost_rules()
            .iter()
            .filter_map(|rule| {
                let Some(signal) = by_id.get(rule.signal_id.as_str()) else {
                    tracing::debug!(signal_id = %rule.signal_id, "no signal for cost rule");
                    return None;
                };
                let Some(delta) = rule.deltas.for_severity(signal.severity) else {
                    tracing::debug!(signal_id = %rule.signal_id, "signal severity unknown, rule skipped");
                    return None;
                };
                Some(CostDriver {
                    id: format!("driver-{}", rule.signal_id),
                    signal_id: rule.signal_id.clone(),
                    label: signal.label.clone(),
                    severity: signal.severity,
                    cost_category: rule.cost_category.clone(),
                    impact_type: rule.impact_type,
                    cost_delta_pct: delta.pct,
                    schedule_delta_days: delta.days,
                    rationale: rule.rationale.clone(),
                })
            })
            .collect();

        drivers.sort_by_key(|d| Reverse(d.severity.rank()));
        drivers
    }
}
