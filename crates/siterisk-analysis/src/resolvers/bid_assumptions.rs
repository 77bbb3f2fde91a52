//! Bid-assumption resolver: baseline qualifications plus triggered clauses.
//!
//! The trigger set is a fixed table of (signal id, severity) pairs. Adding a
//! clause means adding a row to `TRIGGERS` and a field to
//! `ConditionalBidAssumptions`.

use siterisk_core::config::{BidAssumption, ConditionalBidAssumptions, Rulebook};
use siterisk_core::constants::{FLOOD_ZONE_SIGNAL_ID, WILDFIRE_RISK_SIGNAL_ID};
use siterisk_core::types::{Severity, Signal};

struct BidTrigger {
    signal_id: &'static str,
    severity: Severity,
    clause: fn(&ConditionalBidAssumptions) -> &BidAssumption,
}

fn high_flood(c: &ConditionalBidAssumptions) -> &BidAssumption {
    &c.high_flood
}

fn high_fire(c: &ConditionalBidAssumptions) -> &BidAssumption {
    &c.high_fire
}

const TRIGGERS: &[BidTrigger] = &[
    BidTrigger {
        signal_id: FLOOD_ZONE_SIGNAL_ID,
        severity: Severity::High,
        clause: high_flood,
    },
    BidTrigger {
        signal_id: WILDFIRE_RISK_SIGNAL_ID,
        severity: Severity::High,
        clause: high_fire,
    },
];

pub struct BidAssumptionResolver<'a> {
    rulebook: &'a Rulebook,
}

impl<'a> BidAssumptionResolver<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self { rulebook }
    }

    pub fn resolve(&self, signals: &[Signal]) -> Vec<BidAssumption> {
        let mut assumptions = self.rulebook.baseline_bid_assumptions().to_vec();
        let conditional = self.rulebook.conditional_bid_assumptions();

        for trigger in TRIGGERS {
            let fired = signals
                .iter()
                .any(|s| s.id == trigger.signal_id && s.severity == trigger.severity);
            if fired {
                tracing::debug!(signal_id = trigger.signal_id, "conditional bid clause triggered");
                assumptions.push((trigger.clause)(conditional).clone());
            }
        }
        assumptions
    }
}
