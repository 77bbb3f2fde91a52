//! Action resolver: elevated signals × action library → PM actions.

use std::cmp::Reverse;

use siterisk_core::config::Rulebook;
use siterisk_core::types::{Priority, Signal};

use super::types::PmAction;

pub struct ActionResolver<'a> {
    rulebook: &'a Rulebook,
}

impl<'a> ActionResolver<'a> {
    pub fn new(rulebook: &'a Rulebook) -> Self {
        Self { rulebook }
    }

    /// Actions for high and medium signals that have a template, in signal
    /// order, then stably sorted by descending priority. Never empty: the
    /// baseline action stands in when nothing qualifies.
    pub fn resolve(&self, signals: &[Signal]) -> Vec<PmAction> {
        let mut actions: Vec<PmAction> = signals
            .iter()
            .filter_map(|signal| {
                let priority = Priority::for_severity(signal.severity)?;
                match self.rulebook.action_template(&signal.id) {
                    Some(template) => Some(PmAction::from_template(&signal.id, template, priority)),
                    None => {
                        tracing::debug!(signal_id = %signal.id, "no action template");
                        None
                    }
                }
            })
            .collect();

        if actions.is_empty() {
            actions.push(PmAction::baseline());
        }

        actions.sort_by_key(|a| Reverse(a.priority.rank()));
        actions
    }
}
