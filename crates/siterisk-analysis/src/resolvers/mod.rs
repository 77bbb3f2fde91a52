//! Resolvers: map signals onto priced drivers, actions, reserves and
//! qualifications.
//!
//! Every resolver is a pure function of the signal list and the immutable
//! [`Rulebook`](siterisk_core::Rulebook). A signal with no matching rule,
//! template or trigger is omitted from that resolver's output; misses are
//! never errors.

pub mod actions;
pub mod bid_assumptions;
pub mod confidence;
pub mod contingency;
pub mod cost_drivers;
pub mod types;

pub use actions::ActionResolver;
pub use bid_assumptions::BidAssumptionResolver;
pub use confidence::ConfidenceScorer;
pub use contingency::ContingencyResolver;
pub use cost_drivers::CostDriverResolver;
pub use types::*;
