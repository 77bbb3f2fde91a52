//! Configuration for the synthesis engine.
//!
//! Two layers: the [`Rulebook`] (rule table, action library, contingency
//! ladder, bid assumptions) and the engine settings in [`SiteRiskConfig`],
//! which resolve CLI > env > project > user > defaults.

pub mod rulebook;
pub mod rulebook_config;
pub mod simulation_config;
pub mod siterisk_config;

pub use rulebook::{
    ActionTemplate, BidAssumption, BidAssumptionType, ConditionalBidAssumptions,
    ContingencyBand, CostRule, DeltaRange, DuePhase, ImpactType, Owner, Rulebook,
    SeverityDelta, SeverityDeltas,
};
pub use rulebook_config::RulebookConfig;
pub use simulation_config::SimulationConfig;
pub use siterisk_config::{CliOverrides, SiteRiskConfig};
