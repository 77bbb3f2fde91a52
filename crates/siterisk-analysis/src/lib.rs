//! Synthesis engine for site-risk decision packages.
//!
//! Signals flow through five independent resolvers (cost drivers, PM actions,
//! contingency, bid assumptions, confidence). Cost drivers then feed a seeded
//! Monte Carlo estimator, and everything is assembled into one
//! [`SiteRiskAnalysis`] record.

pub mod reporters;
pub mod resolvers;
pub mod simulation;
pub mod synthesis;

pub use synthesis::{AnalysisRequest, SiteRiskAnalysis, SynthesisEngine};
