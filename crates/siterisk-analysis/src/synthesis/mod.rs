//! Synthesis: run every resolver and the estimator, assemble one record.

pub mod engine;
pub mod types;

pub use engine::SynthesisEngine;
pub use types::{AnalysisRequest, SiteRiskAnalysis};
