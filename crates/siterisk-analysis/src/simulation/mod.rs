//! Simulation engine: seeded Monte Carlo cost/schedule impact estimation.
//!
//! Independent triangular draws per cost driver are summed per trial and
//! summarised as P10/P50/P90 by nearest-rank percentiles.

pub mod monte_carlo;
pub mod percentile;
pub mod prng;
pub mod triangular;
pub mod types;

pub use monte_carlo::MonteCarloSimulator;
pub use percentile::{percentile_nearest_rank, round2};
pub use prng::{seed_from_key, Lcg32};
pub use triangular::{sample_symmetric, triangular_inverse};
pub use types::*;
