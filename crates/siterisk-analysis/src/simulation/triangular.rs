//! Triangular distribution sampling by CDF inversion.

use siterisk_core::config::DeltaRange;

use super::prng::Lcg32;

/// Inverse CDF of Triangular(min, mode, max) at `u`.
///
/// Degenerate ranges (`max <= min`) return `min`.
pub fn triangular_inverse(min: f64, mode: f64, max: f64, u: f64) -> f64 {
    if max <= min {
        return min;
    }
    let width = max - min;
    let split = (mode - min) / width;
    if u < split {
        min + (u * width * (mode - min)).sqrt()
    } else {
        max - ((1.0 - u) * width * (max - mode)).sqrt()
    }
}

/// One draw with the mode at the range midpoint.
///
/// Degenerate ranges return `min` without consuming a value from `rng`.
pub fn sample_symmetric(range: DeltaRange, rng: &mut Lcg32) -> f64 {
    if range.max <= range.min {
        return range.min;
    }
    let mode = (range.min + range.max) / 2.0;
    triangular_inverse(range.min, mode, range.max, rng.next_unit())
}
