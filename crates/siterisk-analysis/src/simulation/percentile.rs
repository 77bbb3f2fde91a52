//! Nearest-rank percentile extraction.
//!
//! `index = clamp(floor(p / 100 * n), 0, n - 1)` on an ascending slice. No
//! interpolation between neighbours, so small trial counts produce visibly
//! stepped percentiles.

/// `p`-th percentile of an ascending slice. Empty slices yield 0.
pub fn percentile_nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let n = sorted.len();
    let rank = (p / 100.0 * n as f64).floor();
    let idx = if rank <= 0.0 { 0 } else { (rank as usize).min(n - 1) };
    sorted[idx]
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
