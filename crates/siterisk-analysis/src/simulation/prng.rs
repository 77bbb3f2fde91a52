//! Deterministic 32-bit PRNG.
//!
//! The seed is an FNV-1a fold of the seed key over its UTF-16 code units; the
//! stream is a classic LCG (`a = 1664525`, `c = 1013904223`, `m = 2^32`).
//! There is no ambient entropy source: the same key always replays the same
//! stream.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-1a over UTF-16 code units, all arithmetic mod 2^32.
pub fn seed_from_key(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Advance `state` one step. Returns the new state and its uniform value in `[0, 1)`.
pub fn lcg_step(state: u32) -> (u32, f64) {
    let next = state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
    (next, f64::from(next) / TWO_POW_32)
}

/// LCG carrying explicit 32-bit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(seed_from_key(key))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let (state, u) = lcg_step(self.state);
        self.state = state;
        u
    }
}
