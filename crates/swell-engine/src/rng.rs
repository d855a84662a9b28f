//! Deterministic RNG using PCG32.
//!
//! A render draws all of its randomness from a single generator, in a fixed
//! order: target jitter, initial voice pitches, then the per-sample wander
//! steps. The engine functions accept any [`rand::Rng`], so tests can inject
//! their own generator.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}
