//! Explicit pseudo-random sources.
//!
//! Nothing in the library touches a process-wide generator. Components
//! that need randomness own a source built here: entropy-seeded for
//! production, seeded for reproducible runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default generator type. ChaCha8 streams are identical across
/// platforms for a given seed.
pub type DefaultRng = ChaCha8Rng;

/// Entropy-seeded generator.
pub fn entropy_rng() -> DefaultRng {
    ChaCha8Rng::from_entropy()
}

/// Deterministic generator for a seed.
pub fn seeded_rng(seed: u64) -> DefaultRng {
    ChaCha8Rng::seed_from_u64(seed)
}
