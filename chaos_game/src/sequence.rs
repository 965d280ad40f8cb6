//! Per-level gesture sequences drawn from an injected random source.

use crate::gesture::Gesture;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ════════════════════════════════════════════════════════════════════════════
// SequenceGenerator
// ════════════════════════════════════════════════════════════════════════════

/// Draws the gesture sequence for each level from an owned seedable RNG.
///
/// Level `n` gets `n + 1` gestures, uniform with replacement: repeats are
/// allowed and no adjacency rule is applied. Seed the generator explicitly
/// for reproducible rounds, or from OS entropy for normal play.
pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    /// Seed from OS entropy (normal play).
    pub fn from_entropy() -> Self {
        SequenceGenerator { rng: StdRng::from_entropy() }
    }

    /// Fixed seed: the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        SequenceGenerator { rng: StdRng::seed_from_u64(seed) }
    }

    /// `level + 1` uniform draws from the five-gesture set.
    pub fn generate(&mut self, level: u8) -> Vec<Gesture> {
        (0..=level)
            .map(|_| Gesture::ALL[self.rng.gen_range(0..Gesture::ALL.len())])
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
