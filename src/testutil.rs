use std::hash::{DefaultHasher, Hash, Hasher};

use num::BigInt;
use num::traits::Zero;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::Spire;

/// Build `Σ 2^b` over the given distinct bit positions through the public
/// arithmetic, so tests never touch the representation directly.
pub fn from_bits(bits: &[u64]) -> Spire {
    bits.iter().map(|&bit| Spire::from(bit).exp2()).sum()
}

/// The same value as a `BigInt`, for model-based checks.
pub fn bits_to_bigint(bits: &[u64]) -> BigInt {
    let mut out = BigInt::zero();
    for &bit in bits {
        out.set_bit(bit, true);
    }
    out
}

pub fn hash_of(value: &Spire) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub struct WordGen {
    rng: StdRng,
}

impl WordGen {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn word(&mut self) -> u64 {
        self.rng.random()
    }
}
