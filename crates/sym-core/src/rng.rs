//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle used by the randomised group algorithms.
///
/// The handle is a thin wrapper around `StdRng` that documents the seeding
/// policy used throughout the engine. A master `seed: u64` must be provided
/// by the caller. Substreams are derived by hashing `(master_seed,
/// substream_id)` with SipHash-1-3 configured with fixed zero keys. This
/// rule is stable across platforms; any test exercising a randomised
/// routine (Sylow search, chain sampling, simplicity probes) reproduces its
/// run by fixing the master seed.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for a named substream of a master seed.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Draws an index uniformly from `0..bound`. `bound` must be non-zero.
    pub fn index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // Modulo bias is irrelevant at the bounds this engine draws from
        // (transversal and orbit sizes, far below 2^32).
        (self.rng.next_u64() % bound as u64) as usize
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngHandle::from_seed(77);
        let mut b = RngHandle::from_seed(77);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn substreams_diverge() {
        let mut a = RngHandle::substream(77, 0);
        let mut b = RngHandle::substream(77, 1);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = RngHandle::from_seed(5);
        for bound in 1..64usize {
            for _ in 0..8 {
                assert!(rng.index(bound) < bound);
            }
        }
    }
}
