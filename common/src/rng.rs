//! Shared pseudo-random source for all generators.
//!
//! Visual variety is the only requirement, so a small non-cryptographic
//! generator is enough. The source is seeded once at start-up and handed to
//! the generators as `&mut impl RandomSource`; there is never more than one
//! user at a time.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source used by the generators.
pub trait RandomSource {
    /// Return an integer uniformly distributed in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// `bound` must be non-zero.
    fn next_uint(
        &mut self,
        bound: u32,
    ) -> u32;

    /// Fair coin flip.
    #[inline]
    fn coin_flip(&mut self) -> bool { self.next_uint(2) == 1 }
}

/// [`RandomSource`] backed by `rand`'s `SmallRng`.
pub struct SeededRng {
    inner: SmallRng,
}

impl SeededRng {
    /// Create a source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        log::debug!("seeding random engine with {seed}");
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    #[inline]
    fn next_uint(
        &mut self,
        bound: u32,
    ) -> u32 {
        assert!(bound > 0, "next_uint bound must be non-zero");
        self.inner.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_uint_within_bound() {
        let mut rng = SeededRng::from_seed(7);
        for bound in 1..50 {
            for _ in 0..100 {
                assert!(rng.next_uint(bound) < bound);
            }
        }
    }

    #[test]
    fn test_bound_one_is_always_zero() {
        let mut rng = SeededRng::from_seed(1);
        for _ in 0..100 {
            assert_eq!(rng.next_uint(1), 0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::from_seed(42);
        let mut b = SeededRng::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_uint(1000), b.next_uint(1000));
        }
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = SeededRng::from_seed(99);
        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();
        assert!((4_500..5_500).contains(&heads), "heads = {heads}");
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_bound_panics() {
        let mut rng = SeededRng::from_seed(0);
        rng.next_uint(0);
    }
}
