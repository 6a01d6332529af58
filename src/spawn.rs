//! Injectable randomness for spawning.
//!
//! All probabilistic branching (spawn gates, jitter, initial velocity) draws
//! from a [`RandomSource`] so tests can supply deterministic sequences.
//! Production code uses [`EntropySource`], backed by `rand`'s `SmallRng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random floats in `[0, 1)`.
///
/// Implementors only supply [`next_f32`](RandomSource::next_f32); range
/// helpers are derived from it so stubbed sources stay trivial.
pub trait RandomSource {
    /// Uniform random float in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Uniform random float in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform random index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        // next_f32 < 1.0 keeps the product below len; min guards float
        // rounding at the top of the range.
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    /// Bernoulli draw: true with probability `chance`.
    fn chance(&mut self, chance: f32) -> bool {
        self.next_f32() < chance
    }
}

/// Default random source, seeded from system entropy.
pub struct EntropySource {
    rng: SmallRng,
}

impl EntropySource {
    /// Create a source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_f32(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Deterministic source that replays a fixed sequence, cycling at the end.
///
/// Intended for tests and replays. An empty sequence yields 0.0 forever.
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Source replaying `values` in order, wrapping around.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source returning the same value on every draw.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_source_in_unit_range() {
        let mut source = EntropySource::seeded(7);
        for _ in 0..1000 {
            let v = source.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut source = EntropySource::seeded(42);
        for _ in 0..1000 {
            let v = source.range(-4.0, -1.0);
            assert!(v >= -4.0 && v < -1.0);
        }
    }

    #[test]
    fn test_index_never_out_of_bounds() {
        let mut high = SequenceSource::constant(0.999_999);
        assert_eq!(high.index(5), 4);

        let mut low = SequenceSource::constant(0.0);
        assert_eq!(low.index(5), 0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceSource::new(vec![0.1, 0.2]);
        assert_eq!(source.next_f32(), 0.1);
        assert_eq!(source.next_f32(), 0.2);
        assert_eq!(source.next_f32(), 0.1);
    }

    #[test]
    fn test_chance() {
        let mut source = SequenceSource::constant(0.29);
        assert!(source.chance(0.3));
        assert!(!source.chance(0.29));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = EntropySource::seeded(123);
        let mut b = EntropySource::seeded(123);
        for _ in 0..10 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }
}
