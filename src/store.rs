//! Ordered collection of live particles.
//!
//! The store owns every active [`Particle`]. Iteration order is insertion
//! order, which the renderer relies on for paint stacking (later spawns paint
//! on top); physics does not depend on order.

use glam::Vec2;

use crate::particle::{Particle, FLAME_PALETTE};
use crate::spawn::RandomSource;

/// Spawn jitter: half-extent of the box around the spawn origin, per axis.
pub const SPAWN_JITTER: f32 = 20.0;

/// Initial horizontal speed range, pixels per tick.
pub const SPAWN_VX: (f32, f32) = (-1.0, 1.0);

/// Initial vertical speed range, pixels per tick (negative = upward).
pub const SPAWN_VY: (f32, f32) = (-4.0, -1.0);

/// Initial size range.
pub const SPAWN_SIZE: (f32, f32) = (4.0, 12.0);

/// Per-tick life decrement range, fixed per particle at spawn.
pub const SPAWN_DECAY: (f32, f32) = (0.01, 0.03);

/// Ordered set of active particles with spawn and cull operations.
#[derive(Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` particles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    /// Spawn one particle near `origin` and append it to the store.
    ///
    /// Position is jittered by up to [`SPAWN_JITTER`] in each axis, velocity
    /// is biased upward, size/decay come from their spawn ranges, color is
    /// picked uniformly from the flame palette, and life starts at 1.
    pub fn spawn(&mut self, origin: Vec2, ambient: bool, rng: &mut dyn RandomSource) {
        let jitter = Vec2::new(
            (rng.next_f32() - 0.5) * 2.0 * SPAWN_JITTER,
            (rng.next_f32() - 0.5) * 2.0 * SPAWN_JITTER,
        );
        let particle = Particle {
            position: origin + jitter,
            velocity: Vec2::new(
                rng.range(SPAWN_VX.0, SPAWN_VX.1),
                rng.range(SPAWN_VY.0, SPAWN_VY.1),
            ),
            size: rng.range(SPAWN_SIZE.0, SPAWN_SIZE.1),
            color: FLAME_PALETTE[rng.index(FLAME_PALETTE.len())],
            life: 1.0,
            decay: rng.range(SPAWN_DECAY.0, SPAWN_DECAY.1),
            ambient,
        };
        self.particles.push(particle);
    }

    /// All live particles, in insertion order.
    #[inline]
    pub fn all(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for the simulation step.
    #[inline]
    pub(crate) fn all_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop expired particles in place, preserving the order of survivors.
    pub fn remove_expired(&mut self) {
        self.particles.retain(|p| !p.expired());
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::{EntropySource, SequenceSource};

    #[test]
    fn test_spawn_within_jitter_box() {
        let mut store = ParticleStore::new();
        let mut rng = EntropySource::seeded(1);
        let origin = Vec2::new(500.0, 500.0);

        for _ in 0..200 {
            store.spawn(origin, false, &mut rng);
        }
        for p in store.all() {
            assert!((p.position.x - origin.x).abs() <= SPAWN_JITTER);
            assert!((p.position.y - origin.y).abs() <= SPAWN_JITTER);
        }
    }

    #[test]
    fn test_spawn_initial_ranges() {
        let mut store = ParticleStore::new();
        let mut rng = EntropySource::seeded(2);

        for _ in 0..200 {
            store.spawn(Vec2::ZERO, false, &mut rng);
        }
        for p in store.all() {
            assert!(p.velocity.x >= SPAWN_VX.0 && p.velocity.x < SPAWN_VX.1);
            assert!(p.velocity.y >= SPAWN_VY.0 && p.velocity.y < SPAWN_VY.1);
            assert!(p.size >= SPAWN_SIZE.0 && p.size < SPAWN_SIZE.1);
            assert!(p.decay >= SPAWN_DECAY.0 && p.decay < SPAWN_DECAY.1);
            assert_eq!(p.life, 1.0);
            assert!(FLAME_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_spawn_marks_ambient() {
        let mut store = ParticleStore::new();
        let mut rng = EntropySource::seeded(3);

        store.spawn(Vec2::ZERO, false, &mut rng);
        store.spawn(Vec2::ZERO, true, &mut rng);

        assert!(!store.all()[0].ambient);
        assert!(store.all()[1].ambient);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = ParticleStore::new();
        let mut rng = SequenceSource::constant(0.0);

        store.spawn(Vec2::new(10.0, 0.0), false, &mut rng);
        store.spawn(Vec2::new(20.0, 0.0), false, &mut rng);
        store.spawn(Vec2::new(30.0, 0.0), false, &mut rng);

        let xs: Vec<f32> = store.all().iter().map(|p| p.position.x).collect();
        // Constant-zero source jitters every spawn by exactly -20.
        assert_eq!(xs, vec![-10.0, 0.0, 10.0]);
    }

    #[test]
    fn test_remove_expired_keeps_survivor_order() {
        let mut store = ParticleStore::new();
        let mut rng = SequenceSource::constant(0.0);
        for i in 0..4 {
            store.spawn(Vec2::new(i as f32 * 100.0, 0.0), false, &mut rng);
        }
        store.all_mut()[1].life = 0.0;
        store.all_mut()[2].size = 0.1;

        store.remove_expired();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].position.x, -20.0);
        assert_eq!(store.all()[1].position.x, 280.0);
    }
}
