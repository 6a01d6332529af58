//! Per-tick particle integration.
//!
//! One simulation step advances every particle by the fixed flame rules and
//! then culls the expired ones. The update is a pure function of a particle's
//! prior state and the constants below; no global tick counter is involved.

use crate::particle::Particle;
use crate::store::ParticleStore;

/// Upward acceleration applied to `velocity.y` each tick (buoyant lift).
pub const BUOYANCY: f32 = 0.05;

/// Multiplicative size shrink per tick.
pub const SHRINK: f32 = 0.98;

/// Advance a single particle by one tick.
///
/// `position += velocity`, then lift, life decay, and shrink. Does not
/// remove the particle; callers apply [`Particle::expired`] afterwards.
#[inline]
pub fn advance(p: &mut Particle) {
    p.position += p.velocity;
    p.velocity.y -= BUOYANCY;
    p.life -= p.decay;
    p.size *= SHRINK;
}

/// Advance every particle in the store by one tick, then drop expired ones.
pub fn step(store: &mut ParticleStore) {
    for p in store.all_mut() {
        advance(p);
    }
    store.remove_expired();
}
