//! Particle data model.
//!
//! A [`Particle`] is a plain value record owned by the
//! [`ParticleStore`](crate::store::ParticleStore) while alive. It carries no
//! behavior beyond its expiry predicate; the per-tick update lives in
//! [`simulation`](crate::simulation).

use glam::Vec2;

/// Semi-transparent RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Color from 8-bit RGB channels and a normalized alpha.
    pub const fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// The same color with alpha scaled by `factor`.
    #[inline]
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }
}

/// The flame palette: warm oranges and yellows around a blue gas-flame core.
///
/// Chosen uniformly at spawn time. Alpha is baked into each entry; the
/// renderer additionally scales alpha by remaining life.
pub const FLAME_PALETTE: [Rgba; 5] = [
    Rgba::from_rgb8(255, 107, 44, 0.8), // orange
    Rgba::from_rgb8(255, 140, 66, 0.7), // light orange
    Rgba::from_rgb8(255, 80, 20, 0.6),  // deep orange
    Rgba::from_rgb8(0, 100, 255, 0.4),  // blue gas-flame core
    Rgba::from_rgb8(255, 200, 100, 0.5), // yellow
];

/// Particles smaller than this are culled even while `life > 0`.
///
/// The multiplicative shrink never reaches zero on its own, so the floor is
/// what bounds a particle's lifetime in ticks.
pub const MIN_SIZE: f32 = 0.5;

/// A single flame particle.
///
/// # Invariants
///
/// - `life` starts at 1 and strictly decreases by `decay` each tick.
/// - `size` is monotonically non-increasing.
/// - A particle is removed exactly when [`Particle::expired`] holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position on the surface, in pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick. `y` gains a constant upward bias each tick.
    pub velocity: Vec2,
    /// Radius basis, shrinks by a fixed factor each tick.
    pub size: f32,
    /// Palette color fixed at spawn.
    pub color: Rgba,
    /// Remaining life in `(0, 1]`.
    pub life: f32,
    /// Per-particle life decrement, fixed at spawn.
    pub decay: f32,
    /// Background-spawned rather than pointer-spawned. Affects only where
    /// the spawn gate placed the particle; carried for fidelity.
    pub ambient: bool,
}

impl Particle {
    /// Removal predicate: dead when out of life or below the size floor.
    #[inline]
    pub fn expired(&self) -> bool {
        self.life <= 0.0 || self.size < MIN_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_five_entries() {
        assert_eq!(FLAME_PALETTE.len(), 5);
        for color in FLAME_PALETTE {
            assert!(color.a > 0.0 && color.a < 1.0, "palette is semi-transparent");
        }
    }

    #[test]
    fn test_expired_predicate() {
        let mut p = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 5.0,
            color: FLAME_PALETTE[0],
            life: 0.5,
            decay: 0.02,
            ambient: false,
        };
        assert!(!p.expired());

        p.life = 0.0;
        assert!(p.expired());

        p.life = 0.5;
        p.size = 0.49;
        assert!(p.expired());

        // Exactly at the floor still counts as alive.
        p.size = MIN_SIZE;
        assert!(!p.expired());
    }

    #[test]
    fn test_alpha_scaling() {
        let c = Rgba::from_rgb8(255, 107, 44, 0.8);
        let scaled = c.with_alpha_scaled(0.5);
        assert!((scaled.a - 0.4).abs() < 1e-6);
        assert_eq!(scaled.r, c.r);
    }
}
