//! Effect configuration.
//!
//! Builder-style configuration for the flame effect: viewport, spawn
//! probabilities, and the low-power particle cap.

/// Viewport width at or below which the low-power cap applies.
pub const LOW_POWER_WIDTH: u32 = 768;

/// Particle cap in low-power mode (narrow viewports).
pub const LOW_POWER_CAP: usize = 30;

/// Particle cap in full mode.
pub const FULL_CAP: usize = 60;

/// Probability per tick of spawning a particle at the pointer.
pub const POINTER_SPAWN_CHANCE: f32 = 0.3;

/// Probability per tick of spawning an ambient background particle.
pub const AMBIENT_SPAWN_CHANCE: f32 = 0.05;

/// Configuration for a [`FlameEffect`](crate::driver::FlameEffect).
///
/// # Example
///
/// ```
/// use emberfx::config::EffectConfig;
///
/// let config = EffectConfig::new(1024, 768);
/// assert_eq!(config.max_particles(), 60);
///
/// let mobile = EffectConfig::new(480, 800).with_touch_device(true);
/// assert_eq!(mobile.max_particles(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Touch devices get no pointer-proximity spawning, only ambient.
    pub touch_device: bool,
    /// Per-tick pointer spawn probability.
    pub pointer_spawn_chance: f32,
    /// Per-tick ambient spawn probability.
    pub ambient_spawn_chance: f32,
    /// Explicit cap override; `None` derives the cap from the viewport width.
    pub cap_override: Option<usize>,
}

impl EffectConfig {
    /// Configuration for the given viewport, with the original defaults.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            touch_device: false,
            pointer_spawn_chance: POINTER_SPAWN_CHANCE,
            ambient_spawn_chance: AMBIENT_SPAWN_CHANCE,
            cap_override: None,
        }
    }

    /// Mark the host as a touch device (disables pointer spawning).
    pub fn with_touch_device(mut self, touch: bool) -> Self {
        self.touch_device = touch;
        self
    }

    /// Override the per-tick pointer spawn probability.
    pub fn with_pointer_spawn_chance(mut self, chance: f32) -> Self {
        self.pointer_spawn_chance = chance;
        self
    }

    /// Override the per-tick ambient spawn probability.
    pub fn with_ambient_spawn_chance(mut self, chance: f32) -> Self {
        self.ambient_spawn_chance = chance;
        self
    }

    /// Pin the particle cap instead of deriving it from viewport width.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap_override = Some(cap);
        self
    }

    /// Maximum simultaneously live particles for this viewport.
    pub fn max_particles(&self) -> usize {
        self.cap_override.unwrap_or(if self.width <= LOW_POWER_WIDTH {
            LOW_POWER_CAP
        } else {
            FULL_CAP
        })
    }

    /// Update the viewport, keeping the rest of the configuration.
    ///
    /// The derived cap follows the new width unless overridden.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
