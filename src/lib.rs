//! # emberfx - flame particle effect
//!
//! A small CPU particle system recreating a marketing site's canvas flame
//! effect: embers spawn near the pointer and drift upward, fading and
//! shrinking until they die. Rendering paints a soft two-layer glow per
//! particle onto an owned RGBA raster, which a thin wgpu blit presents to a
//! window.
//!
//! ## Quick Start
//!
//! ```
//! use emberfx::prelude::*;
//!
//! let config = EffectConfig::new(1024, 768);
//! let frame = Frame::new(config.width, config.height);
//! let mut effect = FlameEffect::init(Some(frame), config);
//!
//! effect.start();
//! effect.pointer_moved(512.0, 400.0);
//! for _ in 0..120 {
//!     effect.tick();
//! }
//!
//! assert!(effect.particles().len() <= 60);
//! ```
//!
//! ## Core Concepts
//!
//! ### The tick
//!
//! One tick is one discrete simulation/render step: smooth the tracked
//! pointer, run the spawn gates, integrate every particle, cull the expired,
//! repaint the surface. A tick runs to completion before the driver yields;
//! there is no concurrency anywhere in the pipeline.
//!
//! ### Spawn gates
//!
//! Two probabilistic gates run per tick: a pointer-proximity gate (disabled on
//! touch devices) and a lower-probability ambient gate limited to half the
//! cap. The cap is viewport-dependent: 30 particles at widths of 768 or less,
//! 60 otherwise. All randomness flows through an injectable
//! [`RandomSource`](spawn::RandomSource), so tests can pin every draw.
//!
//! ### Lifecycle
//!
//! [`FlameEffect`] is the owned context: `init` takes the surface and config,
//! `start`/`stop` control the repeating tick, a hidden/visible signal maps to
//! `stop`/`start` with no catch-up, and `dispose` releases the surface. A
//! missing surface makes the whole effect a no-op rather than an error.

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod particle;
pub mod render;
pub mod simulation;
pub mod spawn;
pub mod store;
pub mod time;

pub use config::EffectConfig;
pub use driver::{DriverState, FlameEffect};
pub use glam::Vec2;
pub use input::PointerTracker;
pub use particle::{Particle, Rgba, FLAME_PALETTE};
pub use render::Frame;
pub use spawn::{EntropySource, RandomSource, SequenceSource};
pub use store::ParticleStore;

/// Convenient re-exports for common usage.
///
/// ```
/// use emberfx::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EffectConfig;
    pub use crate::driver::{DriverState, FlameEffect};
    pub use crate::input::PointerTracker;
    pub use crate::particle::{Particle, Rgba, FLAME_PALETTE};
    pub use crate::render::{draw, Frame};
    pub use crate::simulation::{advance, step};
    pub use crate::spawn::{EntropySource, RandomSource, SequenceSource};
    pub use crate::store::ParticleStore;
    pub use crate::time::Time;
    pub use crate::Vec2;
}
