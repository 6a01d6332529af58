//! The animation driver and effect context.
//!
//! [`FlameEffect`] owns every piece of per-effect state — particle store,
//! pointer tracker, raster surface, random source — behind an explicit
//! `init`/`dispose` lifecycle. The driver itself is a two-state machine
//! (`Stopped`/`Running`); the host loop calls [`FlameEffect::tick`] once per
//! frame and a tick runs the whole pipeline to completion before yielding:
//! smooth the pointer, run the spawn gates, integrate, render.
//!
//! `start` and `stop` make the repeating tick a cancellable task without tying
//! the simulation to any particular frame-timing API. A hidden/visible signal
//! maps straight onto `stop`/`start`; ticks that would have happened while
//! hidden are simply lost, never replayed.

use glam::Vec2;

use crate::config::EffectConfig;
use crate::input::PointerTracker;
use crate::particle::Particle;
use crate::render::{draw, Frame};
use crate::simulation;
use crate::spawn::{EntropySource, RandomSource};
use crate::store::ParticleStore;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No ticks execute; the next scheduled tick is cancelled.
    Stopped,
    /// Ticks advance the simulation and repaint the surface.
    Running,
}

/// The owned flame-effect context.
///
/// # Example
///
/// ```
/// use emberfx::prelude::*;
///
/// let config = EffectConfig::new(1024, 768);
/// let frame = Frame::new(config.width, config.height);
/// let mut effect = FlameEffect::init(Some(frame), config);
///
/// effect.start();
/// effect.pointer_moved(500.0, 500.0);
/// for _ in 0..60 {
///     effect.tick();
/// }
/// effect.stop();
/// ```
pub struct FlameEffect {
    config: EffectConfig,
    store: ParticleStore,
    pointer: PointerTracker,
    frame: Option<Frame>,
    rng: Box<dyn RandomSource>,
    state: DriverState,
    ticks: u64,
}

impl FlameEffect {
    /// Build an effect over `frame`.
    ///
    /// Passing `None` — the drawing surface was never supplied — yields a
    /// permanently inert effect: `start` keeps it Stopped and `tick` does
    /// nothing. That mirrors the original markup dependency being absent.
    pub fn init(frame: Option<Frame>, config: EffectConfig) -> Self {
        let cap = config.max_particles();
        Self {
            config,
            store: ParticleStore::with_capacity(cap),
            pointer: PointerTracker::new(),
            frame,
            rng: Box::new(EntropySource::new()),
            state: DriverState::Stopped,
            ticks: 0,
        }
    }

    /// Replace the random source (tests inject deterministic sequences).
    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Begin ticking. No-op when already Running or when no surface exists.
    pub fn start(&mut self) {
        if self.frame.is_some() {
            self.state = DriverState::Running;
        }
    }

    /// Cancel the next tick. Idempotent.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Visibility signal: hidden stops the driver, visible restarts it.
    ///
    /// Ticks skipped while hidden are lost; there is no catch-up.
    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Whether the driver is currently Running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Record a raw pointer position.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set_raw(x, y);
    }

    /// Process a winit window event, picking up pointer movement.
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) {
        self.pointer.handle_event(event);
    }

    /// Resize the viewport, rebuilding the surface and re-deriving the cap.
    ///
    /// Live particles are kept; any now outside the viewport die naturally.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.set_viewport(width, height);
        if self.frame.is_some() {
            self.frame = Some(Frame::new(width, height));
        }
    }

    /// Run one tick: smooth pointer, spawn, integrate, render.
    ///
    /// Does nothing while Stopped.
    pub fn tick(&mut self) {
        if self.state != DriverState::Running {
            return;
        }
        self.ticks += 1;

        self.pointer.tick();
        self.spawn_gates();
        simulation::step(&mut self.store);

        if let Some(frame) = &mut self.frame {
            draw(frame, self.store.all());
        }
    }

    /// Probabilistic spawn gates, run once per tick before integration.
    ///
    /// Freshly spawned particles are integrated in the same tick, as the
    /// original does.
    fn spawn_gates(&mut self) {
        let cap = self.config.max_particles();

        // Pointer-proximity spawn: skipped entirely on touch devices.
        if !self.config.touch_device
            && self.store.len() < cap
            && self.rng.chance(self.config.pointer_spawn_chance)
        {
            self.store
                .spawn(self.pointer.position(), false, self.rng.as_mut());
        }

        // Ambient spawn: mid-band of the viewport, lower probability,
        // half the cap.
        if self.store.len() < cap / 2 && self.rng.chance(self.config.ambient_spawn_chance) {
            let origin = self.ambient_origin();
            self.store.spawn(origin, true, self.rng.as_mut());
        }
    }

    /// Random background spawn site: anywhere horizontally, vertically in
    /// the band from 30% to 80% of viewport height.
    fn ambient_origin(&mut self) -> Vec2 {
        let width = self.config.width as f32;
        let height = self.config.height as f32;
        Vec2::new(
            self.rng.next_f32() * width,
            height * 0.3 + self.rng.next_f32() * height * 0.5,
        )
    }

    /// Ticks executed since `init`. Only advances while Running.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The current particle set, in paint order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.store.all()
    }

    /// The rendered surface, if one was supplied.
    #[inline]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// The effect configuration.
    #[inline]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Tear the effect down, releasing the surface to the caller.
    pub fn dispose(mut self) -> Option<Frame> {
        self.stop();
        self.store.clear();
        self.frame.take()
    }
}
