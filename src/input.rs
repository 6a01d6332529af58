//! Pointer tracking with exponential smoothing.
//!
//! Raw pointer positions arrive as events; each tick the tracked position
//! moves a fixed fraction of the way toward the latest raw position. Spawning
//! reads the smoothed position, which gives the flame its trailing feel.

use glam::Vec2;
use winit::event::WindowEvent;

/// Fraction of the remaining distance covered per tick.
pub const SMOOTHING: f32 = 0.1;

/// Smoothed pointer-position state feeding spawn location.
#[derive(Debug, Default)]
pub struct PointerTracker {
    raw: Vec2,
    smoothed: Vec2,
}

impl PointerTracker {
    /// Tracker with both raw and smoothed position at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw pointer position.
    pub fn set_raw(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
    }

    /// Process a winit window event, picking up cursor movement.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::CursorMoved { position, .. } = event {
            self.set_raw(position.x as f32, position.y as f32);
        }
    }

    /// Advance the smoothed position one tick toward the raw position.
    ///
    /// Exponential smoothing, not a physical spring: each tick covers
    /// [`SMOOTHING`] of the remaining distance.
    pub fn tick(&mut self) {
        self.smoothed += (self.raw - self.smoothed) * SMOOTHING;
    }

    /// The smoothed position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.smoothed
    }

    /// The latest raw position.
    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }
}
