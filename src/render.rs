//! CPU raster surface and the two-layer glow renderer.
//!
//! Each frame is cleared fully and repainted from the particle store; any
//! visual trailing comes from particle persistence, never from surface
//! history. Every particle is painted as an outer radial glow (radius twice
//! the size, color fading linearly to transparent) plus a solid inner core
//! (half the size), both scaled by `life * 0.6`. Particles are painted in
//! store order, so later spawns stack on top.

use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::error::FrameError;
use crate::particle::{Particle, Rgba};

/// Overall alpha multiplier applied per particle: `life * GLOBAL_ALPHA`.
pub const GLOBAL_ALPHA: f32 = 0.6;

/// Glow radius as a multiple of particle size.
pub const GLOW_RADIUS: f32 = 2.0;

/// Core radius as a multiple of particle size.
pub const CORE_RADIUS: f32 = 0.5;

/// One opaque RGBA8 pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Near-black blue, matching the site's dark hero section.
pub const BACKGROUND: Pixel = Pixel::rgb(5, 5, 13);

/// An owned RGBA8 raster surface.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Frame {
    /// Surface of the given dimensions, cleared to the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole surface with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Raw RGBA8 bytes, row-major, for texture upload or encoding.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Source-over blend `color` onto the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are ignored; the surface stays opaque.
    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        let dst = self.pixels[idx];
        let blend_channel = |src: f32, dst: u8| -> u8 {
            let out = src * 255.0 * a + dst as f32 * (1.0 - a);
            out.round().clamp(0.0, 255.0) as u8
        };
        self.pixels[idx] = Pixel {
            r: blend_channel(color.r, dst.r),
            g: blend_channel(color.g, dst.g),
            b: blend_channel(color.b, dst.b),
            a: 255,
        };
    }

    /// Encode the surface as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), FrameError> {
        let buffer = image::RgbaImage::from_raw(self.width, self.height, self.bytes().to_vec())
            .ok_or(FrameError::BadDimensions {
                width: self.width,
                height: self.height,
            })?;
        buffer.save(path.as_ref())?;
        Ok(())
    }
}

/// Paint `particles` onto `frame`, clearing it first.
pub fn draw(frame: &mut Frame, particles: &[Particle]) {
    frame.clear();
    for p in particles {
        draw_particle(frame, p);
    }
}

fn draw_particle(frame: &mut Frame, p: &Particle) {
    let alpha = (p.life * GLOBAL_ALPHA).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }

    // Outer glow: color fades linearly to transparent at the rim.
    let glow_radius = p.size * GLOW_RADIUS;
    fill_disc(frame, p.position.x, p.position.y, glow_radius, |dist| {
        let falloff = 1.0 - dist / glow_radius;
        p.color.with_alpha_scaled(alpha * falloff)
    });

    // Inner core: solid particle color.
    let core_radius = p.size * CORE_RADIUS;
    fill_disc(frame, p.position.x, p.position.y, core_radius, |_| {
        p.color.with_alpha_scaled(alpha)
    });
}

/// Blend `shade(distance)` into every pixel whose center lies within
/// `radius` of `(cx, cy)`.
fn fill_disc<F>(frame: &mut Frame, cx: f32, cy: f32, radius: f32, shade: F)
where
    F: Fn(f32) -> Rgba,
{
    if radius <= 0.0 {
        return;
    }
    let min_x = (cx - radius).floor() as i32;
    let max_x = (cx + radius).ceil() as i32;
    let min_y = (cy - radius).floor() as i32;
    let max_y = (cy + radius).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= radius {
                frame.blend(x, y, shade(dist));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::FLAME_PALETTE;
    use glam::Vec2;

    fn particle_at(x: f32, y: f32, size: f32, color: Rgba, life: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size,
            color,
            life,
            decay: 0.02,
            ambient: false,
        }
    }

    #[test]
    fn test_frame_starts_cleared() {
        let frame = Frame::new(16, 8);
        assert_eq!(frame.bytes().len(), 16 * 8 * 4);
        assert_eq!(frame.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(frame.pixel(15, 7), Some(BACKGROUND));
        assert_eq!(frame.pixel(16, 0), None);
    }

    #[test]
    fn test_draw_clears_previous_frame() {
        let mut frame = Frame::new(64, 64);
        let p = particle_at(32.0, 32.0, 8.0, FLAME_PALETTE[0], 1.0);

        draw(&mut frame, &[p]);
        assert_ne!(frame.pixel(32, 32), Some(BACKGROUND));

        // An empty particle set repaints pure background: no trail history.
        draw(&mut frame, &[]);
        assert_eq!(frame.pixel(32, 32), Some(BACKGROUND));
    }

    #[test]
    fn test_particle_lights_center_not_outside_glow() {
        let mut frame = Frame::new(64, 64);
        let p = particle_at(32.0, 32.0, 4.0, FLAME_PALETTE[0], 1.0);
        draw(&mut frame, &[p]);

        let center = frame.pixel(32, 32).unwrap();
        assert!(center.r > BACKGROUND.r, "warm core brightens red channel");

        // Glow radius is 8; a pixel 12 away stays untouched.
        assert_eq!(frame.pixel(32, 48), Some(BACKGROUND));
    }

    #[test]
    fn test_alpha_follows_life() {
        let mut bright = Frame::new(32, 32);
        let mut dim = Frame::new(32, 32);
        draw(&mut bright, &[particle_at(16.0, 16.0, 4.0, FLAME_PALETTE[0], 1.0)]);
        draw(&mut dim, &[particle_at(16.0, 16.0, 4.0, FLAME_PALETTE[0], 0.2)]);

        let b = bright.pixel(16, 16).unwrap();
        let d = dim.pixel(16, 16).unwrap();
        assert!(b.r > d.r, "fading particles paint fainter");
    }

    #[test]
    fn test_later_particles_paint_on_top() {
        // Blue over orange at the same spot: the blue channel must win at
        // the center compared to orange alone.
        let orange = FLAME_PALETTE[0];
        let blue = FLAME_PALETTE[3];

        let mut orange_only = Frame::new(32, 32);
        draw(&mut orange_only, &[particle_at(16.0, 16.0, 4.0, orange, 1.0)]);

        let mut stacked = Frame::new(32, 32);
        draw(
            &mut stacked,
            &[
                particle_at(16.0, 16.0, 4.0, orange, 1.0),
                particle_at(16.0, 16.0, 4.0, blue, 1.0),
            ],
        );

        let base = orange_only.pixel(16, 16).unwrap();
        let top = stacked.pixel(16, 16).unwrap();
        assert!(top.b > base.b);
    }

    #[test]
    fn test_zero_life_paints_nothing() {
        let mut frame = Frame::new(32, 32);
        draw(&mut frame, &[particle_at(16.0, 16.0, 4.0, FLAME_PALETTE[0], 0.0)]);
        assert_eq!(frame.pixel(16, 16), Some(BACKGROUND));
    }

    #[test]
    fn test_offscreen_particle_is_clipped() {
        let mut frame = Frame::new(32, 32);
        draw(&mut frame, &[particle_at(-100.0, -100.0, 8.0, FLAME_PALETTE[0], 1.0)]);
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(frame.pixel(x, y), Some(BACKGROUND));
            }
        }
    }
}
