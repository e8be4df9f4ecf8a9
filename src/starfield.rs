use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::canvas::Canvas;

/// Star projection focal constant
const PROJECTION_SCALE: f32 = 400.0;
/// Depth a star respawns at, and the far end of the brightness ramp
pub const MAX_DEPTH: f32 = 1500.0;
/// Half-width of the spawn volume on x and y
const SPREAD: f32 = 1000.0;
/// Trails longer than this on either axis are suppressed; they would be
/// respawn artifacts, not motion
const TRAIL_MAX_JUMP: f32 = 100.0;

/// One particle in a camera-centered coordinate system. `prev_z` remembers
/// last frame's depth for the motion trail.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub prev_z: f32,
}

impl Star {
    fn spawn(rng: &mut StdRng) -> Self {
        let z = rng.gen_range(1.0..=MAX_DEPTH);
        Self {
            x: rng.gen_range(-SPREAD..=SPREAD),
            y: rng.gen_range(-SPREAD..=SPREAD),
            z,
            prev_z: z,
        }
    }

    /// Advance toward the camera; wrap around to the far plane when passed.
    /// Respawn resets `prev_z` so no trail is drawn across the jump.
    pub fn update(&mut self, warp_speed: f32, rng: &mut StdRng) {
        self.z -= warp_speed;
        if self.z < 1.0 {
            self.z = MAX_DEPTH;
            self.x = rng.gen_range(-SPREAD..=SPREAD);
            self.y = rng.gen_range(-SPREAD..=SPREAD);
            self.prev_z = self.z;
        }
    }

    fn draw(&mut self, canvas: &mut Canvas, center_x: f32, center_y: f32) {
        let sx = (self.x / self.z) * PROJECTION_SCALE + center_x;
        let sy = (self.y / self.z) * PROJECTION_SCALE + center_y;
        let px = (self.x / self.prev_z) * PROJECTION_SCALE + center_x;
        let py = (self.y / self.prev_z) * PROJECTION_SCALE + center_y;

        self.prev_z = self.z;

        let (sxi, syi) = (sx as i32, sy as i32);
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        if sxi < 0 || sxi >= w || syi < 0 || syi >= h {
            return;
        }

        let closeness = 1.0 - self.z / MAX_DEPTH;
        let brightness = ((255.0 * closeness) as i32).clamp(0, 255) as u8;
        let size = ((8.0 * closeness) as i32).max(1) as u32;
        let blue = brightness.saturating_add(50);

        canvas.fill_circle(sxi, syi, size, brightness, brightness, blue, 255);

        if (sx - px).abs() < TRAIL_MAX_JUMP && (sy - py).abs() < TRAIL_MAX_JUMP {
            canvas.draw_line(
                px as i32,
                py as i32,
                sxi,
                syi,
                brightness / 2,
                brightness / 2,
                brightness / 3,
                255,
            );
        }
    }
}

/// Fixed-size pool of stars reused forever; nothing is ever destroyed,
/// passed stars wrap back to the far plane.
pub struct Starfield {
    stars: Vec<Star>,
    rng: StdRng,
}

impl Starfield {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Deterministic starfield for tests
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, mut rng: StdRng) -> Self {
        let stars = (0..count).map(|_| Star::spawn(&mut rng)).collect();
        Self { stars, rng }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// One frame of the starfield: advance every star by the warp speed, then
    /// draw it around the canvas center.
    pub fn advance_and_draw(&mut self, canvas: &mut Canvas, warp_speed: f32) {
        let center_x = canvas.width() as f32 / 2.0;
        let center_y = canvas.height() as f32 / 2.0;

        for star in &mut self.stars {
            star.update(warp_speed, &mut self.rng);
            star.draw(canvas, center_x, center_y);
        }
    }
}
