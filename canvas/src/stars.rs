//! Twinkling star field drawn behind the page content.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{MAX_STARS, STAR_OPACITY_MAX, STAR_OPACITY_MIN, STAR_TWINKLE_STEP};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    /// Angular frequency of the twinkle, per millisecond of wall time.
    pub twinkle_speed: f64,
    /// Drift per tick, in pixels.
    pub move_speed: f64,
    /// Drift heading in radians.
    pub direction: f64,
}

pub struct StarField {
    stars: Vec<Star>,
    width: f64,
    height: f64,
    rng: SmallRng,
}

impl StarField {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { stars: Vec::new(), width: 0.0, height: 0.0, rng: SmallRng::seed_from_u64(seed) }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Replace the field with `count` random stars inside `width` x `height`.
    pub fn seed(&mut self, width: f64, height: f64, count: usize) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let mut stars = Vec::with_capacity(count.min(MAX_STARS));
        for _ in 0..count {
            stars.push(Star {
                x: self.rng.random::<f64>() * self.width,
                y: self.rng.random::<f64>() * self.height,
                size: self.rng.random::<f64>() * 2.0 + 0.5,
                opacity: self.rng.random::<f64>() * 0.8 + 0.2,
                twinkle_speed: self.rng.random::<f64>() * 0.02 + 0.01,
                move_speed: self.rng.random::<f64>() * 0.5 + 0.1,
                direction: self.rng.random::<f64>() * TAU,
            });
        }
        self.stars = stars;
    }

    /// Change the bounds. Existing stars stay put and wrap in on later ticks.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance one frame at wall time `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        let (width, height) = (self.width, self.height);
        for star in &mut self.stars {
            star.opacity += (now_ms * star.twinkle_speed).sin() * STAR_TWINKLE_STEP;
            star.opacity = star.opacity.clamp(STAR_OPACITY_MIN, STAR_OPACITY_MAX);

            star.x += star.direction.cos() * star.move_speed;
            star.y += star.direction.sin() * star.move_speed;

            if star.x < 0.0 {
                star.x = width;
            }
            if star.x > width {
                star.x = 0.0;
            }
            if star.y < 0.0 {
                star.y = height;
            }
            if star.y > height {
                star.y = 0.0;
            }
        }
    }
}
