//! Fading dots that follow the mouse.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::TrailConfig;
use crate::consts::{MAX_TRAIL_POINTS, TRAIL_SIZE_MIN, TRAIL_SIZE_SPAN};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub size: f64,
    /// Remaining life in `(0, 1]`; the point is dropped once it reaches 0.
    pub life: f64,
}

pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    max_points: usize,
    decay: f64,
    shrink: f64,
    rng: SmallRng,
}

impl CursorTrail {
    #[must_use]
    pub fn new(config: &TrailConfig, seed: u64) -> Self {
        Self {
            points: VecDeque::with_capacity(config.max_points.min(MAX_TRAIL_POINTS).saturating_add(1)),
            max_points: config.max_points,
            decay: config.decay,
            shrink: config.shrink,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Record a pointer position, dropping the oldest point past the cap.
    pub fn push(&mut self, x: f64, y: f64) {
        let size = self.rng.random::<f64>() * TRAIL_SIZE_SPAN + TRAIL_SIZE_MIN;
        self.points.push_back(TrailPoint { x, y, opacity: 1.0, size, life: 1.0 });
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }

    /// Age every point by one frame and drop the expired ones.
    pub fn tick(&mut self) {
        let (decay, shrink) = (self.decay, self.shrink);
        self.points.retain_mut(|point| {
            point.life -= decay;
            point.opacity = point.life;
            point.size *= shrink;
            point.life > 0.0
        });
    }
}
