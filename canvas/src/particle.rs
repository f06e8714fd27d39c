//! Particle storage and spring-damper physics for the particle text renderer.
//!
//! Particles are matched to sampled points purely by index. A rebuild
//! retargets the overlapping prefix (position and velocity untouched, so the
//! text morphs instead of snapping), spawns new particles near their targets
//! for any extra points, and truncates the rest.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::sample::SampledPoint;
use crate::viewport::Point;

/// One rendered dot. All lengths are in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Target the spring pulls toward.
    pub tx: f64,
    pub ty: f64,
    /// Radius.
    pub size: f64,
    pub color: Rgb,
}

/// A repulsion zone resolved to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub radius: f64,
    pub strength: f64,
}

impl Force {
    /// Velocity impulse on a particle displaced `(dx, dy)` from the source.
    ///
    /// Magnitude falls linearly from `strength` at the source to zero at
    /// `radius`; anything at or beyond the radius is untouched. A particle
    /// exactly on the source normalizes with distance 1, so it gets no push:
    /// `magnitude_at(0.0)` is still the nominal `strength`, but the direction
    /// there is zero and so is the applied vector.
    #[must_use]
    pub fn impulse(&self, dx: f64, dy: f64) -> Option<(f64, f64)> {
        let d2 = dx * dx + dy * dy;
        if d2 >= self.radius * self.radius {
            return None;
        }
        let d = d2.sqrt();
        let magnitude = self.magnitude_at(d);
        let norm = if d > 0.0 { d } else { 1.0 };
        Some((dx / norm * magnitude, dy / norm * magnitude))
    }

    /// Scalar force at distance `d` from the source.
    #[must_use]
    pub fn magnitude_at(&self, d: f64) -> f64 {
        if self.radius <= 0.0 || d >= self.radius {
            return 0.0;
        }
        (1.0 - d / self.radius) * self.strength
    }
}

/// Per-frame physics parameters, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dynamics {
    pub spring: f64,
    pub friction: f64,
    pub mouse: Force,
}

/// Spawn parameters for newly appended particles, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    /// Max offset from the target per axis.
    pub jitter: f64,
    pub size_min: f64,
    pub size_max: f64,
}

/// The full particle set plus the RNG used to spawn into it.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { particles: Vec::new(), rng: SmallRng::seed_from_u64(seed) }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Reconcile the particle set with freshly sampled `points`.
    pub fn rebuild(&mut self, points: &[SampledPoint], spawn: Spawn) {
        let keep = points.len().min(self.particles.len());
        for (particle, point) in self.particles.iter_mut().zip(&points[..keep]) {
            particle.tx = point.x;
            particle.ty = point.y;
            particle.color = point.color;
        }
        for point in &points[keep..] {
            let particle = Particle {
                x: point.x + self.uniform(-spawn.jitter, spawn.jitter),
                y: point.y + self.uniform(-spawn.jitter, spawn.jitter),
                vx: 0.0,
                vy: 0.0,
                tx: point.x,
                ty: point.y,
                size: self.uniform(spawn.size_min, spawn.size_max),
                color: point.color,
            };
            self.particles.push(particle);
        }
        self.particles.truncate(points.len());
    }

    /// Advance every particle by one frame.
    ///
    /// Order per particle: spring toward target, pointer repulsion, friction,
    /// then integrate position.
    pub fn step(&mut self, dynamics: &Dynamics, pointer: Point) {
        for p in &mut self.particles {
            p.vx += (p.tx - p.x) * dynamics.spring;
            p.vy += (p.ty - p.y) * dynamics.spring;

            if let Some((fx, fy)) = dynamics.mouse.impulse(p.x - pointer.x, p.y - pointer.y) {
                p.vx += fx;
                p.vy += fy;
            }

            p.vx *= dynamics.friction;
            p.vy *= dynamics.friction;
            p.x += p.vx;
            p.y += p.vy;
        }
    }

    /// Apply a one-shot impulse to every particle near `at`.
    pub fn burst(&mut self, at: Point, force: Force) {
        for p in &mut self.particles {
            if let Some((fx, fy)) = force.impulse(p.x - at.x, p.y - at.y) {
                p.vx += fx;
                p.vy += fy;
            }
        }
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.rng.random::<f64>() * (high - low)
    }
}
