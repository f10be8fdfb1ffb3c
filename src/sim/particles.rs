//! Explosions and click feedback
//!
//! Short-lived cosmetic entities: burst particles when a hazard is
//! destroyed, an expanding ring when a click lands on empty space. Nothing
//! here feeds back into gameplay.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A single explosion fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub lifespan: f32,
    pub size: f32,
}

impl Particle {
    /// Remaining life fraction, 1 at birth down to 0.
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.lifespan).max(0.0)
    }
}

/// Expanding feedback ring for a click that hit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub pos: Vec2,
    pub age: f32,
    pub lifespan: f32,
    pub start_radius: f32,
    pub end_radius: f32,
}

impl Ring {
    /// Current radius, growing linearly over the ring's life.
    pub fn radius(&self) -> f32 {
        let t = (self.age / self.lifespan).clamp(0.0, 1.0);
        self.start_radius + (self.end_radius - self.start_radius) * t
    }

    /// Remaining life fraction, 1 at birth down to 0.
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.lifespan).max(0.0)
    }
}

/// Owns every live particle and ring.
#[derive(Debug, Default)]
pub struct ParticlesSystem {
    particles: Vec<Particle>,
    rings: Vec<Ring>,
}

impl ParticlesSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Drop everything regardless of remaining lifetimes.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.rings.clear();
    }

    /// Burst at `center`. `power` (the destroyed hazard's radius) scales
    /// both fragment count and launch speed.
    pub fn explode(&mut self, center: Vec2, power: f32, rng: &mut impl Rng) {
        let count = power.clamp(EXPLODE_COUNT_MIN, EXPLODE_COUNT_MAX).floor() as usize;
        let speed_scale = 0.6 + power * 0.02;
        for _ in 0..count {
            let dir = Vec2::from_angle(rng.random_range(0.0..TAU));
            let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX) * speed_scale;
            self.particles.push(Particle {
                pos: center,
                vel: dir * speed,
                age: 0.0,
                lifespan: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
                size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            });
        }
    }

    /// Feedback ring for a click that missed.
    pub fn ping(&mut self, pos: Vec2) {
        self.rings.push(Ring {
            pos,
            age: 0.0,
            lifespan: RING_LIFE,
            start_radius: RING_RADIUS_START,
            end_radius: RING_RADIUS_END,
        });
    }

    /// Age, move, and damp everything. Entities whose age reaches their
    /// lifespan are removed, including exactly at the boundary.
    pub fn update(&mut self, dt: f32) {
        let damping = PARTICLE_DAMPING.powf(dt * 60.0);
        for p in &mut self.particles {
            p.age += dt;
            p.pos += p.vel * dt;
            p.vel *= damping;
        }
        self.particles.retain(|p| p.age < p.lifespan);

        for r in &mut self.rings {
            r.age += dt;
        }
        self.rings.retain(|r| r.age < r.lifespan);
    }
}
