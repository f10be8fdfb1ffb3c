//! Single-target hazard: spawn, drift, despawn, hit test
//!
//! At most one hazard exists at a time. Spawns start beyond a viewport edge
//! and drift toward a point near the center; anything that leaves the padded
//! play area counts as a miss and schedules the next spawn after a short
//! cooldown.

use std::f32::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use rand::Rng;

use super::{SpeedSource, ViewportSource};
use crate::consts::*;

/// One vertex of the jagged silhouette, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    /// Angle around the center (radians).
    pub angle: f32,
    /// Distance from the center (pixels).
    pub dist: f32,
}

/// The drifting target entity.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Current rotation (radians).
    pub angle: f32,
    /// Rotation speed (radians/sec).
    pub spin: f32,
    pub hp: u8,
    /// Jagged outline relative to `pos`, before rotation by `angle`.
    pub outline: Vec<OutlinePoint>,
}

/// Center and size of a destroyed hazard, for explosion placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    pub center: Vec2,
    pub radius: f32,
}

/// Outcome of one hazard update step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// The hazard left the play area this step.
    pub missed: bool,
}

/// Owns the single active hazard and its spawn scheduling.
pub struct HazardSystem {
    viewport: Rc<dyn ViewportSource>,
    speed: Rc<dyn SpeedSource>,
    hazard: Option<Hazard>,
    spawn_cooldown: f32,
}

impl HazardSystem {
    pub fn new(viewport: Rc<dyn ViewportSource>, speed: Rc<dyn SpeedSource>) -> Self {
        Self {
            viewport,
            speed,
            hazard: None,
            spawn_cooldown: 0.0,
        }
    }

    pub fn hazard(&self) -> Option<&Hazard> {
        self.hazard.as_ref()
    }

    /// Seconds until the next spawn is allowed; 0 means ready.
    pub fn spawn_cooldown(&self) -> f32 {
        self.spawn_cooldown
    }

    /// Remove any active hazard and cancel the pending spawn delay.
    pub fn clear(&mut self) {
        self.hazard = None;
        self.spawn_cooldown = 0.0;
    }

    fn arm_cooldown(&mut self, rng: &mut impl Rng) {
        self.spawn_cooldown = rng.random_range(SPAWN_COOLDOWN_MIN..SPAWN_COOLDOWN_MAX);
    }

    /// Spawn a hazard if none is active and no cooldown is pending.
    pub fn ensure_one(&mut self, rng: &mut impl Rng) {
        if self.hazard.is_some() || self.spawn_cooldown > 0.0 {
            return;
        }
        self.hazard = Some(self.spawn(rng));
    }

    fn spawn(&self, rng: &mut impl Rng) -> Hazard {
        let vp = self.viewport.viewport();
        let center = vp.center();

        // Aim at a point uniform in a disk around the center so every
        // trajectory crosses the middle region without converging on one
        // pixel.
        let spread = vp.min_dim() * TARGET_SPREAD_FRAC;
        let aim_dir = Vec2::from_angle(rng.random_range(0.0..TAU));
        let aim_dist = spread * rng.random_range(0.0f32..1.0).sqrt();
        let target = center + aim_dir * aim_dist;

        let side: u8 = rng.random_range(0..4);
        let pos = match side {
            0 => Vec2::new(
                rng.random_range(-SPAWN_MARGIN..vp.width + SPAWN_MARGIN),
                -SPAWN_MARGIN,
            ),
            1 => Vec2::new(
                vp.width + SPAWN_MARGIN,
                rng.random_range(-SPAWN_MARGIN..vp.height + SPAWN_MARGIN),
            ),
            2 => Vec2::new(
                rng.random_range(-SPAWN_MARGIN..vp.width + SPAWN_MARGIN),
                vp.height + SPAWN_MARGIN,
            ),
            _ => Vec2::new(
                -SPAWN_MARGIN,
                rng.random_range(-SPAWN_MARGIN..vp.height + SPAWN_MARGIN),
            ),
        };

        let speed =
            rng.random_range(HAZARD_SPEED_MIN..HAZARD_SPEED_MAX) * self.speed.speed_multiplier();
        let vel = (target - pos).normalize_or_zero() * speed;

        let radius = rng.random_range(HAZARD_RADIUS_MIN..HAZARD_RADIUS_MAX);
        let verts = rng.random_range(OUTLINE_VERTS_MIN..=OUTLINE_VERTS_MAX);
        let outline = (0..verts)
            .map(|i| OutlinePoint {
                angle: i as f32 / verts as f32 * TAU,
                dist: radius * rng.random_range(OUTLINE_JITTER_MIN..OUTLINE_JITTER_MAX),
            })
            .collect();

        Hazard {
            pos,
            vel,
            radius,
            angle: rng.random_range(0.0..TAU),
            spin: rng.random_range(-HAZARD_SPIN_MAX..HAZARD_SPIN_MAX),
            hp: 1,
            outline,
        }
    }

    /// Advance one step: tick the spawn delay, spawn when ready, integrate
    /// motion, and despawn anything that left the padded play area.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> UpdateReport {
        if self.spawn_cooldown > 0.0 {
            self.spawn_cooldown = (self.spawn_cooldown - dt).max(0.0);
        }
        self.ensure_one(rng);

        let Some(hazard) = self.hazard.as_mut() else {
            return UpdateReport::default();
        };

        hazard.pos += hazard.vel * dt;
        hazard.angle += hazard.spin * dt;

        let vp = self.viewport.viewport();
        let missed = hazard.pos.x < -EXIT_PAD
            || hazard.pos.x > vp.width + EXIT_PAD
            || hazard.pos.y < -EXIT_PAD
            || hazard.pos.y > vp.height + EXIT_PAD;
        if missed {
            self.hazard = None;
            self.arm_cooldown(rng);
        }
        UpdateReport { missed }
    }

    /// Destroy the hazard if `point` falls inside it (boundary counts).
    pub fn try_hit(&mut self, point: Vec2, rng: &mut impl Rng) -> Option<HitInfo> {
        let hazard = self.hazard.as_ref()?;
        if (point - hazard.pos).length_squared() > hazard.radius * hazard.radius {
            return None;
        }
        let info = HitInfo {
            center: hazard.pos,
            radius: hazard.radius,
        };
        self.hazard = None;
        self.arm_cooldown(rng);
        Some(info)
    }

    #[cfg(test)]
    pub(crate) fn hazard_mut(&mut self) -> Option<&mut Hazard> {
        self.hazard.as_mut()
    }
}
