//! Real-time simulation core
//!
//! Everything that decides gameplay lives here. The module stays pure with
//! respect to the host:
//! - Time arrives as monotonic millisecond timestamps from an injected source
//! - Viewport size and speed scaling are read through narrow interfaces
//! - Randomness is a seeded RNG passed in per call
//! - Per-frame output leaves as a read-only snapshot
//!
//! No rendering, no I/O.

use glam::Vec2;

pub mod clock;
pub mod game;
pub mod hazard;
pub mod particles;
pub mod snapshot;

pub use clock::RunClock;
pub use game::{Game, GameConfig, RunPhase};
pub use hazard::{Hazard, HazardSystem, HitInfo, OutlinePoint, UpdateReport};
pub use particles::{Particle, ParticlesSystem, Ring};
pub use snapshot::{FrameSnapshot, HudStats};

/// Play-area size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Geometric center of the play area.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Shorter of the two dimensions.
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Source of the current play-area size.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

/// Source of the current hazard speed multiplier (settings x difficulty).
pub trait SpeedSource {
    fn speed_multiplier(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_center_and_min_dim() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.center(), Vec2::new(400.0, 300.0));
        assert_eq!(vp.min_dim(), 600.0);

        let tall = Viewport::new(400.0, 900.0);
        assert_eq!(tall.min_dim(), 400.0);
    }
}
