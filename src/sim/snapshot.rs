//! Read-only per-frame view for the render layer

use super::hazard::Hazard;
use super::particles::{Particle, Ring};

/// HUD numbers for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub destroyed: u32,
    pub misses: u32,
    /// Play time in seconds; 0 outside an active run.
    pub time_secs: f64,
    pub paused: bool,
}

/// Everything a renderer needs for one frame, borrowed from the engine.
#[derive(Debug)]
pub struct FrameSnapshot<'a> {
    pub hazard: Option<&'a Hazard>,
    pub particles: &'a [Particle],
    pub rings: &'a [Ring],
    pub hud: HudStats,
}
