//! Aster Click - a reflex clicker against a single drifting hazard
//!
//! Core modules:
//! - `sim`: simulation engine (run clock, hazard, particles, orchestration)
//! - `platform`: host capabilities (time source, input coalescing, shared cells)
//! - `settings`: player configuration with patch merging
//! - `stats`: run counters and the last-run summary
//! - `persistence`: JSON file storage for settings and results

pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod stats;

pub use settings::{Settings, SettingsPatch};
pub use sim::{Game, GameConfig, Viewport};
pub use stats::RunSummary;

/// Game tuning constants
pub mod consts {
    /// Longest frame delta the simulation will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// How far beyond the viewport edge hazards spawn (pixels)
    pub const SPAWN_MARGIN: f32 = 80.0;
    /// Hazards this far outside the viewport count as escaped (pixels)
    pub const EXIT_PAD: f32 = 120.0;
    /// Radius of the aim disk around the viewport center, as a fraction of
    /// the shorter dimension
    pub const TARGET_SPREAD_FRAC: f32 = 0.28;

    /// Hazard base speed range before multipliers (pixels/sec)
    pub const HAZARD_SPEED_MIN: f32 = 38.0;
    pub const HAZARD_SPEED_MAX: f32 = 78.0;
    /// Hazard radius range (pixels)
    pub const HAZARD_RADIUS_MIN: f32 = 22.0;
    pub const HAZARD_RADIUS_MAX: f32 = 46.0;
    /// Hazard spin limit, either direction (radians/sec)
    pub const HAZARD_SPIN_MAX: f32 = 0.7;
    /// Silhouette vertex count range
    pub const OUTLINE_VERTS_MIN: usize = 7;
    pub const OUTLINE_VERTS_MAX: usize = 11;
    /// Silhouette radial jitter range (fraction of the radius)
    pub const OUTLINE_JITTER_MIN: f32 = 0.75;
    pub const OUTLINE_JITTER_MAX: f32 = 1.15;
    /// Delay before the next spawn after a destroy or escape (seconds)
    pub const SPAWN_COOLDOWN_MIN: f32 = 0.2;
    pub const SPAWN_COOLDOWN_MAX: f32 = 0.5;

    /// Difficulty ramp: +10% hazard speed per 10 seconds played, capped
    pub const DIFFICULTY_STEP: f32 = 0.1;
    pub const DIFFICULTY_STEP_SECS: f64 = 10.0;
    pub const DIFFICULTY_MAX: f32 = 3.0;

    /// Explosion particle count clamp
    pub const EXPLODE_COUNT_MIN: f32 = 12.0;
    pub const EXPLODE_COUNT_MAX: f32 = 30.0;
    /// Particle launch speed range before power scaling (pixels/sec)
    pub const PARTICLE_SPEED_MIN: f32 = 50.0;
    pub const PARTICLE_SPEED_MAX: f32 = 220.0;
    /// Particle lifespan range (seconds)
    pub const PARTICLE_LIFE_MIN: f32 = 0.25;
    pub const PARTICLE_LIFE_MAX: f32 = 0.7;
    /// Particle size range (pixels)
    pub const PARTICLE_SIZE_MIN: f32 = 1.0;
    pub const PARTICLE_SIZE_MAX: f32 = 3.0;
    /// Velocity damping factor per 60 Hz frame
    pub const PARTICLE_DAMPING: f32 = 0.92;

    /// Miss-feedback ring lifespan (seconds) and radius sweep (pixels)
    pub const RING_LIFE: f32 = 0.35;
    pub const RING_RADIUS_START: f32 = 6.0;
    pub const RING_RADIUS_END: f32 = 28.0;
}

/// Format a run duration as m:ss
pub fn format_run_time(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
