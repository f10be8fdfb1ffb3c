//! Per-frame orchestration
//!
//! `Game` wires the clock, input, hazard, and particle pieces together and
//! owns the run state machine. One `frame()` call per display frame drives
//! everything; the returned snapshot is the only output.

use std::rc::Rc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::platform::input::InputBuffer;
use crate::platform::providers::{SharedSpeed, SharedViewport};
use crate::platform::time::Clock;
use crate::settings::{Settings, SettingsPatch};
use crate::stats::{RunStats, RunSummary};

use super::{SpeedSource, Viewport, ViewportSource};
use super::clock::RunClock;
use super::hazard::HazardSystem;
use super::particles::ParticlesSystem;
use super::snapshot::{FrameSnapshot, HudStats};

/// Coarse run state. The quit-confirm overlay is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Idle on the start screen, nothing simulating.
    Start,
    /// A run is underway (possibly paused).
    Playing,
}

/// Construction parameters for a `Game`.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seed for the run's RNG stream.
    pub seed: u64,
    /// Initial play-area size.
    pub viewport: Viewport,
    pub settings: Settings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::new(1280.0, 720.0),
            settings: Settings::default(),
        }
    }
}

/// The simulation orchestrator.
pub struct Game {
    settings: Settings,
    clock: RunClock,
    time: Box<dyn Clock>,
    input: InputBuffer,
    stats: RunStats,
    hazards: HazardSystem,
    particles: ParticlesSystem,
    rng: Pcg32,
    phase: RunPhase,
    confirm_pending: bool,
    /// Set when the quit-confirm overlay took the pause itself.
    confirm_paused: bool,
    difficulty_mul: f32,
    viewport: Rc<SharedViewport>,
    speed: Rc<SharedSpeed>,
    last_frame_ms: Option<f64>,
}

impl Game {
    pub fn new(config: GameConfig, time: Box<dyn Clock>) -> Self {
        let viewport = Rc::new(SharedViewport::new(config.viewport));
        let speed = Rc::new(SharedSpeed::new(config.settings.speed_multiplier()));
        let hazards = HazardSystem::new(
            Rc::clone(&viewport) as Rc<dyn ViewportSource>,
            Rc::clone(&speed) as Rc<dyn SpeedSource>,
        );

        Self {
            settings: config.settings,
            clock: RunClock::new(),
            time,
            input: InputBuffer::new(),
            stats: RunStats::new(),
            hazards,
            particles: ParticlesSystem::new(),
            rng: Pcg32::seed_from_u64(config.seed),
            phase: RunPhase::Start,
            confirm_pending: false,
            confirm_paused: false,
            difficulty_mul: 1.0,
            viewport,
            speed,
            last_frame_ms: None,
        }
    }

    /// Advance one display frame and return the view to draw.
    ///
    /// Consumes the input buffered since the previous frame, applies pause
    /// and quit intents, and steps the simulation by the elapsed time
    /// (clamped so a stalled host cannot produce a huge jump).
    pub fn frame(&mut self) -> FrameSnapshot<'_> {
        let now = self.time.now_ms();
        let dt = match self.last_frame_ms {
            Some(last) => (((now - last) / 1000.0) as f32).min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_frame_ms = Some(now);

        let input = self.input.take();

        if input.toggle_pause {
            self.toggle_pause();
        }

        // While the quit confirmation is open the world stays frozen and
        // clicks are swallowed.
        if self.confirm_pending {
            return self.snapshot(now);
        }

        if input.quit {
            self.open_confirm_end();
        }

        self.update(dt, now, input.click);
        self.snapshot(now)
    }

    fn update(&mut self, dt: f32, now: f64, click: Option<Vec2>) {
        if self.phase != RunPhase::Playing || self.clock.paused() {
            return;
        }

        let elapsed = self.clock.elapsed_seconds(now);
        self.difficulty_mul = if self.settings.difficulty_progression {
            (1.0 + (elapsed / DIFFICULTY_STEP_SECS).floor() as f32 * DIFFICULTY_STEP)
                .min(DIFFICULTY_MAX)
        } else {
            1.0
        };
        self.speed
            .set(self.settings.speed_multiplier() * self.difficulty_mul);

        if let Some(point) = click {
            self.stats.record_click();
            match self.hazards.try_hit(point, &mut self.rng) {
                Some(hit) => {
                    self.stats.record_destroyed();
                    self.particles.explode(hit.center, hit.radius, &mut self.rng);
                }
                None => self.particles.ping(point),
            }
        }

        let report = self.hazards.update(dt, &mut self.rng);
        if report.missed {
            self.stats.record_miss();
        }

        self.particles.update(dt);
    }

    fn snapshot(&self, now: f64) -> FrameSnapshot<'_> {
        let time_secs = if self.phase == RunPhase::Playing {
            self.clock.elapsed_seconds(now)
        } else {
            0.0
        };
        FrameSnapshot {
            hazard: self.hazards.hazard(),
            particles: self.particles.particles(),
            rings: self.particles.rings(),
            hud: HudStats {
                destroyed: self.stats.destroyed(),
                misses: self.stats.misses(),
                time_secs,
                paused: self.clock.paused(),
            },
        }
    }

    /// Begin a fresh run, discarding whatever was on screen.
    pub fn start(&mut self) {
        self.stats.reset();
        self.particles.clear();
        self.hazards.clear();
        self.difficulty_mul = 1.0;
        self.speed.set(self.settings.speed_multiplier());
        self.confirm_pending = false;
        self.confirm_paused = false;

        self.clock.start(self.time.now_ms());
        self.phase = RunPhase::Playing;
        log::info!("run started");
    }

    /// Finish the active run and return its summary. Returns `None` when no
    /// run was in progress.
    pub fn end(&mut self) -> Option<RunSummary> {
        self.confirm_pending = false;
        self.confirm_paused = false;

        if self.phase != RunPhase::Playing {
            return None;
        }

        let time_secs = self.clock.elapsed_seconds(self.time.now_ms());
        self.clock.stop();

        let summary = self.stats.finalize(time_secs);

        self.particles.clear();
        self.hazards.clear();
        self.phase = RunPhase::Start;
        log::info!(
            "run ended: {} destroyed, {} escaped in {:.1}s",
            summary.destroyed,
            summary.misses,
            summary.time_secs
        );
        Some(summary)
    }

    /// Pause or resume the active run. Ignored outside a run and while the
    /// quit confirmation is open.
    pub fn toggle_pause(&mut self) {
        if self.phase != RunPhase::Playing || self.confirm_pending {
            return;
        }
        self.clock.toggle_pause(self.time.now_ms());
    }

    /// Open the quit confirmation, pausing the run if it was not already.
    pub fn open_confirm_end(&mut self) {
        if self.phase != RunPhase::Playing {
            return;
        }
        if !self.clock.paused() {
            self.clock.toggle_pause(self.time.now_ms());
            self.confirm_paused = true;
        }
        self.confirm_pending = true;
    }

    /// Dismiss the quit confirmation. Resumes only a pause the overlay
    /// itself took; a run the player paused stays paused.
    pub fn close_confirm_end(&mut self) {
        self.confirm_pending = false;
        if self.confirm_paused {
            if self.phase == RunPhase::Playing && self.clock.paused() {
                self.clock.toggle_pause(self.time.now_ms());
            }
            self.confirm_paused = false;
        }
    }

    /// Merge a settings patch into the active configuration.
    pub fn apply_settings(&mut self, patch: &SettingsPatch) {
        self.settings = self.settings.merged(patch);
        self.speed
            .set(self.settings.speed_multiplier() * self.difficulty_mul);
    }

    /// Propagate a host window resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport.set(Viewport::new(width, height));
    }

    /// Queue a click for the next frame. The latest click in a frame wins.
    pub fn push_click(&mut self, pos: Vec2) {
        self.input.push_click(pos);
    }

    /// Queue a pause toggle for the next frame.
    pub fn request_pause(&mut self) {
        self.input.request_pause();
    }

    /// Queue a quit request for the next frame.
    pub fn request_quit(&mut self) {
        self.input.request_quit();
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.clock.paused()
    }

    pub fn confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current time-based speed scaling, 1.0 to the cap.
    pub fn difficulty_multiplier(&self) -> f32 {
        self.difficulty_mul
    }

    #[cfg(test)]
    pub(crate) fn hazards_mut(&mut self) -> &mut HazardSystem {
        &mut self.hazards
    }
}
