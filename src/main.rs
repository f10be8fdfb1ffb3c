//! Headless demo session
//!
//! Drives the engine with a scripted pilot for twenty seconds, clicking
//! near the hazard at random, then prints and persists the result.

use std::f32::consts::TAU;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use aster_click::format_run_time;
use aster_click::persistence::Store;
use aster_click::platform::MonotonicClock;
use aster_click::sim::{Game, GameConfig, Viewport};

const SESSION_SECS: f64 = 20.0;
const CLICK_CHANCE: f64 = 0.04;

fn main() {
    env_logger::init();

    let store = Store::new("aster-click-data");
    let settings = store.load_settings();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(42);
    log::info!("session seed: {seed}");

    let config = GameConfig {
        seed,
        viewport: Viewport::new(1280.0, 720.0),
        settings,
    };
    let mut game = Game::new(config, Box::new(MonotonicClock::new()));
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x5eed);

    game.start();
    loop {
        let (time_secs, hazard) = {
            let snap = game.frame();
            (snap.hud.time_secs, snap.hazard.map(|h| (h.pos, h.radius)))
        };

        if time_secs >= SESSION_SECS {
            break;
        }

        // Aim somewhere around the hazard; wide enough to miss sometimes.
        if let Some((pos, radius)) = hazard {
            if pilot.random_bool(CLICK_CHANCE) {
                let offset = Vec2::from_angle(pilot.random_range(0.0..TAU))
                    * pilot.random_range(0.0..radius * 1.6);
                game.push_click(pos + offset);
            }
        }

        thread::sleep(Duration::from_millis(16));
    }

    if let Some(summary) = game.end() {
        store.save_last_run(&summary);
        println!(
            "Run over: {} destroyed, {} escaped, {}% accuracy in {}",
            summary.destroyed,
            summary.misses,
            summary.accuracy(),
            format_run_time(summary.time_secs)
        );
    }
}
