//! AQUA Platformer: a 2D side-scroller
//!
//! Run and double jump across a fixed course, avoid the red spikes, and drop
//! a temporary aqua platform under your feet when a gap is too wide:
//! - Platforms are one-way (land from above, pass through from below)
//! - One temporary platform at a time, 5 s lifetime, 5 s cooldown
//! - The camera follows the player, clamped to the world

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod geometry;
mod game;
mod input;

use std::path::Path;
use macroquad::prelude::*;
use game::{draw_scene, load_settings, save_settings, GameSettings, Scene};
use input::{Action, InputState};

/// Optional tuning file, read from the working directory
const SETTINGS_PATH: &str = "aqua.ron";

/// How long the screen flashes red after touching a spike (ms)
const DEATH_FLASH_MS: u64 = 250;

fn window_conf() -> Conf {
    Conf {
        window_title: "2D Sidescroller - AQUA Platform Limited".to_string(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        ..Default::default()
    }
}

/// Load the tuning file if present. Otherwise write the built-in defaults
/// there so they can be edited for the next run.
fn settings_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        let defaults = GameSettings::default();
        match save_settings(&defaults, path) {
            Ok(()) => log::info!("wrote default settings to {}", path.display()),
            Err(e) => log::warn!("could not write {}: {}", path.display(), e),
        }
        return defaults;
    }
    match load_settings(path) {
        Ok(settings) => {
            log::info!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("ignoring {}: {}", path.display(), e);
            GameSettings::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("=== AQUA Platformer v{} ===", VERSION);

    let settings = settings_or_default(Path::new(SETTINGS_PATH));
    let mut scene = Scene::new(settings);
    let mut input = InputState::new();
    let mut show_debug = false;
    let mut last_death_ms: Option<u64> = None;

    let start = get_time();
    let mut now_ms = 0u64;

    loop {
        input.poll();

        if input.action_pressed(Action::Quit) {
            break;
        }
        if input.action_pressed(Action::ToggleDebug) {
            show_debug = !show_debug;
        }

        // Monotonic ms clock for the temporary platform timers
        now_ms = now_ms.max(((get_time() - start) * 1000.0) as u64);

        scene.tick(&input.snapshot(), now_ms);

        let events = scene.events();
        for placed in events.platform_placed.iter() {
            log::info!(
                "platform placed at ({:.0}, {:.0}) at {} ms",
                placed.bounds.x, placed.bounds.y, placed.at_ms
            );
        }
        for expired in events.platform_expired.iter() {
            log::info!("platform expired at {} ms", expired.at_ms);
        }
        for jump in events.jump.iter() {
            log::debug!("jump, {} left", jump.jumps_left);
        }
        for respawn in events.respawn.iter() {
            let (x, y) = respawn.death_position;
            log::info!(
                "hit {} spike(s) at ({:.0}, {:.0}), deaths: {}",
                respawn.obstacles_hit, x, y, scene.deaths()
            );
        }
        if !events.respawn.is_empty() {
            last_death_ms = Some(now_ms);
        }

        let (viewport_w, viewport_h) = (screen_width(), screen_height());
        draw_scene(&scene, &input, viewport_w, viewport_h, now_ms, show_debug);

        if let Some(died_at) = last_death_ms {
            let elapsed = now_ms.saturating_sub(died_at);
            if elapsed < DEATH_FLASH_MS {
                let alpha = 0.4 * (1.0 - elapsed as f32 / DEATH_FLASH_MS as f32);
                draw_rectangle(0.0, 0.0, viewport_w, viewport_h, Color::new(1.0, 0.0, 0.0, alpha));
            } else {
                last_death_ms = None;
            }
        }

        next_frame().await;
    }

    log::info!("bye after {} ticks, {} deaths", scene.ticks(), scene.deaths());
}
