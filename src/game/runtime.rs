//! Game runtime
//!
//! The scene owns every piece of game state (course geometry, the player,
//! the temporary platform slot, input edge latches) and advances it one
//! tick per frame in a fixed order:
//!
//! 1. Temporary platform: expire, then handle a placement press
//! 2. Player movement against static platforms + the temporary one
//! 3. Spike check against the committed player position
//!
//! Rendering reads the scene through the query methods afterwards.

use crate::geometry::Aabb;
use crate::input::{EdgeTrigger, InputSnapshot};
use super::camera::CameraView;
use super::entity::{Drawable, Obstacle, Platform};
use super::ephemeral::EphemeralPlatform;
use super::event::{Events, JumpEvent, PlatformExpiredEvent, PlatformPlacedEvent, RespawnEvent};
use super::hazard::check_hazards;
use super::player::Player;
use super::settings::GameSettings;

/// Fixed course layout
pub mod course {
    /// Player start
    pub const SPAWN: (f32, f32) = (150.0, 100.0);

    /// Platforms as (x, y, width, height). The first is the ground.
    pub const PLATFORMS: [(f32, f32, f32, f32); 7] = [
        (0.0, 950.0, 2000.0, 50.0),
        (300.0, 800.0, 250.0, 30.0),
        (700.0, 700.0, 250.0, 30.0),
        (1300.0, 850.0, 300.0, 25.0),
        (1700.0, 600.0, 200.0, 30.0),
        (1800.0, 400.0, 120.0, 30.0),
        (100.0, 650.0, 180.0, 20.0),
    ];

    /// Spike size (square)
    pub const SPIKE_SIZE: f32 = 40.0;

    /// Spike top-left corners
    pub const SPIKES: [(f32, f32); 4] = [
        (500.0, 920.0),
        (900.0, 670.0),
        (1350.0, 820.0),
        (1800.0, 570.0),
    ];
}

/// All game state for one play session
pub struct Scene {
    settings: GameSettings,
    platforms: Vec<Platform>,
    obstacles: Vec<Obstacle>,
    player: Player,
    ephemeral: EphemeralPlatform,
    /// Place-platform key latch (one placement per press)
    place_trigger: EdgeTrigger,
    /// What happened during the last tick
    events: Events,
    deaths: u32,
    ticks: u64,
}

impl Scene {
    /// Build the standard course
    pub fn new(settings: GameSettings) -> Self {
        let platforms = course::PLATFORMS
            .iter()
            .map(|&(x, y, w, h)| Platform::solid(x, y, w, h))
            .collect();
        let obstacles = course::SPIKES
            .iter()
            .map(|&(x, y)| Obstacle::spike(x, y, course::SPIKE_SIZE))
            .collect();
        Self::with_layout(settings, platforms, obstacles, course::SPAWN)
    }

    /// Build a scene from explicit geometry
    pub fn with_layout(
        settings: GameSettings,
        platforms: Vec<Platform>,
        obstacles: Vec<Obstacle>,
        spawn: (f32, f32),
    ) -> Self {
        log::info!(
            "scene: {} platforms, {} spikes, spawn ({}, {}), world {}x{}",
            platforms.len(),
            obstacles.len(),
            spawn.0,
            spawn.1,
            settings.world.width,
            settings.world.height
        );
        Self {
            settings,
            platforms,
            obstacles,
            player: Player::new(spawn.0, spawn.1, settings.player),
            ephemeral: EphemeralPlatform::new(settings.ephemeral),
            place_trigger: EdgeTrigger::new(),
            events: Events::new(),
            deaths: 0,
            ticks: 0,
        }
    }

    /// Run one frame of game simulation
    pub fn tick(&mut self, input: &InputSnapshot, now_ms: u64) {
        self.events.clear_all();
        self.ticks += 1;

        // =====================================================================
        // Temporary platform: must settle before the player collides
        // =====================================================================
        // Expiry runs before the placement press, so a press on the tick the
        // old platform expires places a new one straight away (cooldown
        // permitting) instead of being rejected against the dying platform.
        if self.ephemeral.tick(now_ms) {
            self.events.platform_expired.send(PlatformExpiredEvent { at_ms: now_ms });
        }

        if self.place_trigger.update(input.place)
            && self.ephemeral.request_spawn(&self.player.bounds(), now_ms)
        {
            if let Some(platform) = self.ephemeral.platform() {
                self.events.platform_placed.send(PlatformPlacedEvent {
                    bounds: platform.bounds,
                    at_ms: now_ms,
                });
            }
        }

        // =====================================================================
        // Player movement
        // =====================================================================
        let all_platforms = self.platforms.iter().chain(self.ephemeral.platform());
        let result = self.player.update(input, all_platforms, &self.settings.world);
        if result.jumped {
            self.events.jump.send(JumpEvent {
                jumps_left: self.player.jumps_available,
            });
        }

        // =====================================================================
        // Spikes: checked against the committed position
        // =====================================================================
        let death_position = (self.player.x, self.player.y);
        let hits = check_hazards(&mut self.player, &self.obstacles);
        if hits > 0 {
            self.deaths += 1;
            self.events.respawn.send(RespawnEvent {
                death_position,
                obstacles_hit: hits,
            });
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_bounds(&self) -> Aabb {
        self.player.bounds()
    }

    /// Active platforms: static ones in course order, then the temporary one
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().chain(self.ephemeral.platform())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn ephemeral(&self) -> &EphemeralPlatform {
        &self.ephemeral
    }

    /// Camera offset for a viewport of the given size
    pub fn camera(&self, viewport_w: f32, viewport_h: f32) -> CameraView {
        CameraView::follow(&self.player_bounds(), &self.settings.world, viewport_w, viewport_h)
    }

    /// Everything to draw, back to front: platforms, spikes, player
    pub fn drawables(&self) -> impl Iterator<Item = Drawable> + '_ {
        self.platforms()
            .map(|p| Drawable::Platform(*p))
            .chain(self.obstacles().iter().map(|o| Drawable::Obstacle(*o)))
            .chain(std::iter::once(Drawable::Player(self.player_bounds())))
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
