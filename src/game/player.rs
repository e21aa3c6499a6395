//! Player controller
//!
//! Per-tick kinematics for the player box: instant horizontal speed, an
//! edge-gated double jump, constant gravity, landing on platforms from above,
//! and clamping to the world. Platforms are one-way: the player passes
//! through them when moving up or sideways and only lands when coming down.

use crate::geometry::Aabb;
use crate::input::InputSnapshot;
use super::entity::Platform;
use super::settings::{PlayerSettings, WorldBounds, MAX_JUMPS};

/// What happened during one [`Player::update`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveResult {
    /// A jump started this tick
    pub jumped: bool,
}

/// Player kinematic state
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    /// Jumps left before the next landing (0..=MAX_JUMPS)
    pub jumps_available: u8,
    /// Jump key latch: set on jump, cleared when the key is released
    pub jump_in_progress: bool,
    spawn_x: f32,
    spawn_y: f32,
    settings: PlayerSettings,
}

impl Player {
    pub fn new(spawn_x: f32, spawn_y: f32, settings: PlayerSettings) -> Self {
        Self {
            x: spawn_x,
            y: spawn_y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            jumps_available: MAX_JUMPS,
            jump_in_progress: false,
            spawn_x,
            spawn_y,
            settings,
        }
    }

    pub fn spawn_point(&self) -> (f32, f32) {
        (self.spawn_x, self.spawn_y)
    }

    /// Current collision box
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.settings.width, self.settings.height)
    }

    /// Advance one tick.
    ///
    /// `platforms` is scanned in full; when several platforms qualify for a
    /// landing in the same tick the last one in iteration order decides the
    /// resting height.
    pub fn update<'a, I>(&mut self, input: &InputSnapshot, platforms: I, world: &WorldBounds) -> MoveResult
    where
        I: IntoIterator<Item = &'a Platform>,
    {
        let s = self.settings;
        let w = s.width;
        let h = s.height;
        let mut result = MoveResult::default();

        // Horizontal: no acceleration, no friction
        self.velocity_x = 0.0;
        if input.left {
            self.velocity_x -= s.move_speed;
        }
        if input.right {
            self.velocity_x += s.move_speed;
        }

        // One jump per press
        if input.jump {
            if self.jumps_available > 0 && !self.jump_in_progress {
                self.velocity_y = s.jump_strength;
                self.on_ground = false;
                self.jumps_available -= 1;
                self.jump_in_progress = true;
                result.jumped = true;
            }
        } else {
            self.jump_in_progress = false;
        }

        self.velocity_y += s.gravity;

        let next_x = self.x + self.velocity_x;
        let mut next_y = self.y + self.velocity_y;
        let mut landed = false;

        for plat in platforms {
            let p = &plat.bounds;
            let within_x = next_x + w > p.x && next_x < p.right();
            let falling_onto = self.y + h <= p.y && next_y + h >= p.y;
            if within_x && falling_onto && self.velocity_y >= 0.0 {
                next_y = p.y - h;
                self.velocity_y = 0.0;
                landed = true;
            }
        }

        self.x = next_x;
        self.y = next_y;
        self.on_ground = landed;

        // World borders
        if self.x < 0.0 {
            self.x = 0.0;
        }
        if self.x + w > world.width {
            self.x = world.width - w;
        }
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + h > world.height {
            self.y = world.height - h;
            self.velocity_y = 0.0;
            self.on_ground = true;
        }

        if self.on_ground {
            self.jumps_available = MAX_JUMPS;
        }

        result
    }

    /// Back to spawn with no momentum and a full set of jumps.
    /// Leaves the jump latch and grounded flag for the next tick to re-derive.
    pub fn die(&mut self) {
        (self.x, self.y) = self.spawn_point();
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.jumps_available = MAX_JUMPS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: InputSnapshot = InputSnapshot { left: false, right: false, jump: false, place: false };
    const JUMP: InputSnapshot = InputSnapshot { left: false, right: false, jump: true, place: false };

    fn world() -> WorldBounds {
        WorldBounds::default()
    }

    fn no_platforms() -> Vec<Platform> {
        Vec::new()
    }

    fn floor() -> Vec<Platform> {
        vec![Platform::solid(0.0, 950.0, 2000.0, 50.0)]
    }

    /// A player standing on the floor platform
    fn grounded_player() -> (Player, Vec<Platform>) {
        let platforms = floor();
        let mut player = Player::new(150.0, 900.0, PlayerSettings::default());
        player.update(&IDLE, &platforms, &world());
        assert!(player.on_ground);
        (player, platforms)
    }

    #[test]
    fn test_falls_to_rest_on_floor_platform() {
        let platforms = floor();
        let mut player = Player::new(150.0, 100.0, PlayerSettings::default());

        for _ in 0..200 {
            player.update(&IDLE, &platforms, &world());
        }

        assert_eq!(player.y, 900.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(player.on_ground);
        assert_eq!(player.jumps_available, 2);
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let platforms = vec![Platform::solid(100.0, 500.0, 200.0, 20.0)];
        let mut player = Player::new(120.0, 440.0, PlayerSettings::default());
        player.velocity_y = 12.0;

        let result = player.update(&IDLE, &platforms, &world());

        assert!(!result.jumped);
        assert_eq!(player.y, 450.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_passes_through_platform_from_below() {
        let platforms = vec![Platform::solid(100.0, 500.0, 200.0, 20.0)];
        // Head just under the platform, moving up
        let mut player = Player::new(120.0, 525.0, PlayerSettings::default());
        player.velocity_y = -10.0;

        player.update(&IDLE, &platforms, &world());

        assert!(player.y < 525.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_misses_platform_horizontally() {
        let platforms = vec![Platform::solid(100.0, 500.0, 200.0, 20.0)];
        // Right edge exactly on platform's left edge: no horizontal overlap
        let mut player = Player::new(50.0, 440.0, PlayerSettings::default());
        player.velocity_y = 12.0;

        player.update(&IDLE, &platforms, &world());

        assert!(!player.on_ground);
        assert!(player.y > 450.0);
    }

    #[test]
    fn test_overlapping_platforms_settle_on_highest_top() {
        // Both tops are crossed in the same tick. Scanning in order, a later
        // platform only overrides the snap if its top is higher, so the
        // highest top wins whichever order the platforms come in.
        let platforms = vec![
            Platform::solid(100.0, 500.0, 200.0, 20.0),
            Platform::solid(100.0, 495.0, 200.0, 20.0),
        ];
        let mut player = Player::new(120.0, 440.0, PlayerSettings::default());
        player.velocity_y = 12.0;
        player.update(&IDLE, &platforms, &world());
        assert_eq!(player.y, 445.0);

        let reversed: Vec<Platform> = platforms.iter().rev().copied().collect();
        let mut player = Player::new(120.0, 440.0, PlayerSettings::default());
        player.velocity_y = 12.0;
        player.update(&IDLE, &reversed, &world());
        assert_eq!(player.y, 445.0);
    }

    #[test]
    fn test_horizontal_movement() {
        let (mut player, platforms) = grounded_player();
        let left = InputSnapshot { left: true, ..IDLE };
        let right = InputSnapshot { right: true, ..IDLE };
        let both = InputSnapshot { left: true, right: true, ..IDLE };

        player.update(&right, &platforms, &world());
        assert_eq!(player.x, 153.0);
        player.update(&left, &platforms, &world());
        assert_eq!(player.x, 150.0);
        player.update(&both, &platforms, &world());
        assert_eq!(player.x, 150.0);
        assert_eq!(player.velocity_x, 0.0);
    }

    #[test]
    fn test_double_jump_edges() {
        let (mut player, platforms) = grounded_player();
        assert_eq!(player.jumps_available, 2);

        // Press: ground jump
        let r = player.update(&JUMP, &platforms, &world());
        assert!(r.jumped);
        assert_eq!(player.jumps_available, 1);
        assert_eq!(player.velocity_y, -9.5);

        // Holding does nothing more
        let r = player.update(&JUMP, &platforms, &world());
        assert!(!r.jumped);
        assert_eq!(player.jumps_available, 1);

        // Release, press again: air jump
        player.update(&IDLE, &platforms, &world());
        let r = player.update(&JUMP, &platforms, &world());
        assert!(r.jumped);
        assert_eq!(player.jumps_available, 0);
        assert_eq!(player.velocity_y, -9.5);

        // Release, third press before landing: ignored
        player.update(&IDLE, &platforms, &world());
        let vy_before = player.velocity_y;
        let r = player.update(&JUMP, &platforms, &world());
        assert!(!r.jumped);
        assert_eq!(player.jumps_available, 0);
        assert_eq!(player.velocity_y, vy_before + 0.5);
    }

    #[test]
    fn test_jumps_refill_on_landing() {
        let (mut player, platforms) = grounded_player();
        player.update(&JUMP, &platforms, &world());
        player.update(&IDLE, &platforms, &world());
        player.update(&JUMP, &platforms, &world());
        assert_eq!(player.jumps_available, 0);

        for _ in 0..100 {
            player.update(&IDLE, &platforms, &world());
        }
        assert!(player.on_ground);
        assert_eq!(player.jumps_available, 2);
        assert_eq!(player.y, 900.0);
    }

    #[test]
    fn test_world_clamp() {
        let mut player = Player::new(0.0, 0.0, PlayerSettings::default());
        let left = InputSnapshot { left: true, ..IDLE };
        player.velocity_y = -20.0;
        player.update(&left, &no_platforms(), &world());
        assert_eq!(player.x, 0.0);
        assert_eq!(player.y, 0.0);

        let mut player = Player::new(1949.0, 0.0, PlayerSettings::default());
        let right = InputSnapshot { right: true, ..IDLE };
        player.update(&right, &no_platforms(), &world());
        assert_eq!(player.x, 1950.0);
    }

    #[test]
    fn test_world_floor_grounds_player() {
        let mut player = Player::new(150.0, 945.0, PlayerSettings::default());
        player.velocity_y = 8.0;
        player.jumps_available = 0;

        player.update(&IDLE, &no_platforms(), &world());

        assert_eq!(player.y, 950.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(player.on_ground);
        assert_eq!(player.jumps_available, 2);
    }

    #[test]
    fn test_die_resets_to_spawn() {
        let (mut player, platforms) = grounded_player();
        let right = InputSnapshot { right: true, jump: true, ..IDLE };
        player.update(&right, &platforms, &world());
        player.update(&right, &platforms, &world());
        assert!(player.jump_in_progress);

        player.die();

        assert_eq!((player.x, player.y), player.spawn_point());
        assert_eq!(player.velocity_x, 0.0);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.jumps_available, 2);
        // Latch survives; the next tick's input decides
        assert!(player.jump_in_progress);
    }
}
