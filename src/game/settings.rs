//! Tuning settings
//!
//! All gameplay constants live here: world size, player kinematics, and the
//! temporary platform's size and timers. Defaults reproduce the shipped feel.
//! Settings can be overridden from a RON file; this is tuning only, the
//! course layout itself is fixed in code.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Jumps granted on landing (ground jump + one air jump)
pub const MAX_JUMPS: u8 = 2;

/// Size of the playable world. Read-only, shared by reference with the
/// player controller and the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 1000.0,
        }
    }
}

/// Player kinematics. Units are pixels and pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Collision box width
    pub width: f32,
    /// Collision box height
    pub height: f32,
    /// Added to vertical velocity every tick (+Y is down)
    pub gravity: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_strength: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            gravity: 0.5,
            jump_strength: -10.0,
            move_speed: 3.0,
        }
    }
}

/// The player-placed temporary platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemeralSettings {
    pub width: f32,
    pub height: f32,
    /// Gap between the player's feet and the platform top
    pub drop_gap: f32,
    /// How long a placed platform stays (ms)
    pub lifetime_ms: u64,
    /// Minimum time between two placements, measured from placement (ms)
    pub cooldown_ms: u64,
}

impl Default for EphemeralSettings {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 15.0,
            drop_gap: 2.0,
            lifetime_ms: 5000,
            cooldown_ms: 5000,
        }
    }
}

/// Everything tunable in one place
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub world: WorldBounds,
    pub player: PlayerSettings,
    pub ephemeral: EphemeralSettings,
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::SerializeError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

fn check_positive(name: &str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::ValidationError(format!(
            "{} must be a positive finite number (got {})", name, value
        )))
    }
}

/// Reject settings that would produce degenerate boxes or a broken jump.
pub fn validate_settings(settings: &GameSettings) -> Result<(), SettingsError> {
    check_positive("world.width", settings.world.width)?;
    check_positive("world.height", settings.world.height)?;

    let p = &settings.player;
    check_positive("player.width", p.width)?;
    check_positive("player.height", p.height)?;
    check_positive("player.gravity", p.gravity)?;
    check_positive("player.move_speed", p.move_speed)?;
    if !(p.jump_strength.is_finite() && p.jump_strength < 0.0) {
        return Err(SettingsError::ValidationError(format!(
            "player.jump_strength must be negative (up), got {}", p.jump_strength
        )));
    }
    if p.width > settings.world.width || p.height > settings.world.height {
        return Err(SettingsError::ValidationError(format!(
            "player ({}x{}) does not fit in world ({}x{})",
            p.width, p.height, settings.world.width, settings.world.height
        )));
    }

    let e = &settings.ephemeral;
    check_positive("ephemeral.width", e.width)?;
    check_positive("ephemeral.height", e.height)?;
    if !(e.drop_gap.is_finite() && e.drop_gap >= 0.0) {
        return Err(SettingsError::ValidationError(format!(
            "ephemeral.drop_gap must be >= 0, got {}", e.drop_gap
        )));
    }

    Ok(())
}

/// Parse settings from a RON string. Missing fields take their defaults.
pub fn parse_settings(contents: &str) -> Result<GameSettings, SettingsError> {
    let settings: GameSettings = ron::from_str(contents)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Load settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GameSettings, SettingsError> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_settings(&contents)
}

/// Save settings as pretty-printed RON
pub fn save_settings<P: AsRef<Path>>(settings: &GameSettings, path: P) -> Result<(), SettingsError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    let ron_string = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}
