//! Game action definitions
//!
//! Keyboard: arrows move, Up/Space jumps, Down places a platform.
//! Gamepad: D-pad or left stick moves, A/Cross jumps, D-pad down or
//! X/Square places a platform.

/// All actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    PlacePlatform,

    // System
    ToggleDebug,    // F3 / Select
    Quit,           // Escape
}

/// Held state of the gameplay actions, sampled once at tick start.
/// This is all the simulation sees of the input devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Place-platform key held (the scene turns this into a press edge)
    pub place: bool,
}
