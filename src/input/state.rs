//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad (gilrs) input,
//! combining them into a unified action-based API.

use macroquad::prelude::*;
use super::gamepad::{button, mask_has, Gamepad};
use super::{Action, InputSnapshot};

/// Stick deflection that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// Gamepad buttons held last poll, for press detection
    last_buttons: u32,
    buttons: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            last_buttons: 0,
            buttons: 0,
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.last_buttons = self.buttons;
        self.buttons = self.gamepad.button_mask();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Sample the gameplay actions for this tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
            place: self.action_down(Action::PlacePlatform),
        }
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::Right),
            Action::Jump => is_key_down(KeyCode::Up) || is_key_down(KeyCode::Space),
            Action::PlacePlatform => is_key_down(KeyCode::Down),
            Action::ToggleDebug => is_key_down(KeyCode::F3),
            Action::Quit => is_key_down(KeyCode::Escape),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::Left),
            Action::MoveRight => is_key_pressed(KeyCode::Right),
            Action::Jump => is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::Space),
            Action::PlacePlatform => is_key_pressed(KeyCode::Down),
            Action::ToggleDebug => is_key_pressed(KeyCode::F3),
            Action::Quit => is_key_pressed(KeyCode::Escape),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        gamepad_action_down(self.buttons, self.gamepad.left_stick_x(), action)
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        // Stick directions have no press edge; only buttons do
        gamepad_action_down(self.buttons, 0.0, action)
            && !gamepad_action_down(self.last_buttons, 0.0, action)
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gamepad mapping, kept free of device state so it can be tested
fn gamepad_action_down(mask: u32, stick_x: f32, action: Action) -> bool {
    match action {
        Action::MoveLeft => mask_has(mask, button::DPAD_LEFT) || stick_x <= -STICK_THRESHOLD,
        Action::MoveRight => mask_has(mask, button::DPAD_RIGHT) || stick_x >= STICK_THRESHOLD,
        Action::Jump => mask_has(mask, button::A) || mask_has(mask, button::DPAD_UP),
        Action::PlacePlatform => mask_has(mask, button::X) || mask_has(mask, button::DPAD_DOWN),
        Action::ToggleDebug => mask_has(mask, button::SELECT),
        Action::Quit => false,
    }
}
