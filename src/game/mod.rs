//! Game Module
//!
//! The platformer simulation and its renderer.
//!
//! Key pieces:
//! - Scene: owns all state and runs one tick per frame
//! - Player: movement, double jump, landing, respawn
//! - EphemeralPlatform: the single temporary platform and its timers
//! - Hazards and camera: spike checks and the scrolling view
//! - Events: what happened during the last tick
//!
//! Everything except the renderer is plain data and runs without a window.

pub mod camera;
pub mod entity;
pub mod ephemeral;
pub mod event;
pub mod hazard;
pub mod player;
pub mod renderer;
pub mod runtime;
pub mod settings;

// Re-export main types
pub use runtime::Scene;
pub use renderer::draw_scene;
pub use settings::{GameSettings, load_settings, save_settings};
