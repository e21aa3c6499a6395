//! Scene Renderer
//!
//! Draws the scene with macroquad shape primitives, translated by the
//! camera, plus the controls hint and the optional debug overlay.

use macroquad::prelude::*;
use crate::input::InputState;
use super::entity::{Drawable, PlatformColor};
use super::runtime::Scene;

const STATIC_PLATFORM: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const TEMP_PLATFORM: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const SPIKE: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const PLAYER: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Draw the whole frame for a `viewport_w` x `viewport_h` window
pub fn draw_scene(scene: &Scene, input: &InputState, viewport_w: f32, viewport_h: f32, now_ms: u64, show_debug: bool) {
    clear_background(BLACK);

    let camera = scene.camera(viewport_w, viewport_h);

    for drawable in scene.drawables() {
        let b = camera.to_screen(&drawable.bounds());
        match drawable {
            Drawable::Platform(p) => {
                let color = match p.color {
                    PlatformColor::Gray => STATIC_PLATFORM,
                    PlatformColor::Aqua => TEMP_PLATFORM,
                };
                draw_rectangle(b.x, b.y, b.w, b.h, color);
            }
            Drawable::Obstacle(_) => {
                // Upward spike filling the box
                draw_triangle(
                    vec2(b.x, b.bottom()),
                    vec2(b.center_x(), b.y),
                    vec2(b.right(), b.bottom()),
                    SPIKE,
                );
            }
            Drawable::Player(_) => {
                draw_rectangle(b.x, b.y, b.w, b.h, PLAYER);
            }
        }
    }

    // Draw controls hint
    let hint = if input.has_gamepad() {
        "D-Pad: Move | A: Jump (x2) | X: Platform | Select: Debug"
    } else {
        "Arrows: Move | Up: Jump (x2) | Down: Platform | F3: Debug"
    };
    let hint_dims = measure_text(hint, None, 14, 1.0);
    draw_text(
        hint,
        (viewport_w - hint_dims.width) / 2.0,
        viewport_h - 12.0,
        14.0,
        Color::from_rgba(150, 150, 160, 200),
    );

    if show_debug {
        draw_debug_overlay(scene, now_ms);
    }
}

/// Lines shown in the debug overlay
pub fn debug_lines(scene: &Scene, now_ms: u64) -> Vec<String> {
    let p = scene.player();
    let eph = scene.ephemeral();
    let platform_line = match eph.remaining_lifetime(now_ms) {
        Some(ms) => format!("platform: {:.1}s left", ms as f32 / 1000.0),
        None => "platform: none".to_string(),
    };
    let cooldown_line = match eph.cooldown_remaining(now_ms) {
        0 => "cooldown: ready".to_string(),
        ms => format!("cooldown: {:.1}s", ms as f32 / 1000.0),
    };
    vec![
        format!("pos: ({:.1}, {:.1})", p.x, p.y),
        format!("vel: ({:.1}, {:.1})", p.velocity_x, p.velocity_y),
        format!("ground: {}  jumps: {}", if p.on_ground { "Y" } else { "N" }, p.jumps_available),
        platform_line,
        cooldown_line,
        format!("deaths: {}  tick: {}", scene.deaths(), scene.ticks()),
    ]
}

/// Top-left panel with player and platform state
fn draw_debug_overlay(scene: &Scene, now_ms: u64) {
    let lines = debug_lines(scene, now_ms);
    let line_h = 16.0;
    let panel_w = 230.0;
    let panel_h = 12.0 + line_h * lines.len() as f32;

    draw_rectangle(8.0, 8.0, panel_w, panel_h, Color::from_rgba(20, 22, 28, 200));
    draw_rectangle_lines(8.0, 8.0, panel_w, panel_h, 1.0, Color::from_rgba(80, 85, 95, 255));

    for (i, line) in lines.iter().enumerate() {
        draw_text(
            line,
            16.0,
            8.0 + line_h * (i as f32 + 1.0),
            14.0,
            Color::from_rgba(200, 200, 210, 255),
        );
    }
}
