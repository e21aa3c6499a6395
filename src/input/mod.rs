//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both keyboard
//! and gamepad controllers. The simulation only ever sees an
//! [`InputSnapshot`]; everything device-specific stays in here.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod edge;
mod gamepad;
mod state;

pub use actions::*;
pub use edge::EdgeTrigger;
pub use state::*;
