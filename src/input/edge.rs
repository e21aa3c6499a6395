//! Rising-edge detection
//!
//! Turns a held/not-held signal into one event per press. The previous
//! state is an explicit field so whoever owns the trigger owns the latch.

/// Fires once when a signal goes from released to held
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's held state. Returns true only on the press edge.
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }
}
