//! Event System
//!
//! The scene reports what happened during a tick through typed queues, so
//! the front end (log output, debug overlay) can react without the core
//! knowing about it.
//!
//! Queues are cleared at the start of every tick and stay readable until
//! the next one.

use crate::geometry::Aabb;

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// A temporary platform was placed
    pub platform_placed: EventQueue<PlatformPlacedEvent>,

    /// The temporary platform timed out
    pub platform_expired: EventQueue<PlatformExpiredEvent>,

    /// The player hit a spike and went back to spawn
    pub respawn: EventQueue<RespawnEvent>,

    /// The player started a jump
    pub jump: EventQueue<JumpEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Called at the start of each tick.
    pub fn clear_all(&mut self) {
        self.platform_placed.clear();
        self.platform_expired.clear();
        self.respawn.clear();
        self.jump.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPlacedEvent {
    pub bounds: Aabb,
    pub at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformExpiredEvent {
    pub at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespawnEvent {
    /// Where the player was when they touched the spike
    pub death_position: (f32, f32),
    /// Number of spikes touched in that tick
    pub obstacles_hit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpEvent {
    /// Jumps left after this one (0 = that was the air jump)
    pub jumps_left: u8,
}
