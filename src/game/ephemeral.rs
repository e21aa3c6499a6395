//! Temporary platform lifecycle
//!
//! The player can drop one aqua platform under their feet. It lives for a
//! fixed time, and another can only be placed once the cooldown (counted from
//! the previous *placement*, not its removal) has elapsed. With the default
//! 5000 ms for both, the old platform expiring and the next becoming
//! placeable happen at the same moment.
//!
//! States: Absent -> (request_spawn) -> Active -> (tick past lifetime) -> Absent

use crate::geometry::Aabb;
use super::entity::{Platform, PlatformColor};
use super::settings::EphemeralSettings;

/// The single temporary-platform slot
#[derive(Debug, Clone)]
pub struct EphemeralPlatform {
    settings: EphemeralSettings,
    platform: Option<Platform>,
    /// When the current platform was placed (meaningless while Absent)
    created_at: u64,
    /// Last successful placement. None = never placed, so no cooldown applies.
    last_placed_at: Option<u64>,
}

impl EphemeralPlatform {
    pub fn new(settings: EphemeralSettings) -> Self {
        Self {
            settings,
            platform: None,
            created_at: 0,
            last_placed_at: None,
        }
    }

    /// The live platform, if any
    pub fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.platform.is_some()
    }

    pub fn created_at(&self) -> Option<u64> {
        self.platform.map(|_| self.created_at)
    }

    pub fn last_placed_at(&self) -> Option<u64> {
        self.last_placed_at
    }

    /// Is a new placement blocked by the cooldown at `now`?
    pub fn on_cooldown(&self, now: u64) -> bool {
        self.cooldown_remaining(now) > 0
    }

    /// Milliseconds until the cooldown ends (0 when placeable)
    pub fn cooldown_remaining(&self, now: u64) -> u64 {
        match self.last_placed_at() {
            Some(placed) => self
                .settings
                .cooldown_ms
                .saturating_sub(now.saturating_sub(placed)),
            None => 0,
        }
    }

    /// Milliseconds the live platform has left, None while Absent.
    /// Reports 0 during the final millisecond where the platform still exists.
    pub fn remaining_lifetime(&self, now: u64) -> Option<u64> {
        let created = self.created_at()?;
        Some(self.settings.lifetime_ms.saturating_sub(now.saturating_sub(created)))
    }

    /// Try to place a platform under `player`. Ignored (returns false) while a
    /// platform exists or the cooldown is running.
    pub fn request_spawn(&mut self, player: &Aabb, now: u64) -> bool {
        if self.is_active() || self.on_cooldown(now) {
            return false;
        }

        let s = &self.settings;
        let x = player.center_x() - s.width / 2.0;
        let y = player.bottom() + s.drop_gap;
        self.platform = Some(Platform::with_color(
            Aabb::new(x, y, s.width, s.height),
            PlatformColor::Aqua,
        ));
        self.created_at = now;
        self.last_placed_at = Some(now);
        log::debug!("ephemeral platform placed at ({:.1}, {:.1}) t={}", x, y, now);
        true
    }

    /// Remove the platform once it has outlived its lifetime.
    /// Strictly greater: still present at exactly `created_at + lifetime`.
    /// Returns true if a platform was removed this call.
    pub fn tick(&mut self, now: u64) -> bool {
        let Some(created) = self.created_at() else { return false };
        if now.saturating_sub(created) > self.settings.lifetime_ms {
            self.platform = None;
            log::debug!("ephemeral platform expired t={}", now);
            return true;
        }
        false
    }
}
