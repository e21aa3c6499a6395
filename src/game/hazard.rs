//! Spike collision
//!
//! Any overlap with a spike sends the player back to spawn. Every spike is
//! tested against the player's box as it was when the check started, so
//! hitting two at once respawns twice, which lands in the same state as once.

use super::entity::Obstacle;
use super::player::Player;

/// Respawn the player if they touch any obstacle.
/// Returns how many obstacles were touched (0 = player untouched).
pub fn check_hazards(player: &mut Player, obstacles: &[Obstacle]) -> usize {
    let bounds = player.bounds();
    let mut hits = 0;
    for obstacle in obstacles {
        if bounds.overlaps(&obstacle.bounds) {
            player.die();
            hits += 1;
        }
    }
    hits
}
