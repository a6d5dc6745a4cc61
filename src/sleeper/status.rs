//! Injury-status filtering over the player directory.

use crate::sleeper::types::{PlayerDirectory, SleeperPlayer};


/// Players among `player_ids` whose injury status marks them as unlikely or
/// unable to play, in input order.
///
/// Ids missing from the directory, players without a status, and statuses
/// Sleeper has not documented are skipped.
pub fn filter_players_by_status(
    player_ids: &[String],
    directory: &PlayerDirectory,
) -> Vec<SleeperPlayer> {
    player_ids
        .iter()
        .filter_map(|id| directory.get(id))
        .filter(|player| player.status().is_some_and(|s| s.is_problematic()))
        .cloned()
        .collect()
}
