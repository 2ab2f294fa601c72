//! Achievement system module.
//!
//! Achievements live on the player and are evaluated after every applied
//! catch. Each one unlocks at most once.

pub mod types;

pub use types::AchievementId;

use crate::character::Player;
use crate::fishing::types::{CaughtFish, Rarity};

/// Fish counts for the catch-count achievements.
const ANGLER_FISH: u64 = 10;
const MASTER_ANGLER_FISH: u64 = 100;
const WEALTHY_COINS: u64 = 1000;

/// Evaluates achievements after `fish` was applied to `player`.
///
/// `location_count` is the number of locations in the catalog, used for
/// the traveler achievement. Returns the achievements unlocked by this catch.
pub fn check_catch_achievements(
    player: &mut Player,
    fish: &CaughtFish,
    location_count: usize,
) -> Vec<AchievementId> {
    let earned = [
        (AchievementId::FirstCatch, player.total_fish >= 1),
        (AchievementId::Angler, player.total_fish >= ANGLER_FISH),
        (
            AchievementId::MasterAngler,
            player.total_fish >= MASTER_ANGLER_FISH,
        ),
        (AchievementId::EpicCatch, fish.rarity == Rarity::Epic),
        (
            AchievementId::LegendaryCatch,
            fish.rarity == Rarity::Legendary,
        ),
        (AchievementId::Wealthy, player.coins >= WEALTHY_COINS),
        (
            AchievementId::WorldTraveler,
            location_count > 0 && player.locations_fished.len() >= location_count,
        ),
    ];

    earned
        .into_iter()
        .filter(|&(id, met)| met && player.achievements.insert(id))
        .map(|(id, _)| id)
        .collect()
}
