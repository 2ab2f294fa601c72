//! Player profile for the logged-in session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::AchievementId;
use crate::core::constants::STARTING_LEVEL;
use crate::fishing::generation::CatchEffect;

/// Smiley avatars a player can pick from.
pub const AVATARS: [&str; 6] = ["😊", "😎", "🤠", "👑", "🎓", "🎭"];

/// Online presence shown next to the player's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Offline,
    Online,
    /// A cast is in flight
    Fishing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub nickname: String,
    pub level: u32,
    /// Fish caught since the last level up
    pub fish_toward_next_level: u64,
    pub total_fish: u64,
    pub coins: u64,
    pub achievements: BTreeSet<AchievementId>,
    /// Location ids the player has landed at least one fish at
    pub locations_fished: BTreeSet<String>,
    pub status: PlayerStatus,
    pub avatar: String,
}

impl Player {
    /// Creates a fresh online player with the given coin balance.
    pub fn new(nickname: &str, coins: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.to_string(),
            level: STARTING_LEVEL,
            fish_toward_next_level: 0,
            total_fish: 0,
            coins,
            achievements: BTreeSet::new(),
            locations_fished: BTreeSet::new(),
            status: PlayerStatus::Online,
            avatar: AVATARS[0].to_string(),
        }
    }

    /// Name with avatar, as shown in chat and leaderboards.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.avatar, self.nickname)
    }

    /// Applies the coin and counter effects of a catch.
    ///
    /// Announcements are not a player concern and are ignored here.
    pub fn apply_effects(&mut self, effects: &[CatchEffect]) {
        for effect in effects {
            match effect {
                CatchEffect::AddCoins(value) => self.coins += value,
                CatchEffect::CountFish => {
                    self.total_fish += 1;
                    self.fish_toward_next_level += 1;
                }
                CatchEffect::Announce(_) => {}
            }
        }
    }

    /// Switches to one of the predefined avatars. Returns false for any other glyph.
    pub fn select_avatar(&mut self, avatar: &str) -> bool {
        if AVATARS.contains(&avatar) {
            self.avatar = avatar.to_string();
            true
        } else {
            false
        }
    }
}
