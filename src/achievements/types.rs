//! Achievement identifiers and their display data.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstCatch,   // 1 fish
    Angler,       // 10 fish
    MasterAngler, // 100 fish
    EpicCatch,
    LegendaryCatch,
    Wealthy, // 1,000 coins
    WorldTraveler,
}

impl AchievementId {
    /// All achievements in display order.
    pub const ALL: [AchievementId; 7] = [
        AchievementId::FirstCatch,
        AchievementId::Angler,
        AchievementId::MasterAngler,
        AchievementId::EpicCatch,
        AchievementId::LegendaryCatch,
        AchievementId::Wealthy,
        AchievementId::WorldTraveler,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementId::FirstCatch => "Первый улов",
            AchievementId::Angler => "Рыбак",
            AchievementId::MasterAngler => "Мастер удочки",
            AchievementId::EpicCatch => "Эпичный улов",
            AchievementId::LegendaryCatch => "Легенда",
            AchievementId::Wealthy => "Богач",
            AchievementId::WorldTraveler => "Путешественник",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::FirstCatch => "Поймай свою первую рыбу",
            AchievementId::Angler => "Поймай 10 рыб",
            AchievementId::MasterAngler => "Поймай 100 рыб",
            AchievementId::EpicCatch => "Поймай эпическую рыбу",
            AchievementId::LegendaryCatch => "Поймай легендарную рыбу",
            AchievementId::Wealthy => "Накопи 1000 монет",
            AchievementId::WorldTraveler => "Порыбачь во всех локациях",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementId::FirstCatch => "🎣",
            AchievementId::Angler => "🐟",
            AchievementId::MasterAngler => "🏆",
            AchievementId::EpicCatch => "🥇",
            AchievementId::LegendaryCatch => "💎",
            AchievementId::Wealthy => "💰",
            AchievementId::WorldTraveler => "🗺️",
        }
    }
}
