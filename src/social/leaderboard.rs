//! Leaderboard ranking over player summaries.

use serde::Serialize;

use crate::character::{Player, PlayerStatus};

/// What the leaderboard needs to know about a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub nickname: String,
    pub avatar: String,
    pub level: u32,
    pub total_fish: u64,
    pub coins: u64,
    pub online: bool,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            nickname: player.nickname.clone(),
            avatar: player.avatar.clone(),
            level: player.level,
            total_fish: player.total_fish,
            coins: player.coins,
            online: player.status != PlayerStatus::Offline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub player: PlayerSummary,
}

/// The other fishermen shown in the online list.
pub fn mock_players() -> Vec<PlayerSummary> {
    [
        ("РыбакПро", "😊", 12, 340, 5_200, true),
        ("МастерУдочки", "🎣", 18, 610, 9_870, true),
        ("НептунчикFish", "🐠", 7, 95, 1_430, true),
        ("КапитанКрючок", "🤠", 4, 21, 380, false),
        ("ЛунныйКарась", "🎓", 2, 6, 0, false),
    ]
    .into_iter()
    .map(
        |(nickname, avatar, level, total_fish, coins, online)| PlayerSummary {
            nickname: nickname.to_string(),
            avatar: avatar.to_string(),
            level,
            total_fish,
            coins,
            online,
        },
    )
    .collect()
}

/// Ranks players by coins, then fish caught, then nickname.
///
/// Players without coins are left out. At most `limit` entries are returned.
pub fn rank_players(players: &[PlayerSummary], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&PlayerSummary> = players.iter().filter(|p| p.coins > 0).collect();
    ranked.sort_by(|a, b| {
        b.coins
            .cmp(&a.coins)
            .then(b.total_fish.cmp(&a.total_fish))
            .then_with(|| a.nickname.cmp(&b.nickname))
    });

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, player)| LeaderboardEntry {
            rank: index + 1,
            player: player.clone(),
        })
        .collect()
}
