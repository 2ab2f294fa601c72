//! Fishing data structures: rarity tiers, cast power, species and catches.

use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_CAST_POWER;

/// Rarity tiers for fish, ordered from most to least common.
///
/// Used both for display and as the payout multiplier of a catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Payout multiplier applied to a catch's value.
    pub fn value_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Badge label shown next to a catch.
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "🥉 Обычная",
            Rarity::Rare => "🥈 Редкая",
            Rarity::Epic => "🥇 Эпическая",
            Rarity::Legendary => "💎 Легендарная",
        }
    }
}

/// How a successful upgrade roll combines with the species' intrinsic rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RarityPolicy {
    /// The rolled bracket only ever raises the tier.
    #[default]
    NeverDowngrade,
    /// The rolled bracket replaces the intrinsic tier, even when lower.
    Overwrite,
}

/// Player-chosen cast intensity, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CastPower(u8);

impl CastPower {
    /// Creates a cast power, clamping anything above the maximum.
    pub fn new(power: u32) -> Self {
        Self(power.min(MAX_CAST_POWER as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for CastPower {
    fn from(power: u8) -> Self {
        Self::new(power as u32)
    }
}

/// A fish species from the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSpecies {
    pub name: String,
    pub emoji: String,
    pub rarity: Rarity,
    pub base_value: u32,
}

/// A single fish landed by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtFish {
    pub name: String,
    pub emoji: String,
    pub rarity: Rarity,
    pub value: u64,
    pub location_id: String,
    pub size_cm: u32,
}

/// Current phase of an active cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingPhase {
    /// Line is out, progress bar is filling
    Reeling,
    /// Fish landed and on display
    Landed,
}

/// A single cast in flight, advanced one tick at a time.
#[derive(Debug, Clone)]
pub struct FishingSession {
    pub location_id: String,
    pub power: CastPower,
    /// Nominal cast duration after clamping
    pub duration_ms: u64,
    /// Ticks needed for progress to reach 100
    pub ticks_to_catch: u32,
    pub ticks_elapsed: u32,
    pub progress: f64,
    pub phase: FishingPhase,
    /// Ticks left in the Landed phase
    pub landed_ticks_remaining: u32,
    pub catch: Option<CaughtFish>,
}

/// Reasons a cast cannot be started or resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("no player is logged in")]
    NotLoggedIn,

    #[error("no fishing location selected")]
    NoLocation,

    #[error("a cast is already in progress")]
    CastInProgress,

    #[error("location {location_id} unlocks at level {required}")]
    LocationLocked { location_id: String, required: u32 },

    #[error("location {0} has no fish")]
    EmptyLocation(String),

    #[error("unknown fish species {0}")]
    UnknownSpecies(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_multipliers() {
        assert_eq!(Rarity::Common.value_multiplier(), 1.0);
        assert_eq!(Rarity::Rare.value_multiplier(), 1.5);
        assert_eq!(Rarity::Epic.value_multiplier(), 2.0);
        assert_eq!(Rarity::Legendary.value_multiplier(), 3.0);
    }

    #[test]
    fn test_rarity_name_matches_serde() {
        for rarity in Rarity::ALL {
            let json = serde_json::to_string(&rarity).unwrap();
            assert_eq!(json, format!("\"{}\"", rarity.name()));
        }
    }

    #[test]
    fn test_cast_power_clamps_to_max() {
        assert_eq!(CastPower::new(0).value(), 0);
        assert_eq!(CastPower::new(55).value(), 55);
        assert_eq!(CastPower::new(100).value(), 100);
        assert_eq!(CastPower::new(250).value(), 100);
        assert_eq!(CastPower::from(200u8).value(), 100);
    }

    #[test]
    fn test_rarity_policy_serde_names() {
        let json = serde_json::to_string(&RarityPolicy::NeverDowngrade).unwrap();
        assert_eq!(json, "\"never-downgrade\"");
        let policy: RarityPolicy = serde_json::from_str("\"overwrite\"").unwrap();
        assert_eq!(policy, RarityPolicy::Overwrite);
    }

    #[test]
    fn test_caught_fish_serializes_rarity_lowercase() {
        let fish = CaughtFish {
            name: "Веселый Окунь".to_string(),
            emoji: "🐟".to_string(),
            rarity: Rarity::Epic,
            value: 42,
            location_id: "pond".to_string(),
            size_cm: 33,
        };
        let json = serde_json::to_value(&fish).unwrap();
        assert_eq!(json["rarity"], "epic");
        assert_eq!(json["size_cm"], 33);
    }
}
