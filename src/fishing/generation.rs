//! Catch resolution: species pick, rarity upgrade roll, value and size.
//!
//! Everything here is a pure function of its inputs and the supplied RNG.
//! Player and session state are never touched; instead [`resolve_catch`]
//! returns the effects the caller should apply.

use rand::Rng;

use super::catalog::Catalog;
use super::types::{CastError, CastPower, CaughtFish, FishSpecies, Rarity, RarityPolicy};
use crate::core::config::EngineConfig;
use crate::core::constants::{
    BASE_FISH_SIZE_CM, EPIC_POWER_THRESHOLD, EPIC_ROLL_THRESHOLD, LEGENDARY_POWER_THRESHOLD,
    LEGENDARY_ROLL_THRESHOLD, RARE_POWER_THRESHOLD, RARE_ROLL_THRESHOLD, SIZE_CM_PER_POWER,
    SIZE_JITTER_CM, SIZE_MULTIPLIER_BASE,
};
use crate::locations::Location;

/// A change the caller must apply after a catch resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatchEffect {
    AddCoins(u64),
    CountFish,
    /// Chat broadcast for a notable catch
    Announce(String),
}

/// The landed fish and the side effects it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchOutcome {
    pub fish: CaughtFish,
    pub effects: Vec<CatchEffect>,
}

/// Cast duration in milliseconds, never below the configured floor.
///
/// Higher power means a faster catch: 3000ms at power 0, 1000ms at 100.
pub fn cast_duration_ms(power: CastPower, config: &EngineConfig) -> u64 {
    config
        .base_duration_ms
        .saturating_sub((power.value() as u64).saturating_mul(config.duration_per_power_ms))
        .max(config.min_duration_ms)
}

/// Returns the bracket an upgrade roll lands in, if any.
///
/// Brackets are checked rarest first; the first match wins.
pub fn rarity_bracket(power: CastPower, roll: f64) -> Option<Rarity> {
    let power = power.value();
    if roll < LEGENDARY_ROLL_THRESHOLD && power > LEGENDARY_POWER_THRESHOLD {
        Some(Rarity::Legendary)
    } else if roll < EPIC_ROLL_THRESHOLD && power > EPIC_POWER_THRESHOLD {
        Some(Rarity::Epic)
    } else if roll < RARE_ROLL_THRESHOLD && power > RARE_POWER_THRESHOLD {
        Some(Rarity::Rare)
    } else {
        None
    }
}

/// Resolves the final rarity of a catch from the upgrade roll.
pub fn roll_rarity(power: CastPower, roll: f64, intrinsic: Rarity, policy: RarityPolicy) -> Rarity {
    match (rarity_bracket(power, roll), policy) {
        (Some(bracket), RarityPolicy::NeverDowngrade) => bracket.max(intrinsic),
        (Some(bracket), RarityPolicy::Overwrite) => bracket,
        (None, _) => intrinsic,
    }
}

/// Size multiplier for value: 0.5 at power 0, 1.5 at power 100.
pub fn size_multiplier(power: CastPower) -> f64 {
    SIZE_MULTIPLIER_BASE + power.value() as f64 / 100.0
}

/// Coin value of a catch.
pub fn catch_value(base_value: u32, power: CastPower, rarity: Rarity) -> u64 {
    (base_value as f64 * size_multiplier(power) * rarity.value_multiplier()).floor() as u64
}

/// Size in centimeters; `jitter` is the random part in `[0, 30)`.
pub fn catch_size(power: CastPower, jitter: f64) -> u32 {
    (BASE_FISH_SIZE_CM + power.value() as f64 * SIZE_CM_PER_POWER + jitter).floor() as u32
}

/// Picks a species uniformly from the location's fish list.
pub fn choose_species<'a>(
    location: &Location,
    catalog: &'a Catalog,
    rng: &mut impl Rng,
) -> Result<&'a FishSpecies, CastError> {
    if location.fish_types.is_empty() {
        return Err(CastError::EmptyLocation(location.id.clone()));
    }
    let name = &location.fish_types[rng.gen_range(0..location.fish_types.len())];
    catalog
        .species(name)
        .ok_or_else(|| CastError::UnknownSpecies(name.clone()))
}

/// Chat line broadcast for a notable catch.
pub fn announcement_text(angler: &str, fish: &CaughtFish) -> String {
    format!(
        "🎉 {} поймал {} {} ({})! +{} монет",
        angler,
        fish.emoji,
        fish.name,
        fish.rarity.label(),
        fish.value
    )
}

/// Resolves a single catch.
///
/// Draws, in order: species index, upgrade roll, size jitter.
pub fn resolve_catch(
    power: CastPower,
    location: &Location,
    catalog: &Catalog,
    angler: &str,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<CatchOutcome, CastError> {
    let species = choose_species(location, catalog, rng)?;

    let roll: f64 = rng.gen();
    let rarity = roll_rarity(power, roll, species.rarity, config.rarity_policy);

    let value = catch_value(species.base_value, power, rarity);
    let size_cm = catch_size(power, rng.gen_range(0.0..SIZE_JITTER_CM));

    let fish = CaughtFish {
        name: species.name.clone(),
        emoji: species.emoji.clone(),
        rarity,
        value,
        location_id: location.id.clone(),
        size_cm,
    };

    let mut effects = vec![CatchEffect::AddCoins(value), CatchEffect::CountFish];
    if rarity >= config.announce_min_rarity {
        effects.push(CatchEffect::Announce(announcement_text(angler, &fish)));
    }

    Ok(CatchOutcome { fish, effects })
}
