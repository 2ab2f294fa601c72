//! Fishing integration tests
//!
//! End-to-end tests for catch resolution covering:
//! - Rarity, value and size rules across the power range
//! - Reference scenarios with fixed draws
//! - Rarity policy switching through the engine config
//! - Custom catalogs loaded from JSON

use rand::rngs::mock::StepRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smiley_fisher::fishing::{
    catch_size, catch_value, resolve_catch, roll_rarity, Catalog, CastPower, CatchEffect, Rarity,
    RarityPolicy,
};
use smiley_fisher::EngineConfig;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// RNG whose every draw is zero: first species, roll 0.0, no size jitter.
fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}

// ============================================================================
// Engine Properties
// ============================================================================

#[test]
fn test_value_and_size_bounds_over_all_powers() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let mut rng = create_test_rng();

    for location in &catalog.locations {
        for power in 0..=100u32 {
            let power = CastPower::new(power);
            for _ in 0..10 {
                let outcome =
                    resolve_catch(power, location, &catalog, "Тест", &config, &mut rng).unwrap();
                let fish = &outcome.fish;

                let min_size = 20 + 2 * power.value() as u32;
                assert!(fish.size_cm >= min_size);
                assert!(fish.size_cm < min_size + 30);

                let species = catalog.species(&fish.name).unwrap();
                assert_eq!(fish.value, catch_value(species.base_value, power, fish.rarity));
                assert!(fish.rarity >= species.rarity);
                assert!(location.fish_types.contains(&fish.name));
                assert_eq!(fish.location_id, location.id);
            }
        }
    }
}

#[test]
fn test_low_power_never_upgrades() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let mut rng = create_test_rng();
    let pond = catalog.location("pond").unwrap();

    for power in 0..=40 {
        for _ in 0..50 {
            let outcome =
                resolve_catch(CastPower::new(power), pond, &catalog, "Тест", &config, &mut rng)
                    .unwrap();
            let intrinsic = catalog.species(&outcome.fish.name).unwrap().rarity;
            assert_eq!(outcome.fish.rarity, intrinsic);
        }
    }
}

#[test]
fn test_high_power_upgrade_rates() {
    let mut rng = create_test_rng();
    let power = CastPower::new(100);
    let mut counts = [0u32; 4];
    let draws = 20_000;

    for _ in 0..draws {
        let roll: f64 = rng.gen();
        let rarity = roll_rarity(power, roll, Rarity::Common, RarityPolicy::NeverDowngrade);
        counts[rarity as usize] += 1;
    }

    // brackets: 5% legendary, 10% epic, 20% rare, 65% common
    let share = |rarity: Rarity| counts[rarity as usize] as f64 / draws as f64;
    assert!((share(Rarity::Legendary) - 0.05).abs() < 0.01);
    assert!((share(Rarity::Epic) - 0.10).abs() < 0.015);
    assert!((share(Rarity::Rare) - 0.20).abs() < 0.02);
    assert!((share(Rarity::Common) - 0.65).abs() < 0.02);
}

#[test]
fn test_effects_match_the_fish() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let mut rng = create_test_rng();
    let sea = catalog.location("sea").unwrap();

    for _ in 0..200 {
        let outcome =
            resolve_catch(CastPower::new(90), sea, &catalog, "Тест", &config, &mut rng).unwrap();
        assert_eq!(outcome.effects[0], CatchEffect::AddCoins(outcome.fish.value));
        assert_eq!(outcome.effects[1], CatchEffect::CountFish);

        let announced = outcome
            .effects
            .iter()
            .any(|effect| matches!(effect, CatchEffect::Announce(_)));
        assert_eq!(announced, outcome.fish.rarity >= Rarity::Epic);
    }
}

#[test]
fn test_same_seed_same_catches() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let ocean = catalog.location("ocean").unwrap();

    let mut a = create_test_rng();
    let mut b = create_test_rng();
    for power in [0, 25, 50, 75, 100] {
        let power = CastPower::new(power);
        let first = resolve_catch(power, ocean, &catalog, "Тест", &config, &mut a).unwrap();
        let second = resolve_catch(power, ocean, &catalog, "Тест", &config, &mut b).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_zero_power_zero_draws() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let pond = catalog.location("pond").unwrap();

    let outcome =
        resolve_catch(CastPower::new(0), pond, &catalog, "Тест", &config, &mut zero_rng())
            .unwrap();
    // first pond species, 15 base value at half size
    assert_eq!(outcome.fish.name, pond.fish_types[0]);
    assert_eq!(outcome.fish.rarity, Rarity::Common);
    assert_eq!(outcome.fish.value, 7);
    assert_eq!(outcome.fish.size_cm, 20);
}

#[test]
fn test_full_power_zero_roll_is_legendary() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let pond = catalog.location("pond").unwrap();

    let outcome =
        resolve_catch(CastPower::new(100), pond, &catalog, "Тест", &config, &mut zero_rng())
            .unwrap();
    assert_eq!(outcome.fish.rarity, Rarity::Legendary);
    assert_eq!(outcome.fish.size_cm, 220);
    assert!(outcome
        .effects
        .iter()
        .any(|effect| matches!(effect, CatchEffect::Announce(text) if text.contains("Тест"))));
}

#[test]
fn test_size_formula_samples() {
    assert_eq!(catch_size(CastPower::new(0), 0.0), 20);
    assert_eq!(catch_size(CastPower::new(50), 29.99), 149);
    assert_eq!(catch_size(CastPower::new(100), 12.5), 232);
}

// ============================================================================
// Rarity Policy
// ============================================================================

#[test]
fn test_policy_selected_by_config() {
    let catalog = Catalog::default();
    let ocean = catalog.location("ocean").unwrap();
    let legendary = catalog
        .species
        .iter()
        .position(|s| s.rarity == Rarity::Legendary)
        .unwrap();
    let name = &catalog.species[legendary].name;
    let mut only_legendary = ocean.clone();
    only_legendary.fish_types = vec![name.clone()];

    // roll 0.0 at power 50 lands in the rare bracket
    let never = EngineConfig::default();
    let outcome = resolve_catch(
        CastPower::new(50),
        &only_legendary,
        &catalog,
        "Тест",
        &never,
        &mut zero_rng(),
    )
    .unwrap();
    assert_eq!(outcome.fish.rarity, Rarity::Legendary);

    let overwrite = EngineConfig {
        rarity_policy: RarityPolicy::Overwrite,
        ..Default::default()
    };
    let outcome = resolve_catch(
        CastPower::new(50),
        &only_legendary,
        &catalog,
        "Тест",
        &overwrite,
        &mut zero_rng(),
    )
    .unwrap();
    assert_eq!(outcome.fish.rarity, Rarity::Rare);
}

#[test]
fn test_policy_parsed_from_json() {
    let config = EngineConfig::from_json(r#"{ "rarity_policy": "overwrite" }"#).unwrap();
    assert_eq!(config.rarity_policy, RarityPolicy::Overwrite);
    assert_eq!(config.tick_ms, 50);

    let config = EngineConfig::from_json("{}").unwrap();
    assert_eq!(config.rarity_policy, RarityPolicy::NeverDowngrade);
}

// ============================================================================
// Custom Catalogs
// ============================================================================

#[test]
fn test_custom_catalog_round_trips_through_engine() {
    let json = r#"{
        "species": [
            { "name": "Тестовая Рыба", "emoji": "🐟", "rarity": "common", "base_value": 100 }
        ],
        "locations": [
            {
                "id": "lab",
                "name": "Лаборатория",
                "emoji": "🧪",
                "description": "Аквариум",
                "fish_types": ["Тестовая Рыба"],
                "difficulty": 1,
                "unlock_level": 1
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    let lab = catalog.location("lab").unwrap();

    let outcome = resolve_catch(
        CastPower::new(100),
        lab,
        &catalog,
        "Тест",
        &EngineConfig::default(),
        &mut create_test_rng(),
    )
    .unwrap();
    assert_eq!(outcome.fish.name, "Тестовая Рыба");
    assert!(outcome.fish.value >= 150);
}

#[test]
fn test_catalog_with_unknown_species_rejected() {
    let json = r#"{
        "species": [],
        "locations": [
            {
                "id": "lab",
                "name": "Лаборатория",
                "emoji": "🧪",
                "description": "Аквариум",
                "fish_types": ["Призрак"],
                "difficulty": 1,
                "unlock_level": 1
            }
        ]
    }"#;
    assert!(Catalog::from_json(json).is_err());
}
