//! Reference data: the species table and the locations that use it.
//!
//! The built-in catalog mirrors the live game. A custom catalog can be
//! loaded from JSON for balance experiments; it is validated before use.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{FishSpecies, Rarity};
use crate::locations::{get_all_locations, Location};

/// Built-in species: (name, emoji, intrinsic rarity, base value).
const SPECIES: [(&str, &str, Rarity, u32); 12] = [
    ("Веселый Окунь", "🐟", Rarity::Common, 15),
    ("Прыгучий Карп", "🐟", Rarity::Common, 12),
    ("Поющая Селедка", "🐟", Rarity::Common, 10),
    ("Озорной Минтай", "🐟", Rarity::Common, 14),
    ("Улыбчивая Треска", "🐟", Rarity::Common, 18),
    ("Веселая Камбала", "🐠", Rarity::Common, 20),
    ("Смеющийся Судак", "🐠", Rarity::Rare, 35),
    ("Хихикающая Щука", "🐡", Rarity::Rare, 40),
    ("Счастливая Скумбрия", "🐠", Rarity::Rare, 30),
    ("Игривый Лосось", "🐠", Rarity::Epic, 75),
    ("Танцующий Тунец", "🦈", Rarity::Epic, 90),
    ("Радужный Пузырек", "🐡", Rarity::Legendary, 200),
];

/// Errors found while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("species {0} is defined more than once")]
    DuplicateSpecies(String),

    #[error("location {location_id} references unknown species {species}")]
    UnknownSpecies { location_id: String, species: String },

    #[error("location {0} has no fish")]
    EmptyLocation(String),

    #[error("location {location_id} has difficulty {difficulty}, expected 1-4")]
    InvalidDifficulty { location_id: String, difficulty: u8 },

    #[error("location {0} does not unlock later than an easier location")]
    UnlockOrder(String),

    #[error("could not read catalog")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog")]
    Json(#[from] serde_json::Error),
}

/// Species table plus world map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub species: Vec<FishSpecies>,
    pub locations: Vec<Location>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            species: SPECIES
                .iter()
                .map(|&(name, emoji, rarity, base_value)| FishSpecies {
                    name: name.to_string(),
                    emoji: emoji.to_string(),
                    rarity,
                    base_value,
                })
                .collect(),
            locations: get_all_locations(),
        }
    }
}

impl Catalog {
    /// Parses and validates a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads and validates a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn species(&self, name: &str) -> Option<&FishSpecies> {
        self.species.iter().find(|species| species.name == name)
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Checks that every location is fishable and that unlock levels
    /// strictly increase with difficulty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for species in &self.species {
            if !names.insert(species.name.as_str()) {
                return Err(CatalogError::DuplicateSpecies(species.name.clone()));
            }
        }

        for location in &self.locations {
            if location.fish_types.is_empty() {
                return Err(CatalogError::EmptyLocation(location.id.clone()));
            }
            if !(1..=4).contains(&location.difficulty) {
                return Err(CatalogError::InvalidDifficulty {
                    location_id: location.id.clone(),
                    difficulty: location.difficulty,
                });
            }
            if let Some(species) = location
                .fish_types
                .iter()
                .find(|name| !names.contains(name.as_str()))
            {
                return Err(CatalogError::UnknownSpecies {
                    location_id: location.id.clone(),
                    species: species.clone(),
                });
            }
        }

        let mut by_difficulty: Vec<&Location> = self.locations.iter().collect();
        by_difficulty.sort_by_key(|location| (location.difficulty, location.unlock_level));
        for pair in by_difficulty.windows(2) {
            if pair[1].difficulty > pair[0].difficulty
                && pair[1].unlock_level <= pair[0].unlock_level
            {
                return Err(CatalogError::UnlockOrder(pair[1].id.clone()));
            }
        }

        Ok(())
    }
}
