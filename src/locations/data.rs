//! Fishing location definitions.

use serde::{Deserialize, Serialize};

/// A place on the world map where the player can cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
    /// Species names that can bite here, in display order
    pub fish_types: Vec<String>,
    /// Difficulty tier (1-4)
    pub difficulty: u8,
    /// Minimum player level required to fish here
    pub unlock_level: u32,
}

impl Location {
    /// Checks if a player of the given level may fish here.
    pub fn is_unlocked_for(&self, level: u32) -> bool {
        level >= self.unlock_level
    }
}

fn location(
    id: &str,
    name: &str,
    emoji: &str,
    description: &str,
    fish_types: &[&str],
    difficulty: u8,
    unlock_level: u32,
) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
        fish_types: fish_types.iter().map(|name| name.to_string()).collect(),
        difficulty,
        unlock_level,
    }
}

/// Returns all locations on the world map, ordered by difficulty.
pub fn get_all_locations() -> Vec<Location> {
    vec![
        location(
            "pond",
            "Тихий Пруд",
            "🏞️",
            "Спокойный пруд для начинающих рыбаков",
            &[
                "Веселый Окунь",
                "Прыгучий Карп",
                "Поющая Селедка",
                "Озорной Минтай",
            ],
            1,
            1,
        ),
        location(
            "river",
            "Смешливая Река",
            "🌊",
            "Быстрое течение и хитрые хищники",
            &[
                "Смеющийся Судак",
                "Хихикающая Щука",
                "Веселый Окунь",
                "Улыбчивая Треска",
                "Игривый Лосось",
            ],
            2,
            5,
        ),
        location(
            "sea",
            "Радужное Море",
            "🌅",
            "Теплое море с яркими обитателями",
            &[
                "Веселая Камбала",
                "Счастливая Скумбрия",
                "Улыбчивая Треска",
                "Танцующий Тунец",
                "Игривый Лосось",
            ],
            3,
            10,
        ),
        location(
            "ocean",
            "Глубокий Океан",
            "🌌",
            "Бездна, где живут легенды",
            &[
                "Танцующий Тунец",
                "Радужный Пузырек",
                "Счастливая Скумбрия",
                "Хихикающая Щука",
            ],
            4,
            20,
        ),
    ]
}

/// Returns locations that unlock strictly after `old_level` and at or before `new_level`.
pub fn newly_unlocked(locations: &[Location], old_level: u32, new_level: u32) -> Vec<&Location> {
    locations
        .iter()
        .filter(|location| location.unlock_level > old_level && location.unlock_level <= new_level)
        .collect()
}
