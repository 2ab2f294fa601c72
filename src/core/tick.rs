//! The per-tick orchestration function.
//!
//! `game_tick()` advances the active cast by one tick, applies whatever
//! the catch implies to the player, and returns a [`TickResult`] describing
//! what happened so the presentation layer can update progress bars, the
//! catch collection and the chat without the game logic knowing about any
//! view.

use log::{info, warn};
use rand::Rng;

use super::game_state::GameState;
use crate::achievements::{check_catch_achievements, AchievementId};
use crate::character::{check_level_up, PlayerStatus};
use crate::fishing::generation::CatchEffect;
use crate::fishing::logic::tick_session;
use crate::fishing::types::CaughtFish;
use crate::locations::newly_unlocked;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Progress bar moved (0-100)
    ProgressUpdated(f64),
    /// A fish was landed and added to the collection
    CatchResolved(CaughtFish),
    /// Chat broadcast for a notable catch
    Announcement(String),
    LevelUp { new_level: u32 },
    LocationUnlocked { location_id: String },
    AchievementUnlocked(AchievementId),
    /// The landed fish is no longer on display; a new cast may start
    CastFinished,
    /// The cast could not be resolved and was dropped
    CastAborted { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn caught_fish(&self) -> Option<&CaughtFish> {
        self.events.iter().find_map(|event| match event {
            TickEvent::CatchResolved(fish) => Some(fish),
            _ => None,
        })
    }
}

/// Advances the session by one tick.
///
/// Does nothing when no player is logged in or no cast is in flight.
pub fn game_tick(state: &mut GameState, rng: &mut impl Rng) -> TickResult {
    let mut result = TickResult::default();

    let Some(mut session) = state.active_fishing.take() else {
        return result;
    };
    let Some(player) = state.player.as_mut() else {
        return result;
    };
    let Some(location) = state.catalog.location(&session.location_id) else {
        warn!("Dropping cast at unknown location {}", session.location_id);
        player.status = PlayerStatus::Online;
        return result;
    };

    let tick = tick_session(
        &mut session,
        location,
        &state.catalog,
        &player.display_name(),
        &state.config,
        rng,
    );
    let tick = match tick {
        Ok(tick) => tick,
        Err(err) => {
            warn!("Cast at {} aborted: {}", session.location_id, err);
            player.status = PlayerStatus::Online;
            result.events.push(TickEvent::CastAborted {
                reason: err.to_string(),
            });
            return result;
        }
    };

    if let Some(progress) = tick.progress {
        result.events.push(TickEvent::ProgressUpdated(progress));
    }

    if let Some(outcome) = tick.outcome {
        let fish = outcome.fish;
        player.apply_effects(&outcome.effects);
        player.locations_fished.insert(fish.location_id.clone());
        info!(
            "{} caught {} [{:?}] {}cm worth {}",
            player.nickname, fish.name, fish.rarity, fish.size_cm, fish.value
        );

        result.events.push(TickEvent::CatchResolved(fish.clone()));

        for effect in outcome.effects {
            if let CatchEffect::Announce(text) = effect {
                state.chat.announce(&text);
                result.events.push(TickEvent::Announcement(text));
            }
        }

        if let Some(old_level) = check_level_up(player) {
            info!("{} reached level {}", player.nickname, player.level);
            result.events.push(TickEvent::LevelUp {
                new_level: player.level,
            });
            for unlocked in newly_unlocked(&state.catalog.locations, old_level, player.level) {
                info!("{} unlocked {}", player.nickname, unlocked.id);
                result.events.push(TickEvent::LocationUnlocked {
                    location_id: unlocked.id.clone(),
                });
            }
        }

        for id in check_catch_achievements(player, &fish, state.catalog.locations.len()) {
            info!("{} earned achievement {:?}", player.nickname, id);
            result.events.push(TickEvent::AchievementUnlocked(id));
        }

        state.caught_fish.push(fish);
    }

    if tick.finished {
        player.status = PlayerStatus::Online;
        result.events.push(TickEvent::CastFinished);
    } else {
        state.active_fishing = Some(session);
    }

    result
}
