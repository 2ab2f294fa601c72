//! Session state: the logged-in player, the selected location, the cast in
//! flight and everything the session has caught.
//!
//! All state is explicit and owned here; nothing is global. Operations
//! that are not allowed leave the state untouched and report why, so the
//! presentation layer can disable the matching control.

use log::{debug, info, warn};

use super::config::EngineConfig;
use crate::character::{Player, PlayerStatus};
use crate::fishing::catalog::Catalog;
use crate::fishing::logic::start_session;
use crate::fishing::types::{CastError, CastPower, CaughtFish, FishingSession};
use crate::locations::Location;
use crate::social::ChatLog;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no player is logged in")]
    NotLoggedIn,

    #[error("nickname must not be empty")]
    EmptyNickname,

    #[error("unknown location {0}")]
    UnknownLocation(String),

    #[error("location {location_id} unlocks at level {required}")]
    LocationLocked { location_id: String, required: u32 },

    #[error("{0} is not an available avatar")]
    InvalidAvatar(String),
}

/// Main session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: EngineConfig,
    pub catalog: Catalog,
    pub player: Option<Player>,
    /// Id of the selected fishing location
    pub location_id: Option<String>,
    /// Cast in flight (at most one per player)
    pub active_fishing: Option<FishingSession>,
    /// Fish caught this session, oldest first
    pub caught_fish: Vec<CaughtFish>,
    pub chat: ChatLog,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Catalog::default())
    }
}

impl GameState {
    pub fn new(config: EngineConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            player: None,
            location_id: None,
            active_fishing: None,
            caught_fish: Vec::new(),
            chat: ChatLog::seeded(),
        }
    }

    /// Logs a player in with the starting balance.
    ///
    /// An already logged-in player is logged out first.
    pub fn login(&mut self, nickname: &str) -> Result<&Player, SessionError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(SessionError::EmptyNickname);
        }
        if self.player.is_some() {
            self.logout();
        }

        info!("{} logged in", nickname);
        Ok(self
            .player
            .insert(Player::new(nickname, self.config.start_coins)))
    }

    /// Logs the player out, cancelling any cast in flight.
    ///
    /// The session's catch collection and location are discarded.
    pub fn logout(&mut self) -> Option<Player> {
        self.cancel_cast();
        self.location_id = None;
        self.caught_fish.clear();

        let mut player = self.player.take()?;
        player.status = PlayerStatus::Offline;
        info!("{} logged out", player.nickname);
        Some(player)
    }

    pub fn is_logged_in(&self) -> bool {
        self.player.is_some()
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.location_id
            .as_deref()
            .and_then(|id| self.catalog.location(id))
    }

    /// Locations the player can currently select.
    pub fn unlocked_locations(&self) -> Vec<&Location> {
        let level = self.player.as_ref().map_or(0, |p| p.level);
        self.catalog
            .locations
            .iter()
            .filter(|location| location.is_unlocked_for(level))
            .collect()
    }

    /// Moves to another location. A cast in flight is cancelled.
    pub fn select_location(&mut self, location_id: &str) -> Result<(), SessionError> {
        let player = self.player.as_ref().ok_or(SessionError::NotLoggedIn)?;
        let location = self
            .catalog
            .location(location_id)
            .ok_or_else(|| SessionError::UnknownLocation(location_id.to_string()))?;

        if !location.is_unlocked_for(player.level) {
            warn!(
                "{} cannot fish at {} before level {}",
                player.nickname, location.id, location.unlock_level
            );
            return Err(SessionError::LocationLocked {
                location_id: location.id.clone(),
                required: location.unlock_level,
            });
        }

        if self.location_id.as_deref() != Some(location_id) {
            self.cancel_cast();
            debug!("Moved to {}", location_id);
            self.location_id = Some(location_id.to_string());
        }
        Ok(())
    }

    pub fn select_avatar(&mut self, avatar: &str) -> Result<(), SessionError> {
        let player = self.player.as_mut().ok_or(SessionError::NotLoggedIn)?;
        if player.select_avatar(avatar) {
            Ok(())
        } else {
            Err(SessionError::InvalidAvatar(avatar.to_string()))
        }
    }

    /// Checks every precondition of [`GameState::start_cast`].
    pub fn check_can_cast(&self) -> Result<&Location, CastError> {
        let player = self.player.as_ref().ok_or(CastError::NotLoggedIn)?;
        let location = self.current_location().ok_or(CastError::NoLocation)?;
        if self.active_fishing.is_some() {
            return Err(CastError::CastInProgress);
        }
        if !location.is_unlocked_for(player.level) {
            return Err(CastError::LocationLocked {
                location_id: location.id.clone(),
                required: location.unlock_level,
            });
        }
        if location.fish_types.is_empty() {
            return Err(CastError::EmptyLocation(location.id.clone()));
        }
        Ok(location)
    }

    /// Whether the cast control should be enabled.
    pub fn can_cast(&self) -> bool {
        self.check_can_cast().is_ok()
    }

    /// Starts a cast at the selected location.
    ///
    /// Rejected without side effects when no player is logged in, no
    /// location is selected, or a cast is already in flight.
    pub fn start_cast(&mut self, power: CastPower) -> Result<(), CastError> {
        let session = match self.check_can_cast() {
            Ok(location) => start_session(power, location, &self.config)?,
            Err(err) => {
                warn!("Cast rejected: {}", err);
                return Err(err);
            }
        };

        self.active_fishing = Some(session);
        if let Some(player) = self.player.as_mut() {
            player.status = PlayerStatus::Fishing;
        }
        Ok(())
    }

    /// Drops the cast in flight without resolving it.
    ///
    /// Returns true if a cast was cancelled.
    pub fn cancel_cast(&mut self) -> bool {
        let Some(session) = self.active_fishing.take() else {
            return false;
        };
        debug!(
            "Cast at {} cancelled at {:.1}%",
            session.location_id, session.progress
        );
        if let Some(player) = self.player.as_mut() {
            player.status = PlayerStatus::Online;
        }
        true
    }

    /// Posts a chat message as the logged-in player.
    pub fn send_chat(&mut self, text: &str) -> Result<bool, SessionError> {
        let player = self.player.as_ref().ok_or(SessionError::NotLoggedIn)?;
        Ok(self.chat.send(&player.display_name(), text))
    }

    /// Total coin value of everything caught this session.
    pub fn session_value(&self) -> u64 {
        self.caught_fish.iter().map(|fish| fish.value).sum()
    }
}
