//! Cast lifecycle and per-tick processing.
//!
//! A cast is a small state machine: `Reeling` fills the progress bar one
//! tick at a time, the tick that reaches 100 resolves the catch, then
//! `Landed` keeps the fish on display before the session ends. Ticks are
//! driven by the caller, so tests can step a cast deterministically.

use log::debug;
use rand::Rng;

use super::catalog::Catalog;
use super::generation::{cast_duration_ms, resolve_catch, CatchOutcome};
use super::types::{CastError, CastPower, FishingPhase, FishingSession};
use crate::core::config::EngineConfig;
use crate::core::constants::PROGRESS_COMPLETE;
use crate::locations::Location;

/// What happened to a session during one tick.
#[derive(Debug, Clone, Default)]
pub struct FishingTickResult {
    /// New progress value, set on every Reeling tick
    pub progress: Option<f64>,
    /// Set on the single tick that resolves the catch
    pub outcome: Option<CatchOutcome>,
    /// True once the Landed display has run out and the session should end
    pub finished: bool,
}

/// Creates a new cast at the start of the Reeling phase.
pub fn start_session(
    power: CastPower,
    location: &Location,
    config: &EngineConfig,
) -> Result<FishingSession, CastError> {
    if location.fish_types.is_empty() {
        return Err(CastError::EmptyLocation(location.id.clone()));
    }

    let duration_ms = cast_duration_ms(power, config);
    let session = FishingSession {
        location_id: location.id.clone(),
        power,
        duration_ms,
        ticks_to_catch: config.ticks_for(duration_ms),
        ticks_elapsed: 0,
        progress: 0.0,
        phase: FishingPhase::Reeling,
        landed_ticks_remaining: 0,
        catch: None,
    };
    debug!(
        "Cast at {} with power {} ({}ms, {} ticks)",
        session.location_id,
        power.value(),
        duration_ms,
        session.ticks_to_catch
    );
    Ok(session)
}

/// Progress after `ticks` ticks of a cast lasting `duration_ms`.
///
/// Each tick adds `100 / (duration / tick)`; the value is pinned to exactly
/// 100 once `ticks_to_catch` ticks have passed.
pub fn progress_after(ticks: u32, ticks_to_catch: u32, duration_ms: u64, tick_ms: u64) -> f64 {
    if ticks >= ticks_to_catch {
        return PROGRESS_COMPLETE;
    }
    let increment = PROGRESS_COMPLETE / (duration_ms as f64 / tick_ms as f64);
    (ticks as f64 * increment).min(PROGRESS_COMPLETE)
}

/// Advances a cast by one tick.
///
/// The catch is resolved exactly once, on the tick where progress reaches
/// 100. Ticking a finished session is a no-op.
pub fn tick_session(
    session: &mut FishingSession,
    location: &Location,
    catalog: &Catalog,
    angler: &str,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<FishingTickResult, CastError> {
    let mut result = FishingTickResult::default();

    match session.phase {
        FishingPhase::Reeling => {
            session.ticks_elapsed += 1;
            session.progress = progress_after(
                session.ticks_elapsed,
                session.ticks_to_catch,
                session.duration_ms,
                config.tick_ms,
            );
            result.progress = Some(session.progress);

            if session.ticks_elapsed >= session.ticks_to_catch {
                let outcome =
                    resolve_catch(session.power, location, catalog, angler, config, rng)?;
                debug!(
                    "Cast resolved after {} ticks: {} [{:?}]",
                    session.ticks_elapsed, outcome.fish.name, outcome.fish.rarity
                );
                session.catch = Some(outcome.fish.clone());
                session.phase = FishingPhase::Landed;
                session.landed_ticks_remaining = config.ticks_for(config.landed_display_ms);
                result.outcome = Some(outcome);
            }
        }
        FishingPhase::Landed => {
            if session.landed_ticks_remaining > 0 {
                session.landed_ticks_remaining -= 1;
            }
            result.finished = session.landed_ticks_remaining == 0;
        }
    }

    Ok(result)
}
