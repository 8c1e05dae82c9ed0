//! Player commands and the phase transitions they trigger
//!
//! Commands that make no sense in the current phase are silently ignored.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Jump / start / restart depending on phase
    Activate,
    TogglePause,
    ResetBestScore,
    /// Select the next actor skin
    CycleSkin,
}

/// Apply a command immediately. `now_ms` is the latest host timestamp and is
/// only used when the command resets the session.
pub fn process_command<R: Rng>(state: &mut GameState, command: Command, now_ms: f64, rng: &mut R) {
    match command {
        Command::Activate => activate(state, now_ms, rng),
        Command::TogglePause => toggle_pause(state),
        Command::ResetBestScore => {
            state.session.best_score = 0;
            state.emit(GameEvent::BestScoreReset);
            log::info!("Best score reset");
        }
        Command::CycleSkin => {
            state.skin = (state.skin + 1) % state.tuning.skin_count.max(1);
        }
    }
}

fn activate<R: Rng>(state: &mut GameState, now_ms: f64, rng: &mut R) {
    match state.session.phase {
        GamePhase::Ready => {
            state.session.phase = GamePhase::Playing;
            state.session.actor.jump(&state.tuning);
            state.emit(GameEvent::Started);
            state.emit(GameEvent::Jumped);
            log::info!("Run started");
        }
        GamePhase::Playing => {
            state.session.actor.jump(&state.tuning);
            state.emit(GameEvent::Jumped);
        }
        GamePhase::GameOver => state.reset(now_ms, rng),
        GamePhase::Paused => {}
    }
}

fn toggle_pause(state: &mut GameState) {
    match state.session.phase {
        GamePhase::Playing => {
            state.session.phase = GamePhase::Paused;
            state.emit(GameEvent::Paused);
        }
        GamePhase::Paused => {
            state.session.phase = GamePhase::Playing;
            state.emit(GameEvent::Resumed);
        }
        _ => {}
    }
}
