//! Idle/demo controller
//!
//! Decides when to activate so the game can play itself in attract mode and
//! in the headless runner.

use super::state::{GamePhase, GameState, Obstacle};

/// Returns true if the autopilot wants to press activate this frame
pub fn wants_activate(state: &GameState) -> bool {
    let session = &state.session;
    match session.phase {
        GamePhase::Ready => true,
        GamePhase::Playing => {
            let actor = &session.actor;
            // Aim slightly below the gap centre; a jump lifts about 70px
            let target = next_obstacle(state)
                .map(|o| o.gap_center + o.gap_height * 0.2)
                .unwrap_or(state.tuning.playfield_height / 2.0);
            actor.vel_y > 0.0 && actor.pos.y > target
        }
        GamePhase::Paused | GamePhase::GameOver => false,
    }
}

/// First obstacle whose trailing edge is still ahead of the actor's back
fn next_obstacle(state: &GameState) -> Option<&Obstacle> {
    let actor = &state.session.actor;
    state
        .session
        .obstacles
        .iter()
        .find(|o| o.trailing_edge() > actor.pos.x - actor.radius)
}
