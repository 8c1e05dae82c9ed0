//! Per-frame simulation tick
//!
//! Advances the game state by one frame according to the current phase.

use glam::Vec2;
use rand::Rng;

use super::collision::{check_collision, check_pass, out_of_bounds};
use super::state::{GameEvent, GamePhase, GameState};

/// Timing for a single tick, already sanitized by the host clock
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    /// Milliseconds since the previous tick (never negative)
    pub delta_ms: f64,
    /// Current timestamp (ms, non-decreasing)
    pub now_ms: f64,
}

/// Advance the game state by one frame
pub fn tick<R: Rng>(state: &mut GameState, frame: Frame, rng: &mut R) {
    match state.session.phase {
        GamePhase::Paused => {}
        GamePhase::Ready => {
            state.parallax.advance(state.tuning.playfield_width);
        }
        GamePhase::Playing => tick_playing(state, frame, rng),
        GamePhase::GameOver => tick_game_over(state, frame, rng),
    }
}

fn tick_playing<R: Rng>(state: &mut GameState, frame: Frame, rng: &mut R) {
    let tuning = &state.tuning;

    // Day/night
    if state
        .environment
        .maybe_flip(frame.now_ms, tuning.day_night_interval_ms)
    {
        let night = state.environment.is_night;
        log::debug!("Environment flipped to {}", if night { "night" } else { "day" });
        state.events.push(GameEvent::PhaseFlipped { night });
    }
    state
        .environment
        .advance(frame.delta_ms, tuning.blend_duration_ms);

    state.parallax.advance(tuning.playfield_width);

    // Actor
    state.session.actor.integrate(tuning);
    let mut crashed = out_of_bounds(&state.session.actor, tuning);

    // Obstacles: scroll, score, collide. A pass on the dying frame still counts.
    let speed = tuning.obstacle_speed;
    let mut passes = 0;
    for obstacle in &mut state.session.obstacles {
        obstacle.x -= speed;
        if check_pass(&state.session.actor, obstacle) {
            passes += 1;
        }
        crashed |= check_collision(&state.session.actor, obstacle);
    }
    for _ in 0..passes {
        state.award_pass();
    }
    state.session.obstacles.retain(|o| !o.is_offscreen());
    if crashed {
        state.game_over();
        return;
    }

    // Spawn after scrolling so a new obstacle starts exactly at the right edge
    let session = &mut state.session;
    if session
        .spawner
        .maybe_spawn(frame.now_ms, &state.tuning, &mut session.obstacles, rng)
    {
        state.events.push(GameEvent::ObstacleSpawned);
    }
}

fn tick_game_over<R: Rng>(state: &mut GameState, frame: Frame, rng: &mut R) {
    let tuning = &state.tuning;
    let session = &mut state.session;

    session.shake_ms = (session.shake_ms - frame.delta_ms).max(0.0);
    session.shake_offset = if session.shake_ms > 0.0 {
        let magnitude = tuning.shake_magnitude;
        Vec2::new(
            (rng.random::<f32>() - 0.5) * magnitude,
            (rng.random::<f32>() - 0.5) * magnitude,
        )
    } else {
        Vec2::ZERO
    };

    session.death_fade =
        (session.death_fade + (frame.delta_ms / tuning.death_fade_ms) as f32).min(1.0);
    session.actor.fall(frame.delta_ms, tuning);
}
