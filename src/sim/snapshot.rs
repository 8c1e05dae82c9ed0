//! Read-only view of the state for renderers

use glam::Vec2;
use serde::Serialize;

use super::parallax::ParallaxLayer;
use super::state::{Expression, GamePhase, GameState, Obstacle};

/// Actor pose as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorPose {
    pub pos: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub vel_y: f32,
    pub expression: Expression,
    pub skin: usize,
    /// 1 = fully visible, fades to 0 after death
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentView {
    pub is_night: bool,
    /// 0 = day, 1 = night
    pub blend: f32,
    pub stars_visible: bool,
    /// Clouds thin out at night
    pub cloud_opacity: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableState {
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    pub actor: ActorPose,
    pub obstacles: Vec<Obstacle>,
    pub layers: Vec<ParallaxLayer>,
    pub environment: EnvironmentView,
    /// Camera offset while the screen shakes
    pub shake_offset: Vec2,
    pub playfield: Vec2,
    pub ground_y: f32,
}

impl RenderableState {
    pub fn capture(state: &GameState, screen_shake: bool) -> Self {
        let session = &state.session;
        let env = &state.environment;
        let opacity = if session.phase == GamePhase::GameOver {
            1.0 - session.death_fade
        } else {
            1.0
        };

        Self {
            phase: session.phase,
            score: session.score,
            best_score: session.best_score,
            actor: ActorPose {
                pos: session.actor.pos,
                radius: session.actor.radius,
                rotation: session.actor.rotation,
                vel_y: session.actor.vel_y,
                expression: session.actor.expression(session.phase),
                skin: state.skin,
                opacity,
            },
            obstacles: session.obstacles.clone(),
            layers: state.parallax.layers.clone(),
            environment: EnvironmentView {
                is_night: env.is_night,
                blend: env.blend,
                stars_visible: env.stars_visible(),
                cloud_opacity: env.mix(1.0, 0.3),
            },
            shake_offset: if screen_shake {
                session.shake_offset
            } else {
                Vec2::ZERO
            },
            playfield: Vec2::new(state.tuning.playfield_width, state.tuning.playfield_height),
            ground_y: state.tuning.ground_y(),
        }
    }
}
