//! Game state and core simulation types
//!
//! All state the simulation mutates lives here. The session owns the actor and
//! obstacles; the environment cycle and parallax layers sit beside it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::environment::EnvironmentCycle;
use super::parallax::ParallaxSet;
use super::spawner::ObstacleSpawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activate; only cosmetic layers move
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Everything frozen
    Paused,
    /// Run ended; the actor falls until the player restarts
    GameOver,
}

/// Notable things the simulation reports to the host
///
/// Sound, storage and UI react to these instead of being called from the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First activate in the ready phase
    Started,
    /// Jump impulse applied
    Jumped,
    /// An obstacle moved behind the actor
    ObstaclePassed { score: u64 },
    /// Score exceeded the previous best; the host should persist it
    BestScoreAchieved { best: u64 },
    /// Actor hit an obstacle or left the playfield
    Died { score: u64 },
    Paused,
    Resumed,
    /// Session returned to ready
    Reset,
    /// Best score cleared; the host should forget the stored value
    BestScoreReset,
    ObstacleSpawned,
    /// Environment changed phase
    PhaseFlipped { night: bool },
}

/// Facial expression derived from the actor's motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    Normal,
    Up,
    Down,
    Dead,
}

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (pixels per tick, positive is down)
    pub vel_y: f32,
    /// Visual tilt in radians (positive is nose up)
    pub rotation: f32,
}

impl Actor {
    /// Actor at its starting pose: a quarter across, vertically centred, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_x(), tuning.playfield_height / 2.0),
            radius: tuning.actor_radius,
            vel_y: 0.0,
            rotation: 0.0,
        }
    }

    pub fn expression(&self, phase: GamePhase) -> Expression {
        if phase == GamePhase::GameOver {
            Expression::Dead
        } else if self.vel_y < -3.0 {
            Expression::Up
        } else if self.vel_y > 3.0 {
            Expression::Down
        } else {
            Expression::Normal
        }
    }
}

/// A scrolling obstacle with a vertical gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub gap_center: f32,
    pub gap_height: f32,
    /// Set once the obstacle has been scored
    pub passed: bool,
}

impl Obstacle {
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Right edge
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Fully scrolled past the left edge of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Per-run session data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen, seeded from storage at startup
    pub best_score: u64,
    pub actor: Actor,
    /// Obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub spawner: ObstacleSpawner,
    /// Remaining screen shake time (ms)
    pub shake_ms: f64,
    /// Current shake offset for the renderer
    pub shake_offset: Vec2,
    /// Death fade progress (0-1)
    pub death_fade: f32,
}

impl GameSession {
    pub fn new(tuning: &Tuning, best_score: u64) -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            best_score,
            actor: Actor::new(tuning),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::default(),
            shake_ms: 0.0,
            shake_offset: Vec2::ZERO,
            death_fade: 0.0,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub session: GameSession,
    pub environment: EnvironmentCycle,
    pub parallax: ParallaxSet,
    /// Selected actor skin (cosmetic, survives resets)
    pub skin: usize,
    /// Events produced since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state in the ready phase
    pub fn new<R: Rng>(tuning: Tuning, best_score: u64, now_ms: f64, rng: &mut R) -> Self {
        let session = GameSession::new(&tuning, best_score);
        let parallax = ParallaxSet::generate(rng);
        Self {
            tuning,
            session,
            environment: EnvironmentCycle::new(now_ms),
            parallax,
            skin: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Return to the ready phase, keeping best score and skin
    pub fn reset<R: Rng>(&mut self, now_ms: f64, rng: &mut R) {
        self.session = GameSession::new(&self.tuning, self.session.best_score);
        self.environment = EnvironmentCycle::new(now_ms);
        self.parallax = ParallaxSet::generate(rng);
        self.emit(GameEvent::Reset);
        log::info!("Session reset (best {})", self.session.best_score);
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enter game over (no-op if already there)
    pub fn game_over(&mut self) {
        if self.session.phase == GamePhase::GameOver {
            return;
        }
        self.session.phase = GamePhase::GameOver;
        self.session.shake_ms = self.tuning.shake_duration_ms;
        self.session.death_fade = 0.0;
        let score = self.session.score;
        self.emit(GameEvent::Died { score });
        log::info!("Game over with score {}", score);
    }

    /// Add one point and track a new best
    pub fn award_pass(&mut self) {
        self.session.score += 1;
        let score = self.session.score;
        self.emit(GameEvent::ObstaclePassed { score });
        if score > self.session.best_score {
            self.session.best_score = score;
            self.emit(GameEvent::BestScoreAchieved { best: score });
            log::info!("New best score: {}", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        let mut rng = Pcg32::seed_from_u64(1);
        GameState::new(Tuning::default(), 0, 0.0, &mut rng)
    }

    #[test]
    fn test_new_state_is_ready() {
        let state = state();
        assert_eq!(state.phase(), GamePhase::Ready);
        assert_eq!(state.session.actor.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.session.actor.radius, 15.0);
        assert!(state.session.obstacles.is_empty());
    }

    #[test]
    fn test_award_pass_tracks_best() {
        let mut state = state();
        state.session.best_score = 1;

        state.award_pass();
        assert_eq!(state.session.score, 1);
        assert_eq!(state.session.best_score, 1);

        state.award_pass();
        assert_eq!(state.session.best_score, 2);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::ObstaclePassed { score: 1 },
                GameEvent::ObstaclePassed { score: 2 },
                GameEvent::BestScoreAchieved { best: 2 },
            ]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_game_over_only_once() {
        let mut state = state();
        state.session.phase = GamePhase::Playing;
        state.game_over();
        state.game_over();
        let deaths = state
            .take_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Died { .. }))
            .count();
        assert_eq!(deaths, 1);
        assert_eq!(state.session.shake_ms, 250.0);
    }

    #[test]
    fn test_expression() {
        let mut actor = Actor::new(&Tuning::default());
        assert_eq!(actor.expression(GamePhase::Playing), Expression::Normal);
        actor.vel_y = -7.0;
        assert_eq!(actor.expression(GamePhase::Playing), Expression::Up);
        actor.vel_y = 4.0;
        assert_eq!(actor.expression(GamePhase::Playing), Expression::Down);
        assert_eq!(actor.expression(GamePhase::GameOver), Expression::Dead);
    }

    #[test]
    fn test_obstacle_gap_bounds() {
        let obstacle = Obstacle {
            x: 10.0,
            width: 60.0,
            gap_center: 200.0,
            gap_height: 140.0,
            passed: false,
        };
        assert_eq!(obstacle.gap_top(), 130.0);
        assert_eq!(obstacle.gap_bottom(), 270.0);
        assert_eq!(obstacle.trailing_edge(), 70.0);
        assert!(!obstacle.is_offscreen());
    }
}
