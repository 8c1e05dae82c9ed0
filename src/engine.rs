//! Host-facing game engine
//!
//! Owns the simulation state, the frame clock and the random source. A host
//! calls [`Engine::tick`] once per animation frame, forwards player input as
//! commands and drains [`GameEvent`]s to drive audio and storage.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::clock::FrameClock;
use crate::settings::Settings;
use crate::sim::{Command, GameEvent, GameState, RenderableState, process_command, tick};
use crate::tuning::Tuning;

pub struct Engine<R: Rng = Pcg32> {
    state: GameState,
    clock: FrameClock,
    rng: R,
    settings: Settings,
}

impl Engine<Pcg32> {
    /// Engine with a seeded PCG random source
    pub fn new(seed: u64, tuning: Tuning, best_score: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning, best_score)
    }
}

impl<R: Rng> Engine<R> {
    /// Engine with a caller-supplied random source
    pub fn with_rng(mut rng: R, tuning: Tuning, best_score: u64) -> Self {
        let state = GameState::new(tuning.sanitized(), best_score, 0.0, &mut rng);
        Self {
            state,
            clock: FrameClock::new(),
            rng,
            settings: Settings::default(),
        }
    }

    /// Advance one frame and return what to draw
    pub fn tick(&mut self, now_ms: f64) -> RenderableState {
        let first_frame = !self.clock.started();
        let frame = self.clock.advance(now_ms, self.state.tuning.max_frame_ms);
        if first_frame {
            // Day/night timing starts with the host's clock, not at zero
            self.state.environment.last_flip_ms = frame.now_ms;
        }
        tick(&mut self.state, frame, &mut self.rng);
        self.snapshot()
    }

    /// Jump, start or restart depending on phase
    pub fn activate(&mut self) {
        self.command(Command::Activate);
    }

    pub fn toggle_pause(&mut self) {
        self.command(Command::TogglePause);
    }

    pub fn reset_best_score(&mut self) {
        self.command(Command::ResetBestScore);
    }

    pub fn cycle_skin(&mut self) {
        self.command(Command::CycleSkin);
    }

    pub fn command(&mut self, command: Command) {
        let now = self.clock.now_ms();
        process_command(&mut self.state, command, now, &mut self.rng);
    }

    /// Current renderable view without advancing time
    pub fn snapshot(&self) -> RenderableState {
        RenderableState::capture(&self.state, self.settings.effective_screen_shake())
    }

    /// Drain events produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.state.take_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Obstacle};

    const FRAME_MS: f64 = 16.0;

    fn engine() -> Engine {
        Engine::new(777, Tuning::default(), 0)
    }

    #[test]
    fn test_activate_starts_run() {
        let mut engine = engine();
        engine.tick(1000.0);
        engine.activate();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.actor.vel_y, -7.0);
        assert_eq!(engine.take_events(), vec![GameEvent::Started, GameEvent::Jumped]);
    }

    #[test]
    fn test_environment_anchored_to_first_frame() {
        let mut engine = engine();
        engine.tick(50_000.0);
        assert_eq!(engine.state().environment.last_flip_ms, 50_000.0);

        engine.activate();
        let snap = engine.tick(50_016.0);
        assert!(!snap.environment.is_night);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut engine = engine();
        let mut now = 0.0;
        engine.tick(now);
        engine.activate();
        for _ in 0..10 {
            now += FRAME_MS;
            engine.tick(now);
        }
        engine.toggle_pause();
        let frozen = engine.snapshot();
        assert_eq!(frozen.phase, GamePhase::Paused);

        for _ in 0..100 {
            now += FRAME_MS;
            assert_eq!(engine.tick(now), frozen);
        }

        engine.toggle_pause();
        now += FRAME_MS;
        let resumed = engine.tick(now);
        assert_eq!(resumed.phase, GamePhase::Playing);
        assert_ne!(resumed.actor.pos, frozen.actor.pos);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut engine = engine();
        let mut now = 0.0;
        engine.tick(now);
        engine.activate();

        // Fall into the ground without further input
        while engine.snapshot().phase == GamePhase::Playing {
            now += FRAME_MS;
            engine.tick(now);
        }
        assert_eq!(engine.snapshot().phase, GamePhase::GameOver);
        assert!(
            engine
                .take_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Died { .. }))
        );

        now += FRAME_MS;
        engine.tick(now);
        engine.activate();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.score, 0);
        assert!(snap.obstacles.is_empty());
        assert_eq!(snap.actor.pos, glam::Vec2::new(100.0, 300.0));
        assert_eq!(snap.actor.vel_y, 0.0);
        assert_eq!(snap.actor.rotation, 0.0);
        assert_eq!(snap.environment.blend, 0.0);
        assert_eq!(snap.shake_offset, glam::Vec2::ZERO);
    }

    #[test]
    fn test_negative_and_stalled_time() {
        let mut engine = engine();
        engine.tick(1000.0);
        engine.activate();
        let before = engine.snapshot();

        assert_eq!(before.actor.pos.y, 300.0);

        // Going backwards still runs a tick, but with zero elapsed time:
        // per-tick physics applies once, timed effects don't move
        let snap = engine.tick(900.0);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!((snap.actor.vel_y - (-6.65)).abs() < 1e-5);
        assert!((snap.actor.pos.y - 293.35).abs() < 1e-4);
        assert_eq!(engine.state().environment.blend, 0.0);
        assert_eq!(engine.state().environment.last_flip_ms, 1000.0);
        assert_eq!(engine.state().session.spawner.last_spawn_ms, Some(1000.0));

        // After a stall the flip follows the timestamp, but blend only moves by the capped delta
        let snap = engine.tick(60_000.0);
        assert!((snap.actor.vel_y - (-6.3)).abs() < 1e-5);
        assert!(snap.environment.is_night);
        assert!((snap.environment.blend - 100.0 / 1500.0).abs() < 1e-6);
    }

    #[test]
    fn test_best_score_events() {
        let mut engine = Engine::new(5, Tuning::default(), 0);
        engine.tick(0.0);
        engine.activate();
        engine.take_events();
        engine.state.session.spawner.last_spawn_ms = Some(1e12);
        engine.state.session.obstacles.push(Obstacle {
            x: 40.0,
            width: 60.0,
            gap_center: 300.0,
            gap_height: 140.0,
            passed: false,
        });
        engine.state.session.actor.vel_y = 0.0;

        let snap = engine.tick(FRAME_MS);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.best_score, 1);
        let events = engine.take_events();
        assert!(events.contains(&GameEvent::ObstaclePassed { score: 1 }));
        assert!(events.contains(&GameEvent::BestScoreAchieved { best: 1 }));

        engine.reset_best_score();
        assert_eq!(engine.snapshot().best_score, 0);
        assert_eq!(engine.snapshot().score, 1);
        assert_eq!(engine.take_events(), vec![GameEvent::BestScoreReset]);
    }

    #[test]
    fn test_shake_respects_settings() {
        let mut engine = engine();
        engine.set_settings(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        engine.tick(0.0);
        engine.activate();
        engine.state.game_over();
        let snap = engine.tick(FRAME_MS);
        assert!(engine.state().session.shake_ms > 0.0);
        assert_eq!(snap.shake_offset, glam::Vec2::ZERO);
    }

    #[test]
    fn test_cycle_skin_in_snapshot() {
        let mut engine = engine();
        engine.cycle_skin();
        engine.cycle_skin();
        assert_eq!(engine.snapshot().actor.skin, 2);
    }
}
