//! Headless runner
//!
//! Drives the engine at a fixed frame rate without a renderer. The autopilot
//! supplies input; events are forwarded to a best score store.

use crate::Engine;
use crate::audio::cues_for;
use crate::persistence::{BestScoreStore, persist_events};
use crate::sim::GamePhase;
use crate::sim::autopilot::wants_activate;

/// Summary of a headless run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub frames: u32,
    pub runs: u32,
    pub deaths: u32,
    pub best_run_score: u64,
    pub best_score: u64,
    pub sound_cues: usize,
}

#[derive(Debug, Clone)]
pub struct HeadlessRunner {
    pub frame_ms: f64,
    pub frames: u32,
    /// Restart automatically after dying (after `restart_delay_frames`)
    pub auto_restart: bool,
    pub restart_delay_frames: u32,
}

impl Default for HeadlessRunner {
    fn default() -> Self {
        Self {
            frame_ms: 1000.0 / 60.0,
            frames: 60 * 60,
            auto_restart: true,
            restart_delay_frames: 45,
        }
    }
}

impl HeadlessRunner {
    pub fn run(&self, engine: &mut Engine, store: &mut dyn BestScoreStore) -> RunReport {
        let mut report = RunReport::default();
        let mut dead_frames = 0;

        for i in 0..self.frames {
            let now = i as f64 * self.frame_ms;
            let phase = engine.state().phase();

            match phase {
                GamePhase::GameOver if self.auto_restart => {
                    dead_frames += 1;
                    if dead_frames >= self.restart_delay_frames {
                        engine.activate();
                        dead_frames = 0;
                    }
                }
                _ if wants_activate(engine.state()) => {
                    if phase == GamePhase::Ready {
                        report.runs += 1;
                    }
                    engine.activate();
                }
                _ => {}
            }

            let snap = engine.tick(now);
            report.frames += 1;
            report.best_run_score = report.best_run_score.max(snap.score);
            report.best_score = snap.best_score;

            let events = engine.take_events();
            report.deaths += events
                .iter()
                .filter(|e| matches!(e, crate::sim::GameEvent::Died { .. }))
                .count() as u32;
            report.sound_cues += cues_for(&events, engine.settings()).len();
            persist_events(store, &events);
        }

        log::info!(
            "Headless run finished: {} frames, {} runs, best run {}",
            report.frames,
            report.runs,
            report.best_run_score
        );
        report
    }
}
