//! Timed obstacle spawning
//!
//! The random source is passed in so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Timestamp of the last spawn (ms); `None` spawns on the first playing tick
    pub last_spawn_ms: Option<f64>,
}

impl ObstacleSpawner {
    /// Spawn a new obstacle at the right edge once more than `spawn_interval_ms`
    /// has elapsed since the last one
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        tuning: &Tuning,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut R,
    ) -> bool {
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last > tuning.spawn_interval_ms,
        };
        if !due {
            return false;
        }

        let gap_center = draw_gap_center(tuning, rng);
        obstacles.push(Obstacle {
            x: tuning.playfield_width,
            width: tuning.obstacle_width,
            gap_center,
            gap_height: tuning.gap_height,
            passed: false,
        });
        self.last_spawn_ms = Some(now_ms);
        log::debug!("Spawned obstacle with gap at {:.1}", gap_center);
        true
    }
}

/// Uniform gap centre in `[margin_top, height - margin_bottom]`.
/// A degenerate or non-finite range collapses to `margin_top`.
pub fn draw_gap_center<R: Rng>(tuning: &Tuning, rng: &mut R) -> f32 {
    let min = tuning.gap_margin_top;
    let max = tuning.playfield_height - tuning.gap_margin_bottom;
    if !(max - min).is_finite() || max <= min {
        return if min.is_finite() {
            min
        } else {
            tuning.playfield_height / 2.0
        };
    }
    rng.random_range(min..=max).clamp(min, max)
}
