//! Day/night cycle
//!
//! The phase flips on a fixed interval; `blend` eases toward 1 at night and
//! toward 0 by day, saturating at the bounds.

use serde::{Deserialize, Serialize};

use crate::lerp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentCycle {
    pub is_night: bool,
    /// 0 = full day, 1 = full night
    pub blend: f32,
    /// Timestamp of the last phase flip (ms)
    pub last_flip_ms: f64,
}

impl EnvironmentCycle {
    pub fn new(now_ms: f64) -> Self {
        Self {
            is_night: false,
            blend: 0.0,
            last_flip_ms: now_ms,
        }
    }

    /// Move blend toward the current phase by `delta_ms / duration_ms`
    pub fn advance(&mut self, delta_ms: f64, duration_ms: f64) {
        let delta_ms = delta_ms.max(0.0);
        let step = (delta_ms / duration_ms) as f32;
        let direction = if self.is_night { 1.0 } else { -1.0 };
        let next = self.blend + direction * step;
        self.blend = if next.is_nan() { self.blend } else { next.clamp(0.0, 1.0) };
    }

    /// Toggle phase once `interval_ms` has elapsed since the last flip.
    /// Returns true if a flip happened.
    pub fn maybe_flip(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if now_ms - self.last_flip_ms >= interval_ms {
            self.is_night = !self.is_night;
            self.last_flip_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Interpolate a day value toward its night counterpart
    pub fn mix(&self, day: f32, night: f32) -> f32 {
        lerp(day, night, self.blend)
    }

    /// Stars appear once night dominates
    pub fn stars_visible(&self) -> bool {
        self.blend > 0.5
    }
}
