//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON file can override it without a
//! rebuild. Missing fields fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::PersistError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_height: f32,

    // === Actor ===
    pub actor_radius: f32,
    pub actor_x_ratio: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub tilt_up_threshold: f32,
    pub tilt_up_step: f32,
    pub tilt_up_cap: f32,
    pub tilt_down_step: f32,
    pub tilt_down_cap: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub spawn_interval_ms: f64,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,

    // === Environment ===
    pub day_night_interval_ms: f64,
    pub blend_duration_ms: f64,

    // === Game over ===
    pub shake_duration_ms: f64,
    pub shake_magnitude: f32,
    pub death_fade_ms: f64,
    pub death_fall_rate: f32,

    // === Host ===
    pub max_frame_ms: f64,
    pub skin_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            actor_radius: ACTOR_RADIUS,
            actor_x_ratio: ACTOR_X_RATIO,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            tilt_up_threshold: TILT_UP_THRESHOLD,
            tilt_up_step: TILT_UP_STEP,
            tilt_up_cap: TILT_UP_CAP,
            tilt_down_step: TILT_DOWN_STEP,
            tilt_down_cap: TILT_DOWN_CAP,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,

            day_night_interval_ms: DAY_NIGHT_INTERVAL_MS,
            blend_duration_ms: BLEND_DURATION_MS,

            shake_duration_ms: SHAKE_DURATION_MS,
            shake_magnitude: SHAKE_MAGNITUDE,
            death_fade_ms: DEATH_FADE_MS,
            death_fall_rate: DEATH_FALL_RATE,

            max_frame_ms: MAX_FRAME_MS,
            skin_count: SKIN_COUNT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json_str(&json)?)
    }

    /// Load tuning from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values that would break the simulation with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix_f32 = |v: f32, d: f32| if v.is_finite() && v > 0.0 { v } else { d };
        let fix_f64 = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };
        let finite_f32 = |v: f32, d: f32| if v.is_finite() { v } else { d };
        let finite_f64 = |v: f64, d: f64| if v.is_finite() { v } else { d };

        self.playfield_width = fix_f32(self.playfield_width, defaults.playfield_width);
        self.playfield_height = fix_f32(self.playfield_height, defaults.playfield_height);
        self.actor_radius = fix_f32(self.actor_radius, defaults.actor_radius);
        self.obstacle_width = fix_f32(self.obstacle_width, defaults.obstacle_width);
        self.gap_height = fix_f32(self.gap_height, defaults.gap_height);
        self.obstacle_speed = fix_f32(self.obstacle_speed, defaults.obstacle_speed);
        self.gap_margin_top = finite_f32(self.gap_margin_top, defaults.gap_margin_top);
        self.gap_margin_bottom = finite_f32(self.gap_margin_bottom, defaults.gap_margin_bottom);
        self.gravity = finite_f32(self.gravity, defaults.gravity);
        self.jump_impulse = finite_f32(self.jump_impulse, defaults.jump_impulse);
        self.tilt_up_threshold = finite_f32(self.tilt_up_threshold, defaults.tilt_up_threshold);
        self.tilt_up_step = finite_f32(self.tilt_up_step, defaults.tilt_up_step);
        self.tilt_up_cap = finite_f32(self.tilt_up_cap, defaults.tilt_up_cap);
        self.tilt_down_step = finite_f32(self.tilt_down_step, defaults.tilt_down_step);
        self.tilt_down_cap = finite_f32(self.tilt_down_cap, defaults.tilt_down_cap);
        self.shake_magnitude = finite_f32(self.shake_magnitude, defaults.shake_magnitude);
        self.death_fall_rate = finite_f32(self.death_fall_rate, defaults.death_fall_rate);
        self.shake_duration_ms = finite_f64(self.shake_duration_ms, defaults.shake_duration_ms);
        self.spawn_interval_ms = fix_f64(self.spawn_interval_ms, defaults.spawn_interval_ms);
        self.day_night_interval_ms =
            fix_f64(self.day_night_interval_ms, defaults.day_night_interval_ms);
        self.blend_duration_ms = fix_f64(self.blend_duration_ms, defaults.blend_duration_ms);
        self.death_fade_ms = fix_f64(self.death_fade_ms, defaults.death_fade_ms);
        self.max_frame_ms = fix_f64(self.max_frame_ms, defaults.max_frame_ms);
        self.actor_x_ratio = finite_f32(self.actor_x_ratio, defaults.actor_x_ratio).clamp(0.0, 1.0);
        if !(0.0..self.playfield_height).contains(&self.ground_height) {
            self.ground_height = 0.0;
        }
        if self.skin_count == 0 {
            self.skin_count = 1;
        }
        self
    }

    /// Vertical coordinate of the ground surface
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Horizontal actor position
    pub fn actor_x(&self) -> f32 {
        self.playfield_width * self.actor_x_ratio
    }
}
