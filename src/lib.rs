//! Skyhop - A side-scrolling obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `engine`: Host-facing facade driven by frame timestamps
//! - `platform`: Headless runner and browser bindings
//! - `persistence`: Best score storage
//! - `audio`: Sound cues derived from game events
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod clock;
pub mod engine;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use engine::Engine;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Actor defaults (per-tick units, not time scaled)
    pub const ACTOR_RADIUS: f32 = 15.0;
    /// Horizontal actor position as a fraction of playfield width
    pub const ACTOR_X_RATIO: f32 = 0.25;
    pub const GRAVITY: f32 = 0.35;
    pub const JUMP_IMPULSE: f32 = -7.0;

    /// Tilt: nose up while rising faster than the threshold
    pub const TILT_UP_THRESHOLD: f32 = -2.0;
    pub const TILT_UP_STEP: f32 = 0.2;
    pub const TILT_UP_CAP: f32 = 0.6;
    pub const TILT_DOWN_STEP: f32 = 0.15;
    pub const TILT_DOWN_CAP: f32 = -1.2;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 140.0;
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const GAP_MARGIN_TOP: f32 = 100.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 100.0;

    /// Day/night cycle
    pub const DAY_NIGHT_INTERVAL_MS: f64 = 7000.0;
    pub const BLEND_DURATION_MS: f64 = 1500.0;

    /// Game-over presentation
    pub const SHAKE_DURATION_MS: f64 = 250.0;
    pub const SHAKE_MAGNITUDE: f32 = 6.0;
    pub const DEATH_FADE_MS: f64 = 700.0;
    /// Descent while dead, in pixels per millisecond
    pub const DEATH_FALL_RATE: f32 = 0.1;

    /// Largest frame delta accepted from the host (prevents huge jumps after a stall)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Number of selectable actor skins
    pub const SKIN_COUNT: usize = 5;

    /// Parallax layer speeds (pixels per tick)
    pub const CLOUD_SPEED: f32 = 0.3;
    pub const MOUNTAIN_SPEED: f32 = 0.15;
    pub const HILL_SPEED: f32 = 0.7;

    /// Offscreen-right margins used when a layer is recycled
    pub const CLOUD_MARGIN: f32 = 100.0;
    pub const MOUNTAIN_MARGIN: f32 = 100.0;
    pub const HILL_MARGIN: f32 = 50.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
