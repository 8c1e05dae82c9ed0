//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick constants for actor and obstacle motion
//! - Injected RNG only
//! - Side effects reported as `GameEvent`s, never performed
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod environment;
pub mod input;
pub mod parallax;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{check_collision, check_pass, out_of_bounds};
pub use environment::EnvironmentCycle;
pub use input::{Command, process_command};
pub use parallax::{LayerKind, ParallaxLayer, ParallaxSet};
pub use snapshot::{ActorPose, EnvironmentView, RenderableState};
pub use spawner::ObstacleSpawner;
pub use state::{Actor, Expression, GameEvent, GamePhase, GameSession, GameState, Obstacle};
pub use tick::{Frame, tick};
