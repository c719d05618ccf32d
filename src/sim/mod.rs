//! Round simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no delta time
//! - Seeded RNG only
//! - Stable iteration order (peg storage order)
//! - No rendering, audio or input dependencies

pub mod collision;
pub mod config;
pub mod integrate;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{check_collision, collision_response, reached_floor, wall_bounce};
pub use config::{ConfigError, GameConfig, PegArea};
pub use integrate::{apply_gravity, integrate_position};
pub use state::{Body, GameEvent, Peg, RoundPhase, RoundState};
pub use tick::{TickInput, launch, restart, tick};
pub use vector::{distance, normalize, reflect};
