//! Pegfall - a peg-breaker arcade game core
//!
//! Core modules:
//! - `sim`: Round simulation (gravity, peg collisions, round state machine)
//! - `controller`: Per-frame input polling, event dispatch, presentation snapshots
//! - `audio`: Sound effect triggers
//! - `settings`: JSON-loadable configuration
//! - `autoplay`: Scripted input for headless runs

pub mod audio;
pub mod autoplay;
pub mod controller;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use controller::{Control, GameController, InputSource, Snapshot};
pub use settings::Settings;

/// Default board constants
pub mod consts {
    use glam::Vec2;

    /// Board dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Peg defaults
    pub const PEG_COUNT: usize = 10;
    pub const PEG_RADIUS: f32 = 10.0;
    pub const PEG_SCORE: u32 = 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const LAUNCH_POINT: Vec2 = Vec2::new(400.0, 50.0);
    pub const REST_VELOCITY: Vec2 = Vec2::new(5.0, 0.0);
    /// Units per tick
    pub const LAUNCH_SPEED: f32 = 25.0;
    /// Units per tick²
    pub const GRAVITY: f32 = 1.0;

    /// Round rules
    pub const LAUNCH_LIMIT: u32 = 15;
    pub const WIN_SCORE: u32 = 100;
    /// Loss banner duration before the automatic reset (2 seconds at 60 fps)
    pub const END_MESSAGE_TICKS: u32 = 120;
}
