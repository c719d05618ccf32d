//! Round configuration
//!
//! Every tunable number the simulation uses lives in [`GameConfig`]. The
//! defaults reproduce the classic 800x600 board.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rectangle (inclusive) in which peg centres are placed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PegArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PegArea {
    /// Whether a point lies inside the area (edges included)
    pub fn contains(&self, p: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

impl Default for PegArea {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: SCREEN_WIDTH - 50.0,
            min_y: SCREEN_HEIGHT / 2.0,
            max_y: SCREEN_HEIGHT - 10.0,
        }
    }
}

/// Simulation constants for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub peg_count: usize,
    pub peg_radius: f32,
    /// Balls available per round
    pub launch_limit: u32,
    /// Launch speed in units per tick
    pub launch_speed: f32,
    /// Downward acceleration in units per tick²
    pub gravity: f32,
    pub win_score: u32,
    /// Ticks the "You lose!" banner stays up before the automatic reset
    pub end_message_duration: u32,
    pub peg_score: u32,
    pub ball_radius: f32,
    /// Where the ball rests between launches
    pub launch_point: Vec2,
    /// Velocity the resting ball carries (ignored until launch)
    pub rest_velocity: Vec2,
    pub peg_area: PegArea,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            peg_count: PEG_COUNT,
            peg_radius: PEG_RADIUS,
            launch_limit: LAUNCH_LIMIT,
            launch_speed: LAUNCH_SPEED,
            gravity: GRAVITY,
            win_score: WIN_SCORE,
            end_message_duration: END_MESSAGE_TICKS,
            peg_score: PEG_SCORE,
            ball_radius: BALL_RADIUS,
            launch_point: LAUNCH_POINT,
            rest_velocity: REST_VELOCITY,
            peg_area: PegArea::default(),
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config text is not valid JSON for [`GameConfig`]
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {err}"),
            ConfigError::Parse(err) => write!(f, "failed to parse config: {err}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("peg_radius", self.peg_radius),
            ("launch_speed", self.launch_speed),
            ("gravity", self.gravity),
            ("ball_radius", self.ball_radius),
            ("launch_point", self.launch_point.x),
            ("launch_point", self.launch_point.y),
            ("rest_velocity", self.rest_velocity.x),
            ("rest_velocity", self.rest_velocity.y),
            ("peg_area", self.peg_area.min_x),
            ("peg_area", self.peg_area.max_x),
            ("peg_area", self.peg_area.min_y),
            ("peg_area", self.peg_area.max_y),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(*field, "must be a finite number"));
        }

        if self.screen_width <= 0.0 {
            return Err(invalid("screen_width", "must be positive"));
        }
        if self.screen_height <= 0.0 {
            return Err(invalid("screen_height", "must be positive"));
        }
        if self.peg_radius <= 0.0 {
            return Err(invalid("peg_radius", "must be positive"));
        }
        if self.ball_radius <= 0.0 {
            return Err(invalid("ball_radius", "must be positive"));
        }
        if self.launch_speed <= 0.0 {
            return Err(invalid("launch_speed", "must be positive"));
        }
        if self.launch_limit == 0 {
            return Err(invalid("launch_limit", "must allow at least one ball"));
        }
        if self.peg_score == 0 {
            return Err(invalid("peg_score", "must be positive"));
        }

        let area = &self.peg_area;
        if area.min_x > area.max_x || area.min_y > area.max_y {
            return Err(invalid("peg_area", "min must not exceed max"));
        }
        if area.min_x < 0.0
            || area.min_y < 0.0
            || area.max_x > self.screen_width
            || area.max_y > self.screen_height
        {
            return Err(invalid("peg_area", "must lie inside the screen"));
        }

        Ok(())
    }

    /// Largest score a single round can reach
    pub fn max_round_score(&self) -> u32 {
        self.peg_score * self.peg_count as u32
    }
}
