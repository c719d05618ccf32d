//! Round state and core simulation types
//!
//! Everything the per-tick step mutates lives in [`RoundState`]. Pegs are a
//! dense vector of values; nothing outside the round holds onto them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Where the round currently is, derived from the round flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball resting at the launch point, waiting for a launch
    Idle,
    /// Ball moving
    InFlight,
    /// Score reached the win threshold; waits for a restart
    Won,
    /// Out of balls; counting down to the automatic reset
    Lost,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    /// Ball resting at the launch point with its default velocity
    pub fn at_rest(config: &GameConfig) -> Self {
        Self {
            pos: config.launch_point,
            vel: config.rest_velocity,
            radius: config.ball_radius,
        }
    }
}

/// A static circular obstacle, scores once
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    pub pos: Vec2,
    pub radius: f32,
    pub is_hit: bool,
}

impl Peg {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            is_hit: false,
        }
    }
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the launch point
    Launched { direction: Vec2 },
    /// Peg at `index` was hit for the first time this round
    PegHit { index: usize, pos: Vec2 },
    /// Ball reached the floor and went back to the launch point
    BallReturned,
    /// Score crossed the win threshold
    Won,
    /// Last ball returned without a win
    Lost,
    /// Board was rebuilt (restart or automatic reset after a loss)
    Reset,
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    pub config: GameConfig,
    pub ball: Body,
    pub pegs: Vec<Peg>,
    pub score: u32,
    pub balls_launched: u32,
    pub is_launched: bool,
    pub game_won: bool,
    pub game_over: bool,
    pub end_message_timer: u32,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    rng: Pcg32,
}

impl RoundState {
    /// Create a round with pegs placed by an RNG seeded from `seed`
    ///
    /// `config` must pass [`GameConfig::validate`]; peg placement samples the
    /// peg area directly.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pegs = place_pegs(&config, &mut rng);
        Self::build(config, pegs, rng)
    }

    /// Create a round with a fixed peg layout
    ///
    /// The layout is used as given for this round only; a reset re-randomizes.
    pub fn with_pegs(config: GameConfig, pegs: Vec<Peg>, seed: u64) -> Self {
        Self::build(config, pegs, Pcg32::seed_from_u64(seed))
    }

    fn build(config: GameConfig, pegs: Vec<Peg>, rng: Pcg32) -> Self {
        Self {
            ball: Body::at_rest(&config),
            pegs,
            score: 0,
            balls_launched: 0,
            is_launched: false,
            game_won: false,
            game_over: false,
            end_message_timer: 0,
            time_ticks: 0,
            rng,
            config,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.game_over {
            RoundPhase::Lost
        } else if self.game_won {
            RoundPhase::Won
        } else if self.is_launched {
            RoundPhase::InFlight
        } else {
            RoundPhase::Idle
        }
    }

    pub fn balls_remaining(&self) -> u32 {
        self.config.launch_limit.saturating_sub(self.balls_launched)
    }

    /// Pegs not yet hit, with their storage index
    pub fn live_pegs(&self) -> impl Iterator<Item = (usize, &Peg)> {
        self.pegs.iter().enumerate().filter(|(_, p)| !p.is_hit)
    }

    /// Put the ball back at the launch point, at rest
    pub fn return_ball(&mut self) {
        self.is_launched = false;
        self.ball = Body::at_rest(&self.config);
    }

    /// Rebuild the board: fresh peg positions, counters and flags cleared
    pub fn reset(&mut self) {
        self.return_ball();
        self.score = 0;
        self.balls_launched = 0;
        self.game_won = false;
        self.game_over = false;
        self.end_message_timer = 0;

        let config = &self.config;
        let rng = &mut self.rng;
        if self.pegs.len() != config.peg_count {
            self.pegs = place_pegs(config, rng);
        } else {
            for peg in &mut self.pegs {
                *peg = Peg::new(random_peg_pos(config, rng), config.peg_radius);
            }
        }
        log::info!("Round reset: {} pegs placed", self.pegs.len());
    }
}

fn random_peg_pos(config: &GameConfig, rng: &mut Pcg32) -> Vec2 {
    let area = &config.peg_area;
    Vec2::new(
        rng.random_range(area.min_x..=area.max_x),
        rng.random_range(area.min_y..=area.max_y),
    )
}

/// Scatter `peg_count` pegs uniformly over the configured peg area
pub fn place_pegs(config: &GameConfig, rng: &mut Pcg32) -> Vec<Peg> {
    (0..config.peg_count)
        .map(|_| Peg::new(random_peg_pos(config, rng), config.peg_radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let state = RoundState::new(GameConfig::default(), 42);
        assert_eq!(state.pegs.len(), 10);
        assert_eq!(state.score, 0);
        assert_eq!(state.balls_launched, 0);
        assert_eq!(state.balls_remaining(), 15);
        assert_eq!(state.phase(), RoundPhase::Idle);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 50.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.ball.radius, 10.0);

        let area = state.config.peg_area;
        for peg in &state.pegs {
            assert!(area.contains(peg.pos), "peg outside area: {:?}", peg.pos);
            assert_eq!(peg.radius, 10.0);
            assert!(!peg.is_hit);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = RoundState::new(GameConfig::default(), 7);
        let b = RoundState::new(GameConfig::default(), 7);
        assert_eq!(a.pegs, b.pegs);
    }

    #[test]
    fn test_reset_restores_round() {
        let mut state = RoundState::new(GameConfig::default(), 99);
        let before: Vec<Vec2> = state.pegs.iter().map(|p| p.pos).collect();

        state.score = 60;
        state.balls_launched = 9;
        state.is_launched = true;
        state.game_won = true;
        state.game_over = true;
        state.end_message_timer = 40;
        state.ball.pos = Vec2::new(12.0, 500.0);
        for peg in state.pegs.iter_mut().take(6) {
            peg.is_hit = true;
        }

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.balls_launched, 0);
        assert!(!state.is_launched);
        assert!(!state.game_won);
        assert!(!state.game_over);
        assert_eq!(state.end_message_timer, 0);
        assert_eq!(state.ball, Body::at_rest(&state.config));
        assert_eq!(state.pegs.len(), 10);
        assert!(state.pegs.iter().all(|p| !p.is_hit));
        assert!(state.pegs.iter().all(|p| state.config.peg_area.contains(p.pos)));

        let after: Vec<Vec2> = state.pegs.iter().map(|p| p.pos).collect();
        assert_ne!(before, after, "reset should re-randomize peg positions");
    }

    #[test]
    fn test_reset_replaces_custom_layout() {
        let pegs = vec![Peg::new(Vec2::new(100.0, 400.0), 10.0)];
        let mut state = RoundState::with_pegs(GameConfig::default(), pegs, 1);
        assert_eq!(state.pegs.len(), 1);
        state.reset();
        assert_eq!(state.pegs.len(), 10);
    }

    #[test]
    fn test_phase_priority() {
        let mut state = RoundState::new(GameConfig::default(), 3);
        state.is_launched = true;
        assert_eq!(state.phase(), RoundPhase::InFlight);
        state.game_won = true;
        assert_eq!(state.phase(), RoundPhase::Won);
        state.game_won = false;
        state.game_over = true;
        assert_eq!(state.phase(), RoundPhase::Lost);
    }

    #[test]
    fn test_live_pegs_skip_hit() {
        let mut state = RoundState::new(GameConfig::default(), 5);
        state.pegs[0].is_hit = true;
        state.pegs[3].is_hit = true;
        let live: Vec<usize> = state.live_pegs().map(|(i, _)| i).collect();
        assert_eq!(live, vec![1, 2, 4, 5, 6, 7, 8, 9]);
    }
}
