//! Autoplay input
//!
//! A scripted player for headless runs: aims at a live peg, launches whenever
//! the ball is resting and restarts after a win.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::controller::{Control, InputSource, Snapshot};
use crate::sim::RoundPhase;

/// How far (in units) aim may drift off the chosen peg
const AIM_JITTER: f32 = 8.0;

pub struct AutoPlayer {
    rng: Pcg32,
    launch: bool,
    restart: bool,
    pointer: Vec2,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            launch: false,
            restart: false,
            pointer: Vec2::ZERO,
        }
    }

    /// Decide this frame's input from the latest snapshot
    pub fn plan(&mut self, snap: &Snapshot) {
        self.launch = false;
        self.restart = false;

        match snap.phase {
            RoundPhase::Won => self.restart = true,
            RoundPhase::Idle => {
                // Random live peg each launch, so a miss is not repeated forever
                self.pointer = if snap.pegs.is_empty() {
                    Vec2::new(
                        self.rng.random_range(0.0..=SCREEN_WIDTH),
                        self.rng.random_range(SCREEN_HEIGHT / 2.0..=SCREEN_HEIGHT),
                    )
                } else {
                    let pick = self.rng.random_range(0..snap.pegs.len());
                    let jitter = Vec2::new(
                        self.rng.random_range(-AIM_JITTER..=AIM_JITTER),
                        self.rng.random_range(-AIM_JITTER..=AIM_JITTER),
                    );
                    snap.pegs[pick].pos + jitter
                };
                self.launch = true;
            }
            RoundPhase::InFlight | RoundPhase::Lost => {}
        }
    }
}

impl InputSource for AutoPlayer {
    fn is_pressed(&self, control: Control) -> bool {
        match control {
            Control::Launch => self.launch,
            Control::Restart => self.restart,
        }
    }

    fn pointer_pos(&self) -> Vec2 {
        self.pointer
    }
}
