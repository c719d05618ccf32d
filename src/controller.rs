//! Frame controller
//!
//! Polls input once per frame, advances the round by one tick, forwards sound
//! triggers and hands presentation a read-only [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, SoundEffect};
use crate::sim::{GameConfig, GameEvent, RoundPhase, RoundState, TickInput, tick};

/// Buttons the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Primary pointer button: launch toward the pointer
    Launch,
    /// "Y" key: play again after a win
    Restart,
}

/// Read-only view of the input devices for the current frame
pub trait InputSource {
    fn is_pressed(&self, control: Control) -> bool;
    /// Pointer position in screen coordinates
    fn pointer_pos(&self) -> Vec2;
}

/// Ball as presentation sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Live peg as presentation sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PegView {
    pub index: usize,
    pub pos: Vec2,
    pub radius: f32,
}

/// Centered end-of-round message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Everything presentation needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: RoundPhase,
    pub ball: BallView,
    pub pegs: Vec<PegView>,
    pub score: u32,
    pub win_score: u32,
    pub balls_remaining: u32,
    pub won: bool,
    pub lost: bool,
}

impl Snapshot {
    pub fn of(state: &RoundState) -> Self {
        Self {
            tick: state.time_ticks,
            phase: state.phase(),
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            pegs: state
                .live_pegs()
                .map(|(index, peg)| PegView {
                    index,
                    pos: peg.pos,
                    radius: peg.radius,
                })
                .collect(),
            score: state.score,
            win_score: state.config.win_score,
            balls_remaining: state.balls_remaining(),
            won: state.game_won,
            lost: state.game_over,
        }
    }

    /// Top-left HUD text, one entry per line
    pub fn hud_lines(&self) -> [String; 2] {
        [
            format!("Score: {}", self.score),
            format!("Balls Remaining: {}", self.balls_remaining),
        ]
    }

    /// Message to show over the board, if any
    pub fn banner(&self) -> Option<Banner> {
        if self.score >= self.win_score {
            Some(Banner {
                title: "You won!",
                subtitle: "Press 'Y' to play again, or press ESC to quit",
            })
        } else if self.balls_remaining == 0 && self.lost {
            Some(Banner {
                title: "You lose!",
                subtitle: "The game will reset now.",
            })
        } else {
            None
        }
    }
}

/// Map a round event to the sound it should make
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Launched { .. } => Some(SoundEffect::Launch),
        GameEvent::PegHit { .. } => Some(SoundEffect::PegHit),
        GameEvent::BallReturned => Some(SoundEffect::BallReturned),
        GameEvent::Won => Some(SoundEffect::Win),
        GameEvent::Lost => Some(SoundEffect::Lose),
        GameEvent::Reset => None,
    }
}

/// Owns the round and drives it one tick per frame
pub struct GameController<A: AudioSink> {
    state: RoundState,
    audio: A,
    rounds_won: u32,
    rounds_lost: u32,
}

impl<A: AudioSink> GameController<A> {
    pub fn new(config: GameConfig, seed: u64, audio: A) -> Self {
        log::info!("New round (seed {seed}, {} pegs)", config.peg_count);
        Self::with_state(RoundState::new(config, seed), audio)
    }

    pub fn with_state(state: RoundState, audio: A) -> Self {
        Self {
            state,
            audio,
            rounds_won: 0,
            rounds_lost: 0,
        }
    }

    /// Turn this frame's device state into tick commands
    pub fn poll_input(input: &impl InputSource) -> TickInput {
        TickInput {
            launch_target: input
                .is_pressed(Control::Launch)
                .then(|| input.pointer_pos()),
            restart: input.is_pressed(Control::Restart),
        }
    }

    /// Run one frame: poll input, tick, dispatch events
    pub fn frame(&mut self, input: &impl InputSource) -> Vec<GameEvent> {
        let tick_input = Self::poll_input(input);
        let events = tick(&mut self.state, &tick_input);

        for event in &events {
            match event {
                GameEvent::PegHit { index, pos } => {
                    log::info!("Peg hit! #{} at ({:.0}, {:.0})", index, pos.x, pos.y);
                }
                GameEvent::Won => self.rounds_won += 1,
                GameEvent::Lost => self.rounds_lost += 1,
                _ => {}
            }
            if let Some(effect) = sound_for(event) {
                self.audio.play(effect);
            }
        }

        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }
}
