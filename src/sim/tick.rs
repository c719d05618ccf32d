//! Fixed per-frame simulation tick
//!
//! One call advances the round by exactly one step. Within a tick the order is
//! input, then gravity, move, peg collisions, wall bounce, floor return and the
//! win check.

use glam::Vec2;

use super::collision::{check_collision, collision_response, reached_floor, wall_bounce};
use super::integrate::{apply_gravity, integrate_position};
use super::state::{GameEvent, RoundState};
use super::vector::normalize;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Launch the resting ball toward this point
    pub launch_target: Option<Vec2>,
    /// Start a fresh round (only honoured after a win)
    pub restart: bool,
}

/// Try to launch the ball toward `target`
///
/// Ignored while the ball is in flight, during the loss countdown, once the
/// launch limit is spent, or when `target` sits on the ball centre.
pub fn launch(state: &mut RoundState, target: Vec2) -> Option<GameEvent> {
    if state.is_launched || state.game_over || state.balls_launched >= state.config.launch_limit {
        return None;
    }

    let direction = normalize(target - state.ball.pos);
    if direction == Vec2::ZERO {
        log::debug!("Launch ignored: target on ball centre");
        return None;
    }

    state.ball.vel = direction * state.config.launch_speed;
    state.is_launched = true;
    state.balls_launched += 1;
    log::debug!(
        "Ball {}/{} launched toward ({:.1}, {:.1})",
        state.balls_launched,
        state.config.launch_limit,
        target.x,
        target.y
    );
    Some(GameEvent::Launched { direction })
}

/// Rebuild the board if the round has been won
pub fn restart(state: &mut RoundState) -> Option<GameEvent> {
    if !state.game_won {
        return None;
    }
    log::info!("Restart after win (score {})", state.score);
    state.reset();
    Some(GameEvent::Reset)
}

/// Advance the round by one tick, returning what happened
pub fn tick(state: &mut RoundState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if let Some(target) = input.launch_target {
        events.extend(launch(state, target));
    }
    if input.restart {
        events.extend(restart(state));
    }

    // Loss countdown: the banner holds for the full duration, then the board resets
    if state.game_over {
        if state.end_message_timer >= state.config.end_message_duration {
            log::info!("Round lost, resetting board");
            state.reset();
            events.push(GameEvent::Reset);
        } else {
            state.end_message_timer += 1;
        }
        return events;
    }

    if !state.is_launched {
        return events;
    }

    let config = &state.config;
    let mut ball = apply_gravity(state.ball, config.gravity);
    ball = integrate_position(ball);

    // Every live peg is tested; several may score in the same tick
    for (index, peg) in state.pegs.iter_mut().enumerate() {
        if peg.is_hit || !check_collision(&ball, peg) {
            continue;
        }
        peg.is_hit = true;
        ball = collision_response(ball, peg);
        state.score += config.peg_score;
        log::debug!("Peg {} hit, score {}", index, state.score);
        events.push(GameEvent::PegHit {
            index,
            pos: peg.pos,
        });
    }

    ball = wall_bounce(ball, config.screen_width);
    state.ball = ball;

    if reached_floor(&state.ball, config.screen_height) {
        state.return_ball();
        events.push(GameEvent::BallReturned);

        if state.balls_launched >= state.config.launch_limit && !state.game_won {
            log::info!("Out of balls with score {}", state.score);
            state.game_over = true;
            events.push(GameEvent::Lost);
        }
    }

    if !state.game_won && state.score >= state.config.win_score {
        log::info!("Round won with score {}", state.score);
        state.game_won = true;
        events.push(GameEvent::Won);
    }

    events
}
