//! Per-tick motion integration
//!
//! Gravity is a fixed per-tick acceleration and positions advance by a unit
//! explicit Euler step, so the simulation is frame-rate coupled.

use super::state::Body;

/// Add one tick of gravity to the vertical velocity
#[inline]
pub fn apply_gravity(body: Body, gravity: f32) -> Body {
    let mut body = body;
    body.vel.y += gravity;
    body
}

/// Advance position by one tick of velocity
#[inline]
pub fn integrate_position(body: Body) -> Body {
    Body {
        pos: body.pos + body.vel,
        ..body
    }
}
