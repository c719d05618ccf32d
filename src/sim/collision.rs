//! Collision detection and response
//!
//! Pegs are immovable circles: a hit only mirrors the ball's velocity about
//! the contact normal. Screen edges mirror a single velocity component.

use glam::Vec2;

use super::state::{Body, Peg};
use super::vector::{distance, normalize, reflect};

/// Whether the ball overlaps or touches a peg
#[inline]
pub fn check_collision(ball: &Body, peg: &Peg) -> bool {
    distance(ball.pos, peg.pos) <= ball.radius + peg.radius
}

/// Unit normal from the peg centre toward the ball centre
///
/// Zero when the centres coincide.
#[inline]
pub fn contact_normal(ball: &Body, peg: &Peg) -> Vec2 {
    normalize(ball.pos - peg.pos)
}

/// Bounce the ball off a peg
///
/// Specular reflection `v' = v - 2(v·n)n` against an infinitely heavy peg.
/// Coincident centres give no normal and the velocity is kept as is.
/// The peg itself is never modified; marking it hit is the caller's job.
pub fn collision_response(ball: Body, peg: &Peg) -> Body {
    let normal = contact_normal(&ball, peg);
    Body {
        vel: reflect(ball.vel, normal),
        ..ball
    }
}

/// Bounce off the left, right and top screen edges
///
/// The floor is open: falling through it is the round's business, not a bounce.
pub fn wall_bounce(ball: Body, screen_width: f32) -> Body {
    let mut ball = ball;
    if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > screen_width {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
    }
    ball
}

/// Whether the ball has dropped past the bottom of the screen
#[inline]
pub fn reached_floor(ball: &Body, screen_height: f32) -> bool {
    ball.pos.y + ball.radius > screen_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball(pos: Vec2, vel: Vec2) -> Body {
        Body {
            pos,
            vel,
            radius: 10.0,
        }
    }

    #[test]
    fn test_check_collision() {
        let peg = Peg::new(Vec2::new(100.0, 100.0), 10.0);

        assert!(!check_collision(&ball(Vec2::new(130.0, 100.0), Vec2::ZERO), &peg));
        // Exactly touching counts
        assert!(check_collision(&ball(Vec2::new(120.0, 100.0), Vec2::ZERO), &peg));
        assert!(check_collision(&ball(Vec2::new(105.0, 95.0), Vec2::ZERO), &peg));
    }

    #[test]
    fn test_head_on_hit_reverses_velocity() {
        // Ball falling straight onto the top of a peg
        let peg = Peg::new(Vec2::new(200.0, 300.0), 10.0);
        let b = collision_response(ball(Vec2::new(200.0, 281.0), Vec2::new(0.0, 12.0)), &peg);
        assert!((b.vel - Vec2::new(0.0, -12.0)).length() < 1e-5);
        assert_eq!(b.pos, Vec2::new(200.0, 281.0));
    }

    #[test]
    fn test_glancing_hit_keeps_tangential_component() {
        // Normal points along +x; only vx flips
        let peg = Peg::new(Vec2::new(0.0, 0.0), 10.0);
        let b = collision_response(ball(Vec2::new(15.0, 0.0), Vec2::new(-4.0, 9.0)), &peg);
        assert!((b.vel - Vec2::new(4.0, 9.0)).length() < 1e-5);
    }

    #[test]
    fn test_coincident_centres_are_noop() {
        let peg = Peg::new(Vec2::new(50.0, 50.0), 10.0);
        let before = ball(Vec2::new(50.0, 50.0), Vec2::new(3.0, -2.0));
        assert_eq!(contact_normal(&before, &peg), Vec2::ZERO);
        let after = collision_response(before, &peg);
        assert_eq!(after.vel, before.vel);
        assert!(after.vel.is_finite());
    }

    #[test]
    fn test_wall_bounce_left_right_top() {
        let left = wall_bounce(ball(Vec2::new(-1.0, 300.0), Vec2::new(-3.0, 2.0)), 800.0);
        assert_eq!(left.vel, Vec2::new(3.0, 2.0));

        let right = wall_bounce(ball(Vec2::new(795.0, 300.0), Vec2::new(6.0, 2.0)), 800.0);
        assert_eq!(right.vel, Vec2::new(-6.0, 2.0));

        let top = wall_bounce(ball(Vec2::new(400.0, 5.0), Vec2::new(1.0, -8.0)), 800.0);
        assert_eq!(top.vel, Vec2::new(1.0, 8.0));

        let corner = wall_bounce(ball(Vec2::new(3.0, 3.0), Vec2::new(-1.0, -1.0)), 800.0);
        assert_eq!(corner.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_no_floor_bounce() {
        let b = wall_bounce(ball(Vec2::new(400.0, 598.0), Vec2::new(0.0, 7.0)), 800.0);
        assert_eq!(b.vel, Vec2::new(0.0, 7.0));
        assert!(reached_floor(&b, 600.0));
        assert!(!reached_floor(&ball(Vec2::new(400.0, 590.0), Vec2::ZERO), 600.0));
    }

    proptest! {
        #[test]
        fn response_preserves_speed(
            dx in -20.0f32..20.0,
            dy in -20.0f32..20.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
        ) {
            prop_assume!(dx.abs() > 0.01 || dy.abs() > 0.01);
            let peg = Peg::new(Vec2::new(300.0, 400.0), 10.0);
            let before = ball(peg.pos + Vec2::new(dx, dy), Vec2::new(vx, vy));
            let after = collision_response(before, &peg);
            prop_assert!((after.vel.length() - before.vel.length()).abs() < 1e-3);
        }

        #[test]
        fn response_flips_normal_component(
            dx in -20.0f32..20.0,
            dy in -20.0f32..20.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
        ) {
            prop_assume!(dx.abs() > 0.01 || dy.abs() > 0.01);
            let peg = Peg::new(Vec2::new(300.0, 400.0), 10.0);
            let before = ball(peg.pos + Vec2::new(dx, dy), Vec2::new(vx, vy));
            let n = contact_normal(&before, &peg);
            let after = collision_response(before, &peg);
            prop_assert!((after.vel.dot(n) + before.vel.dot(n)).abs() < 1e-3);
        }
    }
}
