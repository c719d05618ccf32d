//! 2D vector helpers
//!
//! Thin wrappers over `glam::Vec2` that pin down the degenerate cases:
//! nothing here ever returns NaN for finite input.

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector in the direction of `v`, or `Vec2::ZERO` if `v` has no direction
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Reflect velocity off a surface with unit normal `n`
///
/// `v' = v - 2(v·n)n`. A zero normal leaves `v` untouched.
#[inline]
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - 2.0 * v.dot(n) * n
}
