//! Utility helpers for tests.
//!
//! Builds headless apps around `MovementPlugin`, drives their keyboard and
//! captures the events they raise.
pub mod app;
pub mod capture;

/// Assert that two vectors are within `epsilon` of each other.
///
/// # Panics
/// Panics with both vectors in the message if they differ by more than
/// `epsilon` on any axis.
pub fn assert_vec3_near(actual: bevy::math::Vec3, expected: bevy::math::Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "expected {expected:?} within {epsilon}, got {actual:?}"
    );
}
