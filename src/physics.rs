//! Physics helper functions.
//!
//! Provides the force-to-acceleration conversion and the single fixed-step
//! integration used by [`crate::RigidBody`]. These functions operate on
//! plain values so they can be exercised without a running app.

use bevy::prelude::Transform;
use glam::Vec3;

use crate::components::RigidBody;
use crate::GRAVITY;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
const MIN_MASS: f32 = 1e-6;

/// Computes acceleration from a force vector and mass.
///
/// Returns `None` if `mass` is non-positive or effectively zero (see
/// [`MIN_MASS`]). The calculation applies `F=ma` for each component
/// independently.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use nudge::applied_acceleration;
/// let acc = applied_acceleration(Vec3::new(7.0, -14.0, 21.0), 7.0).unwrap();
/// assert!((acc - Vec3::new(1.0, -2.0, 3.0)).length() < 1e-6);
/// assert!(applied_acceleration(Vec3::Y, 0.0).is_none());
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec3, mass: f32) -> Option<Vec3> {
    (mass > MIN_MASS).then(|| force / mass)
}

/// Lift force for a given control sample: straight up, scaled by both the
/// sampled control and the configured strength.
#[must_use]
pub fn lift_force(force_control: f32, force_strength: f32) -> Vec3 {
    Vec3::Y * force_control * force_strength
}

/// Advances `body` and `transform` by one fixed step of `delta` seconds.
///
/// Gravity (when enabled) and the accumulated force update the velocity
/// first; the new velocity then moves the transform. The force accumulator
/// is cleared afterwards. A body with an invalid mass ignores forces but
/// still falls under gravity.
pub fn integrate_body(body: &mut RigidBody, transform: &mut Transform, delta: f32) {
    let mut acceleration = applied_acceleration(body.accumulated_force, body.mass)
        .unwrap_or(Vec3::ZERO);
    if body.use_gravity {
        acceleration += GRAVITY;
    }
    body.velocity += acceleration * delta;
    transform.translation += body.velocity * delta;
    body.accumulated_force = Vec3::ZERO;
}
