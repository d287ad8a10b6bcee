//! The direct movement operations.
//!
//! Each function applies one way of moving an object to its [`Transform`].
//! Frame-scaled operations take the frame delta explicitly so they can be
//! called from systems and tests alike.

use bevy::prelude::*;

use crate::components::InputShaping;
use crate::input::InputAxes;
use crate::vector_math::{clamp_magnitude, move_towards, smooth_damp, vec_normalize};
use crate::{IMMEDIATE_POSITION, SHIFT_OFFSET};

/// Places the object at [`IMMEDIATE_POSITION`] in world space.
pub fn immediate_movement(transform: &mut Transform) {
    transform.translation = IMMEDIATE_POSITION;
}

/// Shifts the object by [`SHIFT_OFFSET`] relative to where it is.
pub fn shift_movement(transform: &mut Transform) {
    transform.translation += SHIFT_OFFSET;
}

/// Translates by `offset` expressed in the object's local frame.
fn translate_local(transform: &mut Transform, offset: Vec3) {
    transform.translation += transform.rotation * offset;
}

/// Translates the object along its own forward axis by `speed * delta`.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use nudge::movement::translate_forward;
/// let mut transform = Transform::default();
/// translate_forward(&mut transform, 3.0, 0.5);
/// assert_eq!(transform.translation, Vec3::new(0.0, 0.0, -1.5));
/// ```
pub fn translate_forward(transform: &mut Transform, speed: f32, delta: f32) {
    translate_local(transform, Vec3::NEG_Z * speed * delta);
}

/// Direction of travel for the given axes, shaped so diagonals are no faster
/// than a single axis.
///
/// Horizontal input maps to local X and vertical input to local forward.
#[must_use]
pub fn input_direction(axes: InputAxes, shaping: InputShaping) -> Vec3 {
    let raw = Vec3::new(axes.horizontal, 0.0, -axes.vertical);
    match shaping {
        InputShaping::Normalize => vec_normalize(raw),
        InputShaping::ClampMagnitude => clamp_magnitude(raw, 1.0),
    }
}

/// Translates the object along the input direction by `speed * delta`.
pub fn translate_with_input(
    transform: &mut Transform,
    axes: InputAxes,
    shaping: InputShaping,
    speed: f32,
    delta: f32,
) {
    translate_local(transform, input_direction(axes, shaping) * speed * delta);
}

/// Moves the object towards `target` by at most `speed * delta`.
pub fn move_towards_target(transform: &mut Transform, target: Vec3, speed: f32, delta: f32) {
    transform.translation = move_towards(transform.translation, target, speed * delta);
}

/// Smooth-damps the object towards `target`, updating `velocity` in place.
pub fn smooth_damp_to_target(
    transform: &mut Transform,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    delta: f32,
) {
    transform.translation = smooth_damp(
        transform.translation,
        target,
        velocity,
        smooth_time,
        f32::INFINITY,
        delta,
    );
}
