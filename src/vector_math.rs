//! Basic vector math helper functions.
//!
//! Engine-style primitives behind the movement operations: normalisation,
//! magnitude clamping, move-towards and smooth-damp.
use glam::Vec3;

use crate::{MIN_SMOOTH_TIME, NORMALIZE_EPSILON};

/// Returns the unit vector in the direction of `vector`.
///
/// Non-finite vectors and vectors shorter than [`NORMALIZE_EPSILON`] yield
/// [`Vec3::ZERO`].
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use nudge::vec_normalize;
/// let unit = vec_normalize(Vec3::new(3.0, 0.0, 4.0));
/// assert!((unit - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
/// assert_eq!(vec_normalize(Vec3::ZERO), Vec3::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return Vec3::ZERO;
    }
    let length = vector.length();
    if length > NORMALIZE_EPSILON {
        vector / length
    } else {
        Vec3::ZERO
    }
}

/// Scales `vector` down so its length does not exceed `max_length`.
///
/// Vectors already within the limit are returned unchanged.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use nudge::vector_math::clamp_magnitude;
/// let clamped = clamp_magnitude(Vec3::new(1.0, 0.0, 1.0), 1.0);
/// assert!((clamped.length() - 1.0).abs() < 1e-6);
/// let short = Vec3::new(0.5, 0.0, 0.0);
/// assert_eq!(clamp_magnitude(short, 1.0), short);
/// ```
#[must_use]
pub fn clamp_magnitude(vector: Vec3, max_length: f32) -> Vec3 {
    let length_squared = vector.length_squared();
    if length_squared > max_length * max_length {
        vector / length_squared.sqrt() * max_length
    } else {
        vector
    }
}

/// Moves `current` in a straight line towards `target` by at most
/// `max_distance_delta`.
///
/// Returns `target` exactly once it is within reach so repeated calls settle
/// without jitter. A negative delta pushes `current` away from the target.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use nudge::move_towards;
/// let step = move_towards(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.5);
/// assert_eq!(step, Vec3::new(0.0, 0.0, 0.5));
/// let arrived = move_towards(step, Vec3::new(0.0, 0.0, 2.0), 10.0);
/// assert_eq!(arrived, Vec3::new(0.0, 0.0, 2.0));
/// ```
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_distance_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance_squared = to_target.length_squared();
    if distance_squared == 0.0
        || (max_distance_delta >= 0.0
            && distance_squared <= max_distance_delta * max_distance_delta)
    {
        return target;
    }
    current + to_target / distance_squared.sqrt() * max_distance_delta
}

/// Gradually moves `current` towards `target` like a critically damped
/// spring.
///
/// `velocity` carries the spring state between calls and must be kept by the
/// caller. `smooth_time` is roughly the time taken to reach the target and is
/// floored at [`MIN_SMOOTH_TIME`]. The change per call is limited to
/// `max_speed * smooth_time`; pass [`f32::INFINITY`] for no limit.
///
/// The result never overshoots: if a step would cross the target, the target
/// is returned and `velocity` is reset to zero.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use nudge::smooth_damp;
/// let target = Vec3::new(0.0, 0.0, 2.0);
/// let mut velocity = Vec3::ZERO;
/// let mut position = Vec3::ZERO;
/// for _ in 0..600 {
///     position = smooth_damp(position, target, &mut velocity, 0.5, f32::INFINITY, 1.0 / 60.0);
/// }
/// assert!((position - target).length() < 1e-3);
/// ```
#[must_use]
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    delta: f32,
) -> Vec3 {
    let smoothing = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smoothing;
    let x = omega * delta;
    // Polynomial approximation of exp(-x), accurate for the step sizes seen
    // in practice.
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = clamp_magnitude(current - target, max_speed * smoothing);
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * decay;
    let output = clamped_target + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::nan(Vec3::new(f32::NAN, 1.0, 0.0))]
    #[case::infinite(Vec3::new(f32::INFINITY, 0.0, 0.0))]
    #[case::tiny(Vec3::new(1e-7, 0.0, 0.0))]
    fn normalize_degenerate_inputs_to_zero(#[case] input: Vec3) {
        assert_eq!(vec_normalize(input), Vec3::ZERO);
    }

    #[test]
    fn move_towards_negative_delta_retreats() {
        let moved = move_towards(Vec3::ZERO, Vec3::X, -1.0);
        assert_relative_eq!(moved.x, -1.0);
    }

    #[test]
    fn move_towards_coincident_points_returns_target() {
        let point = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(move_towards(point, point, 0.0), point);
    }

    #[test]
    fn smooth_damp_never_overshoots() {
        let target = Vec3::new(0.0, 0.0, 2.0);
        let mut velocity = Vec3::ZERO;
        let mut position = Vec3::ZERO;
        for _ in 0..200 {
            position = smooth_damp(position, target, &mut velocity, 0.1, f32::INFINITY, 0.05);
            assert!(position.z <= target.z, "overshot to {position:?}");
        }
    }

    #[test]
    fn smooth_damp_respects_max_speed() {
        let mut velocity = Vec3::ZERO;
        let position = smooth_damp(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), &mut velocity, 0.5, 1.0, 0.1);
        // The effective target is at most max_speed * smooth_time away.
        assert!(position.x <= 0.5, "moved too far: {position:?}");
        assert!(position.x > 0.0);
    }

    #[test]
    fn smooth_damp_zero_delta_holds_position() {
        let mut velocity = Vec3::ZERO;
        let start = Vec3::new(1.0, 1.0, 1.0);
        let position = smooth_damp(start, Vec3::ZERO, &mut velocity, 0.5, f32::INFINITY, 0.0);
        assert_eq!(position, start);
        assert_eq!(velocity, Vec3::ZERO);
    }
}
