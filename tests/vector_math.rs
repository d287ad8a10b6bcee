//! Integration tests for the vector helpers.
use glam::Vec3;
use nudge::{move_towards, smooth_damp, vec_normalize};

#[test]
fn normalize_returns_zero_for_nan() {
    assert_eq!(vec_normalize(Vec3::new(f32::NAN, 1.0, 0.0)), Vec3::ZERO);
}

#[test]
fn normalize_returns_normalized_vector() {
    assert_eq!(vec_normalize(Vec3::new(3.0, 0.0, 0.0)), Vec3::X);
}

#[test]
fn move_towards_never_overshoots() {
    let target = Vec3::new(1.0, 1.0, 1.0);
    let mut position = Vec3::ZERO;
    for _ in 0..10 {
        position = move_towards(position, target, 0.4);
        assert!((position - Vec3::ZERO).length() <= target.length() + 1e-6);
    }
    assert_eq!(position, target);
}

#[test]
fn smooth_damp_approaches_monotonically() {
    let target = Vec3::new(0.0, 0.0, 2.0);
    let mut velocity = Vec3::ZERO;
    let mut position = Vec3::ZERO;
    let mut remaining = target.z;
    for _ in 0..120 {
        position = smooth_damp(position, target, &mut velocity, 0.5, f32::INFINITY, 1.0 / 60.0);
        let distance = (target - position).length();
        assert!(distance <= remaining + 1e-6, "distance grew to {distance}");
        remaining = distance;
    }
}
