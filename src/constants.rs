//! Movement defaults, fixed offsets and key bindings used across systems.
//!
//! The defaults mirror the values a freshly spawned [`crate::Mover`] carries
//! before any settings file is applied.
use bevy::input::keyboard::KeyCode;
use glam::Vec3;

/// Seconds the interpolation routine takes to reach its target.
pub const DEFAULT_MOVE_DURATION: f32 = 5.0;
/// Movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 3.0;
/// Approximate time smooth-damp takes to reach the target.
pub const DEFAULT_SMOOTH_TIME: f32 = 0.5;
/// Point the targeted movements head for.
pub const DEFAULT_TARGET: Vec3 = Vec3::new(0.0, 0.0, 2.0);
/// Scale applied to the sampled lift control.
pub const DEFAULT_FORCE_STRENGTH: f32 = 20.0;
/// Rigid-body mass when none is configured.
pub const DEFAULT_MASS: f32 = 1.0;
/// Downward acceleration applied to bodies with gravity enabled.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Where the immediate movement places the object, in world space.
pub const IMMEDIATE_POSITION: Vec3 = Vec3::new(1.0, 2.0, 3.0);
/// Offset added by each shift movement.
pub const SHIFT_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Smallest smoothing time accepted by smooth-damp.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;
/// Vectors shorter than this normalise to zero.
pub const NORMALIZE_EPSILON: f32 = 1e-5;

/// Held to snap to [`IMMEDIATE_POSITION`].
pub const KEY_IMMEDIATE: KeyCode = KeyCode::Digit1;
/// Held to shift by [`SHIFT_OFFSET`] every frame.
pub const KEY_SHIFT: KeyCode = KeyCode::Digit2;
/// Held to translate forward.
pub const KEY_TRANSLATE: KeyCode = KeyCode::Digit3;
/// Held to translate along the movement axes.
pub const KEY_TRANSLATE_INPUT: KeyCode = KeyCode::Digit4;
/// Held to move towards the target at constant speed.
pub const KEY_MOVE_TOWARDS: KeyCode = KeyCode::Digit5;
/// Held to smooth-damp towards the target.
pub const KEY_SMOOTH_DAMP: KeyCode = KeyCode::Digit6;
/// Starts the timed interpolation routine.
pub const KEY_INTERPOLATE: KeyCode = KeyCode::NumpadEnter;
/// Held to sample the vertical axis as lift control.
pub const KEY_LIFT: KeyCode = KeyCode::Space;
