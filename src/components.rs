//! ECS component types used by the movement systems.
//! Includes the per-object movement configuration and the rigid body the
//! lift force pushes on.
use bevy::prelude::*;

use crate::{
    DEFAULT_FORCE_STRENGTH, DEFAULT_MASS, DEFAULT_MOVE_DURATION, DEFAULT_SMOOTH_TIME,
    DEFAULT_SPEED, DEFAULT_TARGET,
};

/// How input-driven translation keeps diagonal movement from being faster
/// than movement along a single axis.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputShaping {
    /// Scale every non-zero direction to unit length.
    #[default]
    Normalize,
    /// Only shorten directions longer than one unit.
    ClampMagnitude,
}

/// Per-object movement configuration and state.
///
/// Every movement operation reads its tunables from here. `current_velocity`
/// belongs to smooth-damp and `force_control` to the lift force; nothing
/// else writes them.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform)]
pub struct Mover {
    /// Seconds the interpolation routine takes to reach `target`.
    pub move_duration: f32,
    /// Speed in world units per second.
    pub speed: f32,
    /// Smoothing time used by smooth-damp.
    pub smooth_time: f32,
    /// Point the targeted movements head for.
    pub target: Vec3,
    /// Spring velocity carried between smooth-damp calls.
    pub current_velocity: Vec3,
    /// Scale applied to `force_control` when pushing the rigid body.
    pub force_strength: f32,
    /// Last vertical axis value sampled while the lift key was held.
    pub force_control: f32,
    /// Diagonal handling for input-driven translation.
    pub input_shaping: InputShaping,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            move_duration: DEFAULT_MOVE_DURATION,
            speed: DEFAULT_SPEED,
            smooth_time: DEFAULT_SMOOTH_TIME,
            target: DEFAULT_TARGET,
            current_velocity: Vec3::ZERO,
            force_strength: DEFAULT_FORCE_STRENGTH,
            force_control: 0.0,
            input_shaping: InputShaping::default(),
        }
    }
}

/// Minimal rigid body integrated once per fixed step.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform)]
pub struct RigidBody {
    /// Body mass; forces are divided by it.
    pub mass: f32,
    /// Linear velocity in world units per second.
    pub velocity: Vec3,
    /// Whether [`crate::GRAVITY`] pulls on the body.
    pub use_gravity: bool,
    pub(crate) accumulated_force: Vec3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(DEFAULT_MASS, true)
    }
}

impl RigidBody {
    /// Creates a body at rest with the given mass and gravity setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use nudge::RigidBody;
    /// let body = RigidBody::new(5.0, false);
    /// assert_eq!(body.mass, 5.0);
    /// assert!(!body.use_gravity);
    /// ```
    #[must_use]
    pub const fn new(mass: f32, use_gravity: bool) -> Self {
        Self {
            mass,
            velocity: Vec3::ZERO,
            use_gravity,
            accumulated_force: Vec3::ZERO,
        }
    }

    /// Queues `force` for the next fixed step.
    ///
    /// Forces accumulate until [`crate::physics::integrate_body`] consumes
    /// them.
    pub fn add_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    /// Net force queued for the next fixed step.
    #[must_use]
    pub const fn accumulated_force(&self) -> Vec3 {
        self.accumulated_force
    }
}
