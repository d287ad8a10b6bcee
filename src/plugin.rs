//! Bevy plugin wiring the movement systems into the schedule.

use bevy::prelude::*;

use crate::components::{InputShaping, Mover, RigidBody};
use crate::input::{read_movement_input, MovementInput};
use crate::systems::{
    advance_interpolations, apply_lift_force, apply_movement_input, integrate_rigid_bodies,
    log_interpolation_finished, warn_missing_rigid_bodies,
};

/// Bevy plugin installing the input, movement and rigid-body systems.
///
/// Per frame, `Update` samples the keyboard, dispatches held actions, then
/// resumes in-flight interpolations so a running routine decides the frame's
/// final position. Each fixed step applies the
/// lift force and integrates rigid bodies. The plugin spawns nothing;
/// attach [`Mover`] (and optionally [`RigidBody`]) to the entities that
/// should move.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use nudge::{MovementPlugin, Mover};
///
/// let mut app = App::new();
/// app.add_plugins(MinimalPlugins).add_plugins(MovementPlugin);
/// app.world_mut().spawn(Mover::default());
/// app.update();
/// ```
#[derive(Debug, Default)]
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Mover>()
            .register_type::<RigidBody>()
            .register_type::<InputShaping>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<MovementInput>();
        app.add_observer(log_interpolation_finished);

        app.add_systems(PostStartup, warn_missing_rigid_bodies);
        app.add_systems(
            Update,
            (
                read_movement_input,
                apply_movement_input,
                advance_interpolations,
            )
                .chain(),
        );
        app.add_systems(
            FixedUpdate,
            (apply_lift_force, integrate_rigid_bodies).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(MovementPlugin);
        assert!(app.world().contains_resource::<MovementInput>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
        app.update();
    }

    #[rstest]
    fn held_shift_key_moves_every_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(MovementPlugin);
        let entity = app.world_mut().spawn(Mover::default()).id();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(crate::KEY_SHIFT);

        app.update();
        app.update();

        let transform = app
            .world()
            .get::<Transform>(entity)
            .expect("mover should require a Transform");
        assert_eq!(transform.translation, crate::SHIFT_OFFSET * 2.0);
    }
}
