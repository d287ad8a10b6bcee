//! Systems applying the movement operations to every [`Mover`].

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, info, warn};

use crate::components::{Mover, RigidBody};
use crate::input::{InputAxes, MovementAction, MovementInput};
use crate::interpolation::{Interpolation, InterpolationFinished, RoutineStep};
use crate::movement::{
    immediate_movement, move_towards_target, shift_movement, smooth_damp_to_target,
    translate_forward, translate_with_input,
};
use crate::physics::{integrate_body, lift_force};

/// Applies one held action other than [`MovementAction::Interpolate`].
fn apply_action(
    action: MovementAction,
    transform: &mut Transform,
    mover: &mut Mover,
    axes: InputAxes,
    delta: f32,
) {
    match action {
        MovementAction::Immediate => immediate_movement(transform),
        MovementAction::Shift => shift_movement(transform),
        MovementAction::Translate => translate_forward(transform, mover.speed, delta),
        MovementAction::TranslateWithInput => {
            translate_with_input(transform, axes, mover.input_shaping, mover.speed, delta);
        }
        MovementAction::MoveTowards => {
            move_towards_target(transform, mover.target, mover.speed, delta);
        }
        MovementAction::SmoothDamp => smooth_damp_to_target(
            transform,
            mover.target,
            &mut mover.current_velocity,
            mover.smooth_time,
            delta,
        ),
        MovementAction::Lift => mover.force_control = axes.vertical,
        MovementAction::Interpolate => {}
    }
}

/// Dispatches every held action onto every [`Mover`].
///
/// The interpolation action starts a routine and runs its first step in the
/// same frame. While a routine is in flight on a mover, further requests for
/// that mover are ignored.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn apply_movement_input(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    mut movers: Query<(Entity, &mut Transform, &mut Mover, Has<Interpolation>)>,
) {
    if input.held.is_empty() {
        return;
    }
    let delta = time.delta_secs();

    for (entity, mut transform, mut mover, interpolating) in &mut movers {
        for &action in &input.held {
            if action == MovementAction::Interpolate {
                if !interpolating {
                    start_interpolation(&mut commands, entity, &mut transform, &mover, delta);
                }
                continue;
            }
            apply_action(action, &mut transform, &mut mover, input.axes, delta);
            debug!("{action:?} left {entity} at {}", transform.translation);
        }
    }
}

fn start_interpolation(
    commands: &mut Commands,
    entity: Entity,
    transform: &mut Transform,
    mover: &Mover,
    delta: f32,
) {
    let mut routine = Interpolation::new(transform.translation, mover.target, mover.move_duration);
    info!(
        "interpolating {entity} from {} to {} over {}s",
        routine.start(),
        routine.target(),
        mover.move_duration
    );
    match routine.resume(delta) {
        RoutineStep::Pending(position) => {
            transform.translation = position;
            commands.entity(entity).insert(routine);
        }
        RoutineStep::Finished(position) => {
            transform.translation = position;
            commands.trigger(InterpolationFinished { entity, position });
        }
    }
}

/// Resumes every in-flight [`Interpolation`] for one frame.
///
/// Routines started this frame already took their first step in
/// [`apply_movement_input`] and are left alone. Finished routines snap their entity onto the target, are removed, and
/// raise [`InterpolationFinished`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_interpolations(
    mut commands: Commands,
    time: Res<Time>,
    mut routines: Query<(Entity, &mut Transform, &mut Interpolation)>,
) {
    let delta = time.delta_secs();
    for (entity, mut transform, mut routine) in &mut routines {
        if routine.is_added() {
            continue;
        }
        let step = routine.resume(delta);
        transform.translation = step.position();
        if step.is_finished() {
            commands.entity(entity).remove::<Interpolation>();
            commands.trigger(InterpolationFinished {
                entity,
                position: step.position(),
            });
        }
    }
}

/// Pushes each mover's rigid body upward by its sampled lift control.
///
/// Runs every fixed step whether or not the lift key is held; the control
/// keeps its last sampled value.
pub fn apply_lift_force(mut bodies: Query<(&Mover, &mut RigidBody)>) {
    for (mover, mut body) in &mut bodies {
        body.add_force(lift_force(mover.force_control, mover.force_strength));
    }
}

/// Advances every rigid body by one fixed step.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn integrate_rigid_bodies(
    time: Res<Time>,
    mut bodies: Query<(&mut RigidBody, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (mut body, mut transform) in &mut bodies {
        integrate_body(&mut body, &mut transform, delta);
    }
}

/// Logs every mover that lacks a [`RigidBody`]; the lift force has nothing
/// to push on such movers.
pub fn warn_missing_rigid_bodies(movers: Query<Entity, (With<Mover>, Without<RigidBody>)>) {
    for entity in &movers {
        warn!("mover {entity} has no RigidBody; lift force will have no effect");
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn log_interpolation_finished(event: On<InterpolationFinished>) {
    let InterpolationFinished { entity, position } = event.event();
    info!("interpolation of {entity} finished at {position}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IMMEDIATE_POSITION, SHIFT_OFFSET};

    #[test]
    fn lift_samples_vertical_axis_only() {
        let mut transform = Transform::default();
        let mut mover = Mover::default();
        let axes = InputAxes {
            horizontal: 1.0,
            vertical: -1.0,
        };
        apply_action(MovementAction::Lift, &mut transform, &mut mover, axes, 0.1);
        assert!((mover.force_control + 1.0).abs() < f32::EPSILON);
        assert_eq!(transform.translation, Vec3::ZERO);
    }

    #[test]
    fn actions_compose_in_dispatch_order() {
        let mut transform = Transform::default();
        let mut mover = Mover::default();
        let axes = InputAxes::default();
        apply_action(MovementAction::Immediate, &mut transform, &mut mover, axes, 0.1);
        apply_action(MovementAction::Shift, &mut transform, &mut mover, axes, 0.1);
        assert_eq!(transform.translation, IMMEDIATE_POSITION + SHIFT_OFFSET);
    }

    #[test]
    fn missing_body_is_reported_without_panicking() {
        let mut world = World::new();
        world.spawn(Mover::default());
        let system = world.register_system(warn_missing_rigid_bodies);
        assert!(world.run_system(system).is_ok());
    }
}
