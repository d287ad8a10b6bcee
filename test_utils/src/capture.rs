//! Helpers for observing finished interpolations in tests.
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use nudge::InterpolationFinished;

/// Interpolations that finished while the observer was installed.
#[derive(Resource, Default, Debug)]
pub struct FinishedMoves(pub Vec<(Entity, Vec3)>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_finished(event: On<InterpolationFinished>, mut finished: ResMut<FinishedMoves>) {
    let InterpolationFinished { entity, position } = event.event();
    finished.0.push((*entity, *position));
}

/// Installs the capturing observer and resource on the provided app.
pub fn install_finish_observer(app: &mut App) {
    app.insert_resource(FinishedMoves::default());
    app.world_mut().add_observer(record_finished);
}
