//! Headless app construction for behavioural tests.
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nudge::MovementPlugin;

/// Frame length used by [`headless_app`] unless a test picks its own.
pub const FRAME: Duration = Duration::from_millis(20);

/// Builds an app with `MinimalPlugins`, `MovementPlugin` and a fixed frame
/// length of `frame`.
///
/// The first `update` always reports a zero delta; every later one
/// advances time by exactly `frame`.
///
/// # Examples
/// ```
/// use test_utils::app::{headless_app, FRAME};
/// let mut app = headless_app(FRAME);
/// app.update();
/// ```
pub fn headless_app(frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(MovementPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
    app
}

/// Holds `key` down until [`release`] is called.
pub fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

/// Lets go of `key`.
pub fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

/// Runs `frames` updates.
pub fn tick(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Current translation of `entity`.
///
/// # Panics
/// Panics if the entity has no `Transform`.
pub fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .map(|transform| transform.translation)
        .unwrap_or_else(|| panic!("{entity} should have a Transform"))
}
