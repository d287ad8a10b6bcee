//! Behavioural tests for the lift force using rust-rspec.
//!
//! The lift control is sampled from the vertical axis only while the lift
//! key is held, but the force it produces is applied on every fixed step.

#[path = "support/thread_safe_app.rs"]
mod thread_safe_app;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use bevy::prelude::*;
use nudge::{Mover, RigidBody, DEFAULT_MASS, KEY_LIFT};
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use test_utils::app::{headless_app, press, release, tick, translation, FRAME};
use thread_safe_app::{lock_app, share, SharedApp};

#[derive(Debug, Clone)]
struct LiftFixture {
    app: SharedApp,
    mover: Entity,
}

impl LiftFixture {
    fn bootstrap(use_gravity: bool) -> Self {
        let mut app = headless_app(FRAME);
        let mover = app
            .world_mut()
            .spawn((Mover::default(), RigidBody::new(DEFAULT_MASS, use_gravity)))
            .id();
        app.update();
        Self {
            app: share(app),
            mover,
        }
    }

    fn hold(&self, keys: &[KeyCode], frames: usize) {
        let mut app = lock_app(&self.app);
        for key in keys {
            press(&mut app, *key);
        }
        tick(&mut app, frames);
        for key in keys {
            release(&mut app, *key);
        }
    }

    fn tick(&self, frames: usize) {
        tick(&mut lock_app(&self.app), frames);
    }

    fn height(&self) -> f32 {
        translation(&lock_app(&self.app), self.mover).y
    }

    fn force_control(&self) -> f32 {
        lock_app(&self.app)
            .world()
            .get::<Mover>(self.mover)
            .map_or(f32::NAN, |mover| mover.force_control)
    }

    fn vertical_velocity(&self) -> f32 {
        lock_app(&self.app)
            .world()
            .get::<RigidBody>(self.mover)
            .map_or(f32::NAN, |body| body.velocity.y)
    }
}

#[test]
fn held_lift_raises_the_body() {
    run_serial(&rspec::given(
        "a weightless mover with a rigid body",
        LiftFixture::bootstrap(false),
        |scenario: &mut Scenario<LiftFixture>| {
            scenario.when("space and forward are held together", |ctx| {
                ctx.before_all(|state| state.hold(&[KeyCode::Space, KeyCode::KeyW], 5));

                ctx.then("the lift control follows the vertical axis", |state| {
                    assert!((state.force_control() - 1.0).abs() < f32::EPSILON);
                });

                ctx.then("the body rises", |state| {
                    assert!(state.height() > 0.0, "height {}", state.height());
                    assert!(state.vertical_velocity() > 0.0);
                });
            });

            scenario.when("both keys are released and time passes", |ctx| {
                ctx.before_all(|state| state.tick(10));

                ctx.then("the control keeps its last sample", |state| {
                    assert!((state.force_control() - 1.0).abs() < f32::EPSILON);
                });

                ctx.then("the body keeps accelerating upward", |state| {
                    assert!(state.vertical_velocity() > 0.0);
                });
            });
        },
    ));
}

#[test]
fn forward_alone_does_not_sample_lift() {
    let fixture = LiftFixture::bootstrap(false);
    fixture.hold(&[KeyCode::KeyW], 5);
    assert!(fixture.force_control().abs() < f32::EPSILON);
    assert!(fixture.height().abs() < f32::EPSILON);
}

#[test]
fn without_lift_gravity_wins() {
    let fixture = LiftFixture::bootstrap(true);
    fixture.tick(10);
    assert!(fixture.height() < 0.0);
}

#[test]
fn lift_key_with_backward_axis_pushes_down() {
    let fixture = LiftFixture::bootstrap(false);
    fixture.hold(&[KEY_LIFT, KeyCode::KeyS], 5);
    assert!((fixture.force_control() + 1.0).abs() < f32::EPSILON);
    assert!(fixture.height() < 0.0);
}
