//! Keyboard sampling for the movement systems.
//!
//! The keyboard is read once per frame into [`MovementInput`], which the
//! dispatch system then consumes. Headless apps drive movement by pressing
//! keys on the `ButtonInput<KeyCode>` resource.

use bevy::prelude::*;

use crate::{
    KEY_IMMEDIATE, KEY_INTERPOLATE, KEY_LIFT, KEY_MOVE_TOWARDS, KEY_SHIFT, KEY_SMOOTH_DAMP,
    KEY_TRANSLATE, KEY_TRANSLATE_INPUT,
};

/// Every keyed movement the demonstrator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementAction {
    /// Snap to a fixed world position.
    Immediate,
    /// Shift by a fixed offset.
    Shift,
    /// Translate forward at constant speed.
    Translate,
    /// Translate along the movement axes.
    TranslateWithInput,
    /// Move towards the target at constant speed.
    MoveTowards,
    /// Smooth-damp towards the target.
    SmoothDamp,
    /// Start the timed interpolation routine.
    Interpolate,
    /// Sample the vertical axis as lift control.
    Lift,
}

impl MovementAction {
    /// All actions, in dispatch order.
    pub const ALL: [Self; 8] = [
        Self::Immediate,
        Self::Shift,
        Self::Translate,
        Self::TranslateWithInput,
        Self::MoveTowards,
        Self::SmoothDamp,
        Self::Interpolate,
        Self::Lift,
    ];

    /// Key that triggers this action while held.
    #[must_use]
    pub const fn key(self) -> KeyCode {
        match self {
            Self::Immediate => KEY_IMMEDIATE,
            Self::Shift => KEY_SHIFT,
            Self::Translate => KEY_TRANSLATE,
            Self::TranslateWithInput => KEY_TRANSLATE_INPUT,
            Self::MoveTowards => KEY_MOVE_TOWARDS,
            Self::SmoothDamp => KEY_SMOOTH_DAMP,
            Self::Interpolate => KEY_INTERPOLATE,
            Self::Lift => KEY_LIFT,
        }
    }
}

/// Digital movement axes, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAxes {
    /// Right is positive.
    pub horizontal: f32,
    /// Forward is positive.
    pub vertical: f32,
}

/// Movement input sampled for the current frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MovementInput {
    /// Actions whose key is held this frame, in [`MovementAction::ALL`] order.
    pub held: Vec<MovementAction>,
    /// Axis values for this frame.
    pub axes: InputAxes,
}

impl MovementInput {
    /// Whether `action` is held this frame.
    #[must_use]
    pub fn is_held(&self, action: MovementAction) -> bool {
        self.held.contains(&action)
    }
}

/// Maps a negative/positive key pair to an axis value.
const fn axis(neg: bool, pos: bool) -> f32 {
    match (neg, pos) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Reads the axes from the keyboard: A/D or the left/right arrows
/// horizontally, S/W or the down/up arrows vertically.
#[must_use]
pub fn read_axes(keyboard: &ButtonInput<KeyCode>) -> InputAxes {
    let pressed_any = |keys: [KeyCode; 2]| keyboard.any_pressed(keys);
    InputAxes {
        horizontal: axis(
            pressed_any([KeyCode::KeyA, KeyCode::ArrowLeft]),
            pressed_any([KeyCode::KeyD, KeyCode::ArrowRight]),
        ),
        vertical: axis(
            pressed_any([KeyCode::KeyS, KeyCode::ArrowDown]),
            pressed_any([KeyCode::KeyW, KeyCode::ArrowUp]),
        ),
    }
}

/// Rebuilds [`MovementInput`] from the keyboard state.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn read_movement_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.held.clear();
    input.held.extend(
        MovementAction::ALL
            .into_iter()
            .filter(|action| keyboard.pressed(action.key())),
    );
    input.axes = read_axes(&keyboard);
}
