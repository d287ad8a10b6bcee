#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate showcasing the basic ways to move a single object in Bevy.
//! Re-exports the movement components, operations and plugin for the main
//! application and tests.
pub mod components;
pub mod constants;
pub mod input;
pub mod interpolation;
pub mod logging;
pub mod movement;
pub mod physics;
pub mod plugin;
pub mod settings;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod spawn_world;
pub mod systems;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use components::{InputShaping, Mover, RigidBody};
pub use input::{InputAxes, MovementAction, MovementInput};
pub use interpolation::{Interpolation, InterpolationFinished, RoutineStep};
pub use logging::init as init_logging;
pub use physics::{applied_acceleration, integrate_body, lift_force};
pub use plugin::MovementPlugin;
pub use settings::{MoverSettings, SettingsError};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use spawn_world::spawn_world_system;
pub use vector_math::{clamp_magnitude, move_towards, smooth_damp, vec_normalize};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use nudge::prelude::*;
    //! ```

    pub use crate::movement::{
        immediate_movement, move_towards_target, shift_movement, smooth_damp_to_target,
        translate_forward, translate_with_input,
    };
    pub use crate::InputShaping;
    pub use crate::MovementPlugin;
    pub use crate::Mover;
    pub use crate::MoverSettings;
    pub use crate::RigidBody;
}
