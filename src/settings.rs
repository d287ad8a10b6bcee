//! Serialisable settings for the spawned mover.
//!
//! [`MoverSettings`] carries every tunable of [`Mover`] and [`RigidBody`].
//! Missing JSON fields fall back to the defaults in [`crate::constants`].

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{InputShaping, Mover, RigidBody};
use crate::{
    DEFAULT_FORCE_STRENGTH, DEFAULT_MASS, DEFAULT_MOVE_DURATION, DEFAULT_SMOOTH_TIME,
    DEFAULT_SPEED, DEFAULT_TARGET,
};

/// Errors raised while loading [`MoverSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings text was not valid JSON for [`MoverSettings`].
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field held a value the movement systems cannot use.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Input shaping as written in settings files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapingSetting {
    /// See [`InputShaping::Normalize`].
    #[default]
    Normalize,
    /// See [`InputShaping::ClampMagnitude`].
    ClampMagnitude,
}

impl From<ShapingSetting> for InputShaping {
    fn from(setting: ShapingSetting) -> Self {
        match setting {
            ShapingSetting::Normalize => Self::Normalize,
            ShapingSetting::ClampMagnitude => Self::ClampMagnitude,
        }
    }
}

/// Tunables for the spawned mover and its rigid body.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoverSettings {
    /// Starting position of the mover.
    pub spawn: [f32; 3],
    /// See [`Mover::move_duration`].
    pub move_duration: f32,
    /// See [`Mover::speed`].
    pub speed: f32,
    /// See [`Mover::smooth_time`].
    pub smooth_time: f32,
    /// See [`Mover::target`].
    pub target: [f32; 3],
    /// See [`Mover::force_strength`].
    pub force_strength: f32,
    /// See [`Mover::input_shaping`].
    pub input_shaping: ShapingSetting,
    /// See [`RigidBody::mass`].
    pub mass: f32,
    /// See [`RigidBody::use_gravity`]. Off unless requested, since nothing
    /// in the scene stops a falling body.
    pub use_gravity: bool,
}

impl Default for MoverSettings {
    fn default() -> Self {
        Self {
            spawn: [0.0; 3],
            move_duration: DEFAULT_MOVE_DURATION,
            speed: DEFAULT_SPEED,
            smooth_time: DEFAULT_SMOOTH_TIME,
            target: DEFAULT_TARGET.to_array(),
            force_strength: DEFAULT_FORCE_STRENGTH,
            input_shaping: ShapingSetting::default(),
            mass: DEFAULT_MASS,
            use_gravity: false,
        }
    }
}

impl MoverSettings {
    /// Parses and validates settings from JSON text.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] for malformed JSON and
    /// [`SettingsError::Invalid`] for values rejected by [`Self::validate`].
    ///
    /// # Examples
    /// ```
    /// use nudge::MoverSettings;
    /// let settings = MoverSettings::from_json_str(r#"{ "speed": 6.0 }"#).unwrap();
    /// assert_eq!(settings.speed, 6.0);
    /// assert_eq!(settings.move_duration, nudge::DEFAULT_MOVE_DURATION);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Read`] if the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| SettingsError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    /// Returns [`SettingsError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let vectors = [("spawn", self.spawn), ("target", self.target)];
        for (field, vector) in vectors {
            if !Vec3::from_array(vector).is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let non_negative = [
            ("move_duration", self.move_duration),
            ("speed", self.speed),
            ("smooth_time", self.smooth_time),
            ("force_strength", self.force_strength),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite and non-negative",
                });
            }
        }

        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "mass",
                reason: "must be finite and positive",
            });
        }
        Ok(())
    }

    /// Builds the [`Mover`] described by these settings.
    #[must_use]
    pub fn mover(&self) -> Mover {
        Mover {
            move_duration: self.move_duration,
            speed: self.speed,
            smooth_time: self.smooth_time,
            target: Vec3::from_array(self.target),
            force_strength: self.force_strength,
            input_shaping: self.input_shaping.into(),
            ..Mover::default()
        }
    }

    /// Builds the [`RigidBody`] described by these settings.
    #[must_use]
    pub fn rigid_body(&self) -> RigidBody {
        RigidBody::new(self.mass, self.use_gravity)
    }

    /// Transform at the configured spawn point.
    #[must_use]
    pub fn spawn_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.spawn))
    }
}
