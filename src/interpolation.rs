//! Time-sliced linear interpolation driven one frame at a time.
//!
//! [`Interpolation`] is a resumable routine: each call to
//! [`Interpolation::resume`] performs one frame's worth of work and reports
//! whether the routine has suspended or completed. The systems module keeps
//! it on the moving entity as a component and resumes it once per `Update`.

use bevy::prelude::*;

/// Outcome of resuming an [`Interpolation`] for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoutineStep {
    /// The routine placed the object here and suspended until next frame.
    Pending(Vec3),
    /// The routine finished; the object belongs exactly here.
    Finished(Vec3),
}

impl RoutineStep {
    /// Position produced by this step.
    #[must_use]
    pub const fn position(self) -> Vec3 {
        match self {
            Self::Pending(position) | Self::Finished(position) => position,
        }
    }

    /// Whether the routine has completed.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Linear interpolation from `start` to `target` spread over `duration`
/// seconds of frames.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Interpolation {
    start: Vec3,
    target: Vec3,
    elapsed: f32,
    duration: f32,
}

impl Interpolation {
    /// Creates a routine that has not yet run.
    #[must_use]
    pub const fn new(start: Vec3, target: Vec3, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration,
        }
    }

    /// Position the routine started from.
    #[must_use]
    pub const fn start(&self) -> Vec3 {
        self.start
    }

    /// Position the routine ends on.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Seconds accumulated so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Runs the routine for one frame.
    ///
    /// While time remains, the position is sampled at `elapsed / duration`
    /// and only then is `delta` added, so the first frame always reports
    /// `start`. Once the budget is spent the exact target is returned.
    /// A non-positive duration finishes immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use nudge::interpolation::{Interpolation, RoutineStep};
    /// let mut routine = Interpolation::new(Vec3::ZERO, Vec3::X, 1.0);
    /// assert_eq!(routine.resume(0.5), RoutineStep::Pending(Vec3::ZERO));
    /// assert_eq!(routine.resume(0.5), RoutineStep::Pending(Vec3::new(0.5, 0.0, 0.0)));
    /// assert_eq!(routine.resume(0.5), RoutineStep::Finished(Vec3::X));
    /// ```
    pub fn resume(&mut self, delta: f32) -> RoutineStep {
        if self.elapsed < self.duration {
            let position = self.start.lerp(self.target, self.elapsed / self.duration);
            self.elapsed += delta;
            RoutineStep::Pending(position)
        } else {
            RoutineStep::Finished(self.target)
        }
    }
}

/// Raised when an [`Interpolation`] completes and its entity has been
/// snapped onto the target.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct InterpolationFinished {
    /// Entity that finished moving.
    pub entity: Entity,
    /// Where it ended up.
    pub position: Vec3,
}
