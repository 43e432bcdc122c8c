//! Trajectories: a contour bound to a tool and a drawing profile.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::path::PathData;
use crate::profile::MovementProfile;
use crate::settings::GeneratorSettings;

/// Largest tool id the device's tool table accepts.
pub const MAX_TOOL_ID: u8 = 3;

/// One continuous drawing path with its tool and profile selection.
///
/// Immutable once constructed; the generator never mutates a trajectory.
/// The `name` is diagnostic only and never reaches the emitted program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrajectory")]
pub struct Trajectory {
    name: String,
    path: PathData,
    tool_id: u8,
    profile_index: usize,
    movement_speed_override: Option<u8>,
}

/// Wire form of [`Trajectory`]; deserialization routes through
/// [`Trajectory::new`] (and the speed-override check) so loaded
/// trajectories satisfy the same invariants as constructed ones.
#[derive(Deserialize)]
struct RawTrajectory {
    name: String,
    path: PathData,
    tool_id: u8,
    profile_index: usize,
    movement_speed_override: Option<u8>,
}

impl TryFrom<RawTrajectory> for Trajectory {
    type Error = ValidationError;

    fn try_from(raw: RawTrajectory) -> Result<Self, Self::Error> {
        let trajectory = Trajectory::new(raw.name, raw.path, raw.tool_id, raw.profile_index)?;
        match raw.movement_speed_override {
            Some(speed) => trajectory.with_speed_override(speed),
            None => Ok(trajectory),
        }
    }
}

impl Trajectory {
    /// Creates a trajectory, rejecting tool ids outside `[0, MAX_TOOL_ID]`.
    ///
    /// `profile_index` is checked against the run's settings by
    /// [`Trajectory::validate_against`] before generation starts, since
    /// the valid range depends on how many drawing profiles are
    /// configured.
    pub fn new(
        name: impl Into<String>,
        path: PathData,
        tool_id: u8,
        profile_index: usize,
    ) -> Result<Self, ValidationError> {
        if tool_id > MAX_TOOL_ID {
            return Err(ValidationError::ToolIdOutOfRange {
                tool_id,
                max: MAX_TOOL_ID,
            });
        }
        Ok(Self {
            name: name.into(),
            path,
            tool_id,
            profile_index,
            movement_speed_override: None,
        })
    }

    /// Replaces the drawing profile's speed for this trajectory only.
    pub fn with_speed_override(mut self, speed: u8) -> Result<Self, ValidationError> {
        if !(MovementProfile::MIN_SPEED..=MovementProfile::MAX_SPEED).contains(&speed) {
            return Err(ValidationError::SpeedOutOfRange {
                speed,
                min: MovementProfile::MIN_SPEED,
                max: MovementProfile::MAX_SPEED,
            });
        }
        self.movement_speed_override = Some(speed);
        Ok(self)
    }

    /// Checks settings-dependent invariants before a run starts.
    pub fn validate_against(&self, settings: &GeneratorSettings) -> Result<(), ValidationError> {
        settings.drawing_profile(self.profile_index)?;
        Ok(())
    }

    /// Diagnostic label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contour to draw.
    pub fn path(&self) -> &PathData {
        &self.path
    }

    /// Tool selected while drawing this contour.
    pub fn tool_id(&self) -> u8 {
        self.tool_id
    }

    /// Index into the settings' drawing profile list.
    pub fn profile_index(&self) -> usize {
        self.profile_index
    }

    /// Per-trajectory speed override, if any.
    pub fn movement_speed_override(&self) -> Option<u8> {
        self.movement_speed_override
    }
}
