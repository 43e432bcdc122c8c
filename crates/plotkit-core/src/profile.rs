//! Movement profiles: planner mode, speed, and acceleration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Device-side motion planning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannerMode {
    /// Acceleration-aware trajectory planning.
    Accel,
    /// Constant-speed planning.
    Speed,
}

impl PlannerMode {
    /// Wire code understood by the device firmware.
    pub fn code(self) -> u8 {
        match self {
            PlannerMode::Accel => 0,
            PlannerMode::Speed => 1,
        }
    }
}

/// How one class of motion is executed: planner mode, speed, acceleration.
///
/// A cheap copyable value; many trajectories may reference the same
/// profile through `GeneratorSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMovementProfile")]
pub struct MovementProfile {
    mode: PlannerMode,
    speed: u8,
    accel: u32,
}

/// Wire form of [`MovementProfile`]; deserialization routes through
/// [`MovementProfile::new`] so the speed range holds for loaded values.
#[derive(Deserialize)]
struct RawMovementProfile {
    mode: PlannerMode,
    speed: u8,
    accel: u32,
}

impl TryFrom<RawMovementProfile> for MovementProfile {
    type Error = ValidationError;

    fn try_from(raw: RawMovementProfile) -> Result<Self, Self::Error> {
        Self::new(raw.mode, raw.speed, raw.accel)
    }
}

impl MovementProfile {
    /// Minimum device speed.
    pub const MIN_SPEED: u8 = 1;
    /// Maximum device speed.
    pub const MAX_SPEED: u8 = 16;

    /// Creates a profile, rejecting speeds outside `[MIN_SPEED, MAX_SPEED]`.
    pub fn new(mode: PlannerMode, speed: u8, accel: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&speed) {
            return Err(ValidationError::SpeedOutOfRange {
                speed,
                min: Self::MIN_SPEED,
                max: Self::MAX_SPEED,
            });
        }
        Ok(Self { mode, speed, accel })
    }

    /// The planner mode this profile runs under.
    pub fn mode(&self) -> PlannerMode {
        self.mode
    }

    /// Movement speed in device units.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Acceleration in device units.
    pub fn accel(&self) -> u32 {
        self.accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_mode_wire_codes() {
        assert_eq!(PlannerMode::Accel.code(), 0);
        assert_eq!(PlannerMode::Speed.code(), 1);
    }

    #[test]
    fn deserialization_enforces_speed_range() {
        let err = serde_json::from_str::<MovementProfile>(
            r#"{"mode":"Speed","speed":0,"accel":0}"#,
        );
        assert!(err.is_err());

        let profile: MovementProfile =
            serde_json::from_str(r#"{"mode":"Accel","speed":5,"accel":50}"#).unwrap();
        assert_eq!(
            profile,
            MovementProfile::new(PlannerMode::Accel, 5, 50).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_speed() {
        assert!(MovementProfile::new(PlannerMode::Speed, 0, 0).is_err());
        assert!(MovementProfile::new(PlannerMode::Speed, 17, 0).is_err());
        let profile = MovementProfile::new(PlannerMode::Accel, 16, 50).unwrap();
        assert_eq!(profile.speed(), 16);
        assert_eq!(profile.accel(), 50);
    }
}
