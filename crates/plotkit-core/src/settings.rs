//! Per-run code generation settings.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::profile::MovementProfile;
use crate::trajectory::MAX_TOOL_ID;

/// Configuration for one generation run.
///
/// Built once by the caller before a run and read-only for the run's
/// duration. All ranges are checked at construction; out-of-range values
/// are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneratorSettings")]
pub struct GeneratorSettings {
    free_move_profile: MovementProfile,
    drawing_profiles: Vec<MovementProfile>,
    disconnect_distance_mm: u32,
    tool_change_duration_ms: u32,
    settle_delay_ms: u32,
    neutral_tool_id: u8,
}

/// Wire form of [`GeneratorSettings`]; deserialization routes through
/// [`GeneratorSettings::with_settle_delay`] so loaded settings pass the
/// same range checks as constructed ones.
#[derive(Deserialize)]
struct RawGeneratorSettings {
    free_move_profile: MovementProfile,
    drawing_profiles: Vec<MovementProfile>,
    disconnect_distance_mm: u32,
    tool_change_duration_ms: u32,
    settle_delay_ms: u32,
    neutral_tool_id: u8,
}

impl TryFrom<RawGeneratorSettings> for GeneratorSettings {
    type Error = ValidationError;

    fn try_from(raw: RawGeneratorSettings) -> Result<Self, Self::Error> {
        Self::with_settle_delay(
            raw.free_move_profile,
            raw.drawing_profiles,
            raw.disconnect_distance_mm,
            raw.tool_change_duration_ms,
            raw.settle_delay_ms,
            raw.neutral_tool_id,
        )
    }
}

impl GeneratorSettings {
    /// Maximum disconnect distance threshold in millimeters.
    pub const MAX_DISCONNECT_DISTANCE_MM: u32 = 50;
    /// Maximum delay for tool changes and settling, in milliseconds.
    pub const MAX_DELAY_MS: u32 = 5000;
    /// Settling delay used when none is specified.
    pub const DEFAULT_SETTLE_DELAY_MS: u32 = 1000;

    /// Creates settings with the default settle delay.
    pub fn new(
        free_move_profile: MovementProfile,
        drawing_profiles: Vec<MovementProfile>,
        disconnect_distance_mm: u32,
        tool_change_duration_ms: u32,
        neutral_tool_id: u8,
    ) -> Result<Self, ValidationError> {
        Self::with_settle_delay(
            free_move_profile,
            drawing_profiles,
            disconnect_distance_mm,
            tool_change_duration_ms,
            Self::DEFAULT_SETTLE_DELAY_MS,
            neutral_tool_id,
        )
    }

    /// Creates settings with an explicit prologue/epilogue settle delay.
    pub fn with_settle_delay(
        free_move_profile: MovementProfile,
        drawing_profiles: Vec<MovementProfile>,
        disconnect_distance_mm: u32,
        tool_change_duration_ms: u32,
        settle_delay_ms: u32,
        neutral_tool_id: u8,
    ) -> Result<Self, ValidationError> {
        if drawing_profiles.is_empty() {
            return Err(ValidationError::NoDrawingProfiles);
        }
        if disconnect_distance_mm > Self::MAX_DISCONNECT_DISTANCE_MM {
            return Err(ValidationError::DisconnectDistanceOutOfRange {
                value: disconnect_distance_mm,
                max: Self::MAX_DISCONNECT_DISTANCE_MM,
            });
        }
        if tool_change_duration_ms > Self::MAX_DELAY_MS {
            return Err(ValidationError::DelayOutOfRange {
                name: "tool_change_duration_ms",
                value: tool_change_duration_ms,
                max: Self::MAX_DELAY_MS,
            });
        }
        if settle_delay_ms > Self::MAX_DELAY_MS {
            return Err(ValidationError::DelayOutOfRange {
                name: "settle_delay_ms",
                value: settle_delay_ms,
                max: Self::MAX_DELAY_MS,
            });
        }
        if neutral_tool_id > MAX_TOOL_ID {
            return Err(ValidationError::ToolIdOutOfRange {
                tool_id: neutral_tool_id,
                max: MAX_TOOL_ID,
            });
        }
        Ok(Self {
            free_move_profile,
            drawing_profiles,
            disconnect_distance_mm,
            tool_change_duration_ms,
            settle_delay_ms,
            neutral_tool_id,
        })
    }

    /// Profile used for travel moves between contours.
    pub fn free_move_profile(&self) -> &MovementProfile {
        &self.free_move_profile
    }

    /// The drawing profile at `index`.
    ///
    /// An out-of-range index is an error, never a fallback.
    pub fn drawing_profile(&self, index: usize) -> Result<&MovementProfile, ValidationError> {
        self.drawing_profiles
            .get(index)
            .ok_or(ValidationError::ProfileIndexOutOfRange {
                index,
                profile_count: self.drawing_profiles.len(),
            })
    }

    /// Number of configured drawing profiles.
    pub fn drawing_profile_count(&self) -> usize {
        self.drawing_profiles.len()
    }

    /// Gap above which consecutive vertices force a tool disconnect.
    pub fn disconnect_distance_mm(&self) -> u32 {
        self.disconnect_distance_mm
    }

    /// Delay inserted while the tool re-engages after a disconnect.
    pub fn tool_change_duration_ms(&self) -> u32 {
        self.tool_change_duration_ms
    }

    /// Settling delay emitted in the program prologue and epilogue.
    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }

    /// The "pen up" tool identifier used during travel moves.
    pub fn neutral_tool_id(&self) -> u8 {
        self.neutral_tool_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PlannerMode;

    fn profile(speed: u8) -> MovementProfile {
        MovementProfile::new(PlannerMode::Speed, speed, 0).unwrap()
    }

    #[test]
    fn rejects_empty_profile_list() {
        let err = GeneratorSettings::new(profile(8), vec![], 5, 300, 0).unwrap_err();
        assert_eq!(err, ValidationError::NoDrawingProfiles);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        assert!(GeneratorSettings::new(profile(8), vec![profile(5)], 51, 300, 0).is_err());
        assert!(GeneratorSettings::new(profile(8), vec![profile(5)], 5, 5001, 0).is_err());
        assert!(
            GeneratorSettings::with_settle_delay(profile(8), vec![profile(5)], 5, 300, 6000, 0)
                .is_err()
        );
        assert!(GeneratorSettings::new(profile(8), vec![profile(5)], 5, 300, 9).is_err());
    }

    #[test]
    fn drawing_profile_lookup_is_checked() {
        let settings =
            GeneratorSettings::new(profile(8), vec![profile(5), profile(3)], 5, 300, 0).unwrap();
        assert_eq!(settings.drawing_profile(1).unwrap().speed(), 3);
        let err = settings.drawing_profile(2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ProfileIndexOutOfRange {
                index: 2,
                profile_count: 2
            }
        );
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings =
            GeneratorSettings::new(profile(8), vec![profile(5)], 5, 300, 0).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let back: GeneratorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn deserialization_enforces_range_checks() {
        let settings =
            GeneratorSettings::new(profile(8), vec![profile(5)], 5, 300, 0).unwrap();
        let json = serde_json::to_string(&settings).unwrap();

        // Push the disconnect distance past its maximum in the wire form.
        let tampered = json.replace(
            "\"disconnect_distance_mm\":5",
            "\"disconnect_distance_mm\":51",
        );
        assert_ne!(tampered, json);
        assert!(serde_json::from_str::<GeneratorSettings>(&tampered).is_err());

        // Drop every drawing profile.
        let tampered = json.replace(
            "\"drawing_profiles\":[{\"mode\":\"Speed\",\"speed\":5,\"accel\":0}]",
            "\"drawing_profiles\":[]",
        );
        assert_ne!(tampered, json);
        assert!(serde_json::from_str::<GeneratorSettings>(&tampered).is_err());
    }
}
