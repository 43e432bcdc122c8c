//! Error types for the core data model.
//!
//! Every construction-time validation failure is represented here.
//! Values are rejected with a descriptive error, never silently clamped.

use thiserror::Error;

/// Errors raised while constructing or validating model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A path's X and Y sequences have different lengths.
    #[error("Mismatched path axis lengths: {x_len} X positions vs {y_len} Y positions")]
    MismatchedAxisLengths {
        /// Number of X positions supplied.
        x_len: usize,
        /// Number of Y positions supplied.
        y_len: usize,
    },

    /// A path must contain at least one vertex.
    #[error("Path contains no vertices")]
    EmptyPath,

    /// A movement speed is outside the device range.
    #[error("Speed {speed} out of range [{min}, {max}]")]
    SpeedOutOfRange {
        /// The rejected speed value.
        speed: u8,
        /// Minimum accepted speed.
        min: u8,
        /// Maximum accepted speed.
        max: u8,
    },

    /// The disconnect distance threshold is outside its range.
    #[error("Disconnect distance {value}mm out of range [0, {max}]mm")]
    DisconnectDistanceOutOfRange {
        /// The rejected distance in millimeters.
        value: u32,
        /// Maximum accepted distance in millimeters.
        max: u32,
    },

    /// A delay setting is outside its range.
    #[error("Delay '{name}' of {value}ms out of range [0, {max}]ms")]
    DelayOutOfRange {
        /// Which delay setting was rejected.
        name: &'static str,
        /// The rejected duration in milliseconds.
        value: u32,
        /// Maximum accepted duration in milliseconds.
        max: u32,
    },

    /// A tool identifier is outside the device's tool table.
    #[error("Tool id {tool_id} out of range [0, {max}]")]
    ToolIdOutOfRange {
        /// The rejected tool id.
        tool_id: u8,
        /// Largest valid tool id.
        max: u8,
    },

    /// A trajectory references a drawing profile that does not exist.
    #[error("Drawing profile index {index} out of range: {profile_count} profile(s) configured")]
    ProfileIndexOutOfRange {
        /// The rejected profile index.
        index: usize,
        /// Number of drawing profiles configured.
        profile_count: usize,
    },

    /// Generator settings need at least one drawing profile.
    #[error("No drawing profiles configured")]
    NoDrawingProfiles,

    /// A sampler resolution is outside its range.
    #[error("Sampling resolution {value} out of range [{min}, {max}]")]
    ResolutionOutOfRange {
        /// The rejected resolution.
        value: u32,
        /// Minimum accepted resolution.
        min: u32,
        /// Maximum accepted resolution.
        max: u32,
    },

    /// A polygon vertex count is outside its range.
    #[error("Polygon vertex count {value} out of range [{min}, {max}]")]
    PolygonVertexCountOutOfRange {
        /// The rejected vertex count.
        value: u32,
        /// Minimum accepted vertex count.
        min: u32,
        /// Maximum accepted vertex count.
        max: u32,
    },

    /// A scaled coordinate does not fit the device's position range.
    #[error("Scaled coordinate at point {index} does not fit the device position range")]
    CoordinateOutOfRange {
        /// Index of the offending point in the input sequence.
        index: usize,
    },

    /// A spiral repeat count is outside its range.
    #[error("Spiral repeat count {value} out of range [{min}, {max}]")]
    SpiralRepeatsOutOfRange {
        /// The rejected repeat count.
        value: u32,
        /// Minimum accepted repeat count.
        min: u32,
        /// Maximum accepted repeat count.
        max: u32,
    },
}
