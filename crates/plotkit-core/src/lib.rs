//! # PlotKit Core
//!
//! Core data model for the PlotKit plotter code generator.
//! Provides the contour/path representation, movement profiles,
//! per-run generator settings, trajectories, and the path sampling
//! helpers used by shape producers.

pub mod error;
pub mod path;
pub mod profile;
pub mod sampler;
pub mod settings;
pub mod trajectory;

pub use error::ValidationError;
pub use path::PathData;
pub use profile::{MovementProfile, PlannerMode};
pub use settings::GeneratorSettings;
pub use trajectory::{Trajectory, MAX_TOOL_ID};
