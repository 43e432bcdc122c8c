//! Contour path representation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One contour as parallel X/Y integer position sequences.
///
/// The two sequences always have equal, non-zero length; both invariants
/// are checked at construction and the value is immutable afterwards.
/// Positions are in device units (millimeters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPathData")]
pub struct PathData {
    xs: Vec<i32>,
    ys: Vec<i32>,
}

/// Wire form of [`PathData`]; deserialization routes through
/// [`PathData::new`] so loaded paths satisfy the same invariants as
/// constructed ones.
#[derive(Deserialize)]
struct RawPathData {
    xs: Vec<i32>,
    ys: Vec<i32>,
}

impl TryFrom<RawPathData> for PathData {
    type Error = ValidationError;

    fn try_from(raw: RawPathData) -> Result<Self, Self::Error> {
        Self::new(raw.xs, raw.ys)
    }
}

impl PathData {
    /// Creates a path from parallel X and Y position sequences.
    ///
    /// Fails when the sequences have different lengths or are empty.
    pub fn new(xs: Vec<i32>, ys: Vec<i32>) -> Result<Self, ValidationError> {
        if xs.len() != ys.len() {
            return Err(ValidationError::MismatchedAxisLengths {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        Ok(Self { xs, ys })
    }

    /// Creates a path from a sequence of (x, y) points.
    pub fn from_points(points: &[(i32, i32)]) -> Result<Self, ValidationError> {
        let xs = points.iter().map(|&(x, _)| x).collect();
        let ys = points.iter().map(|&(_, y)| y).collect();
        Self::new(xs, ys)
    }

    /// Number of vertices in the contour. Always at least 1.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; an empty path cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The vertex at `index`, if it exists.
    pub fn point(&self, index: usize) -> Option<(i32, i32)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// The first vertex of the contour.
    pub fn first_point(&self) -> (i32, i32) {
        (self.xs[0], self.ys[0])
    }

    /// Iterates over the contour's vertices in order.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
