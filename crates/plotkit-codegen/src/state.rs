//! Per-run generation state.

use plotkit_core::Trajectory;

use crate::error::CodegenError;

/// Counters threaded through one generation run.
///
/// Owned exclusively by the emitter for the run's duration and discarded
/// afterwards; nothing here outlives a run.
#[derive(Debug)]
pub struct GenerationState {
    total_step_count: usize,
    current_step_index: usize,
    last_emitted_progress: Option<u8>,
    last_position: (i32, i32),
}

impl GenerationState {
    /// Creates state for a run over `trajectories`, summing their vertex
    /// counts up front. The device starts at the origin.
    pub fn new(trajectories: &[Trajectory]) -> Self {
        Self {
            total_step_count: trajectories.iter().map(|t| t.path().len()).sum(),
            current_step_index: 0,
            last_emitted_progress: None,
            last_position: (0, 0),
        }
    }

    /// Total number of vertices across all trajectories.
    pub fn total_step_count(&self) -> usize {
        self.total_step_count
    }

    /// Steps completed so far.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Position of the most recently visited vertex.
    pub fn last_position(&self) -> (i32, i32) {
        self.last_position
    }

    /// Records one completed step at `position`.
    pub fn advance(&mut self, position: (i32, i32)) {
        self.current_step_index += 1;
        self.last_position = position;
    }

    /// Completion percentage after the current step, integer division.
    ///
    /// Calling this on a run with no steps is a programmer error and is
    /// reported, never allowed to divide by zero.
    pub fn progress_percent(&self) -> Result<u8, CodegenError> {
        if self.total_step_count == 0 {
            return Err(CodegenError::ZeroTotalSteps);
        }
        Ok((self.current_step_index * 100 / self.total_step_count) as u8)
    }

    /// Returns the percentage to report, once per distinct value.
    ///
    /// Consecutive calls at the same percentage yield `None`, so the
    /// emitted progress sequence is strictly increasing with each value
    /// appearing at most once.
    pub fn take_progress_update(&mut self) -> Result<Option<u8>, CodegenError> {
        let pct = self.progress_percent()?;
        if self.last_emitted_progress == Some(pct) {
            return Ok(None);
        }
        self.last_emitted_progress = Some(pct);
        Ok(Some(pct))
    }
}
