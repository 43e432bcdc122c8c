//! The instruction emitter: trajectories in, ordered program out.
//!
//! Walks an ordered trajectory list and produces the full instruction
//! program: global prologue, one contour block per trajectory, global
//! epilogue. Trajectory order is an externally visible contract (the
//! device executes the stream strictly in order) and is never changed
//! here.

use plotkit_core::{GeneratorSettings, MovementProfile, Trajectory};
use tracing::debug;

use crate::error::CodegenError;
use crate::instruction::Instruction;
use crate::state::GenerationState;

/// Stateful sequencer for one generation run.
pub struct InstructionEmitter<'a> {
    settings: &'a GeneratorSettings,
    state: GenerationState,
    program: Vec<Instruction>,
}

impl<'a> InstructionEmitter<'a> {
    /// Emits the complete instruction program for `trajectories`.
    ///
    /// All trajectories are validated against `settings` before the
    /// first instruction is produced, so a failed run never yields
    /// partial output. An empty trajectory list is valid and produces a
    /// prologue/epilogue-only program.
    pub fn emit(
        settings: &'a GeneratorSettings,
        trajectories: &[Trajectory],
    ) -> Result<Vec<Instruction>, CodegenError> {
        for trajectory in trajectories {
            trajectory.validate_against(settings)?;
        }

        let mut emitter = Self {
            settings,
            state: GenerationState::new(trajectories),
            program: Vec::new(),
        };

        emitter.prologue();
        for trajectory in trajectories {
            emitter.contour(trajectory)?;
        }
        emitter.epilogue();

        debug_assert_eq!(
            emitter.state.current_step_index(),
            emitter.state.total_step_count()
        );
        Ok(emitter.program)
    }

    fn push(&mut self, instruction: Instruction) {
        self.program.push(instruction);
    }

    /// Activates a movement profile: planner mode, speed, acceleration.
    fn apply_profile(&mut self, profile: &MovementProfile, speed_override: Option<u8>) {
        self.push(Instruction::SetPlannerMode(profile.mode()));
        self.push(Instruction::SetSpeed(
            speed_override.unwrap_or(profile.speed()),
        ));
        self.push(Instruction::SetAccel(profile.accel()));
    }

    fn prologue(&mut self) {
        self.push(Instruction::SetActiveTool(self.settings.neutral_tool_id()));
        self.push(Instruction::DelayMs(self.settings.settle_delay_ms()));
        let free = *self.settings.free_move_profile();
        self.apply_profile(&free, None);
    }

    fn contour(&mut self, trajectory: &Trajectory) -> Result<(), CodegenError> {
        debug!(
            name = trajectory.name(),
            vertices = trajectory.path().len(),
            tool_id = trajectory.tool_id(),
            "emitting contour"
        );

        // Validated before the run started.
        let drawing_profile = *self.settings.drawing_profile(trajectory.profile_index())?;

        // Contour begin: lift, fly to the first vertex, engage the tool.
        // The fly-to is always a discrete travel move and is never
        // checked against the disconnect threshold.
        let free = *self.settings.free_move_profile();
        self.apply_profile(&free, None);
        self.push(Instruction::SetActiveTool(self.settings.neutral_tool_id()));
        let first = trajectory.path().first_point();
        self.push(Instruction::SetPosition {
            x: first.0,
            y: first.1,
        });
        self.state.advance(first);
        self.apply_profile(&drawing_profile, trajectory.movement_speed_override());
        self.push(Instruction::SetActiveTool(trajectory.tool_id()));

        let threshold = f64::from(self.settings.disconnect_distance_mm());
        for (x, y) in trajectory.path().points().skip(1) {
            let (last_x, last_y) = self.state.last_position();
            // Subtract in f64: the gap between two valid i32 coordinates
            // can exceed i32::MAX.
            let dx = f64::from(x) - f64::from(last_x);
            let dy = f64::from(y) - f64::from(last_y);
            let distance = f64::hypot(dx, dy);

            if distance > threshold {
                // Gap too wide to draw through: lift, reposition, settle,
                // re-engage.
                self.push(Instruction::SetActiveTool(self.settings.neutral_tool_id()));
                self.push(Instruction::SetPosition { x, y });
                self.push(Instruction::DelayMs(self.settings.tool_change_duration_ms()));
                self.push(Instruction::SetActiveTool(trajectory.tool_id()));
            } else {
                self.push(Instruction::SetPosition { x, y });
            }

            self.state.advance((x, y));
            if let Some(pct) = self.state.take_progress_update()? {
                self.push(Instruction::UpdateProgress(pct));
            }
        }

        // Contour end: back to travel configuration.
        self.push(Instruction::SetActiveTool(self.settings.neutral_tool_id()));
        let free = *self.settings.free_move_profile();
        self.apply_profile(&free, None);
        Ok(())
    }

    fn epilogue(&mut self) {
        let free = *self.settings.free_move_profile();
        self.apply_profile(&free, None);
        self.push(Instruction::SetPosition { x: 0, y: 0 });
        self.push(Instruction::SetActiveTool(self.settings.neutral_tool_id()));
        self.push(Instruction::DelayMs(self.settings.settle_delay_ms()));
        self.push(Instruction::Quit);
    }
}
