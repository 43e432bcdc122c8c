//! The primitive instruction set and its textual rendering.
//!
//! Sequencing works on [`Instruction`] values; the macro-assembly
//! surface syntax lives only in the `Display` impl, so a different
//! renderer can be swapped in without touching the emitter.

use std::fmt;

use plotkit_core::PlannerMode;

/// One primitive macro-instruction of the device program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Select the motion planning strategy.
    SetPlannerMode(PlannerMode),
    /// Set the movement speed.
    SetSpeed(u8),
    /// Set the acceleration.
    SetAccel(u32),
    /// Select the active tool; the neutral id lifts the pen.
    SetActiveTool(u8),
    /// Move to an absolute position in device units.
    SetPosition { x: i32, y: i32 },
    /// Pause for the given number of milliseconds.
    DelayMs(u32),
    /// Report completion percentage to the operator.
    UpdateProgress(u8),
    /// Terminate the program.
    Quit,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::SetPlannerMode(mode) => write!(f, "set_planner_mode {}", mode.code()),
            Instruction::SetSpeed(speed) => write!(f, "set_speed {}", speed),
            Instruction::SetAccel(accel) => write!(f, "set_accel {}", accel),
            Instruction::SetActiveTool(tool_id) => write!(f, "set_active_tool {}", tool_id),
            Instruction::SetPosition { x, y } => write!(f, "set_position {} {}", x, y),
            Instruction::DelayMs(ms) => write!(f, "delay_ms {}", ms),
            Instruction::UpdateProgress(pct) => write!(f, "update_progress {}", pct),
            Instruction::Quit => write!(f, "quit"),
        }
    }
}

/// Renders a program as macro-assembly source, one directive per line.
pub fn render_program(program: &[Instruction]) -> String {
    let mut source = String::new();
    for instruction in program {
        source.push_str(&instruction.to_string());
        source.push('\n');
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_directive() {
        assert_eq!(
            Instruction::SetPlannerMode(PlannerMode::Accel).to_string(),
            "set_planner_mode 0"
        );
        assert_eq!(
            Instruction::SetPlannerMode(PlannerMode::Speed).to_string(),
            "set_planner_mode 1"
        );
        assert_eq!(Instruction::SetSpeed(5).to_string(), "set_speed 5");
        assert_eq!(Instruction::SetAccel(50).to_string(), "set_accel 50");
        assert_eq!(Instruction::SetActiveTool(2).to_string(), "set_active_tool 2");
        assert_eq!(
            Instruction::SetPosition { x: 120, y: -40 }.to_string(),
            "set_position 120 -40"
        );
        assert_eq!(Instruction::DelayMs(500).to_string(), "delay_ms 500");
        assert_eq!(Instruction::UpdateProgress(42).to_string(), "update_progress 42");
        assert_eq!(Instruction::Quit.to_string(), "quit");
    }

    #[test]
    fn render_program_is_line_oriented() {
        let source = render_program(&[
            Instruction::SetSpeed(5),
            Instruction::SetPosition { x: 0, y: 0 },
            Instruction::Quit,
        ]);
        assert_eq!(source, "set_speed 5\nset_position 0 0\nquit\n");
    }

    #[test]
    fn empty_program_renders_empty() {
        assert_eq!(render_program(&[]), "");
    }
}
