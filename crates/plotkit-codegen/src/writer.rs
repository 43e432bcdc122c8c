//! Pipeline orchestration: emitter -> text -> assembler -> report.

use plotkit_core::{GeneratorSettings, Trajectory};
use tracing::info;

use crate::assembler::{BytecodeAssembler, CompileOutcome};
use crate::emitter::InstructionEmitter;
use crate::error::CodegenError;
use crate::instruction::render_program;

/// Result of one full generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The assembler's outcome, passed through unchanged.
    pub outcome: CompileOutcome,
    /// The macro-assembly source that was handed to the assembler,
    /// kept for diagnostics.
    pub source: String,
}

/// Binds settings and trajectories to the emitter and an assembler.
///
/// Holds no per-run state; one writer can serve many export actions,
/// each run building its own generation state internally.
pub struct CodeWriter<A: BytecodeAssembler> {
    assembler: A,
}

impl<A: BytecodeAssembler> CodeWriter<A> {
    /// Creates a writer around an assembler backend.
    pub fn new(assembler: A) -> Self {
        Self { assembler }
    }

    /// Runs one generation pass: emit, render, assemble.
    ///
    /// Validation and invariant violations abort with `Err` before any
    /// assembler call; an assembler failure comes back as a report whose
    /// outcome has `success == false`.
    pub fn run(
        &self,
        settings: &GeneratorSettings,
        trajectories: &[Trajectory],
    ) -> Result<GenerationReport, CodegenError> {
        info!(trajectory_count = trajectories.len(), "starting generation run");

        let program = InstructionEmitter::emit(settings, trajectories)?;
        let source = render_program(&program);
        let outcome = self.assembler.assemble(&source);

        info!(
            instruction_count = program.len(),
            source_bytes = source.len(),
            success = outcome.success,
            "generation run finished"
        );

        Ok(GenerationReport { outcome, source })
    }
}
