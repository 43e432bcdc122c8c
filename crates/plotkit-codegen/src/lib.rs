//! # PlotKit Codegen
//!
//! Turns an ordered list of trajectories into the textual macro-assembly
//! program executed by the plotter firmware. The [`InstructionEmitter`]
//! does the stateful sequencing (profile switches, tool disconnects,
//! progress reporting); the [`CodeWriter`] wires it to an external
//! [`BytecodeAssembler`] and returns the assembler's outcome unchanged.

pub mod assembler;
pub mod emitter;
pub mod error;
pub mod instruction;
pub mod state;
pub mod writer;

pub use assembler::{BytecodeAssembler, CompileOutcome};
pub use emitter::InstructionEmitter;
pub use error::CodegenError;
pub use instruction::{render_program, Instruction};
pub use state::GenerationState;
pub use writer::{CodeWriter, GenerationReport};
