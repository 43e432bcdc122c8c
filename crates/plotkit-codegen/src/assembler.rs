//! Seam to the external bytecode assembler.
//!
//! The generator hands the assembler its textual program and passes the
//! outcome back to the caller unchanged. Failures are opaque here: the
//! core neither interprets nor retries them.

use std::time::Duration;

/// Result of one assembler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    /// Whether assembly succeeded.
    pub success: bool,
    /// Human-readable diagnostic from the assembler.
    pub message: String,
    /// Size of the produced binary, when assembly succeeded.
    pub binary_size: Option<usize>,
    /// Time the assembler spent compiling, when reported.
    pub compile_time: Option<Duration>,
}

impl CompileOutcome {
    /// Builds a successful outcome.
    pub fn success(
        message: impl Into<String>,
        binary_size: usize,
        compile_time: Duration,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            binary_size: Some(binary_size),
            compile_time: Some(compile_time),
        }
    }

    /// Builds a failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            binary_size: None,
            compile_time: None,
        }
    }
}

/// The external assembler that compiles macro-assembly text to bytecode.
///
/// Implementations wrap an already-existing toolchain; this crate only
/// defines the call contract.
pub trait BytecodeAssembler {
    /// Compiles `source` and reports the outcome.
    fn assemble(&self, source: &str) -> CompileOutcome;
}
