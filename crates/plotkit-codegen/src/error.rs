//! Error types for code generation.

use plotkit_core::ValidationError;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// A downstream assembler failure is not represented here; it travels
/// back to the caller as a [`CompileOutcome`](crate::CompileOutcome)
/// with `success == false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// A trajectory or settings value failed pre-run validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Progress was computed against an empty run.
    ///
    /// Unreachable when the emitter is used through its public entry
    /// point; the guard exists so a misuse surfaces as an error instead
    /// of a division fault.
    #[error("Progress computed with zero total steps")]
    ZeroTotalSteps,
}
