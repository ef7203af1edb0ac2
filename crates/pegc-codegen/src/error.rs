//! Codegen error types.

use pegc_types::ContractViolation;
use thiserror::Error;

/// Errors that can occur while emitting code fragments.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// An internal consistency check failed.
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    /// Emit options were malformed or out of range.
    #[error("invalid emit options: {0}")]
    InvalidOptions(String),
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
