//! Shared types for the pegc parser generator.
//!
//! This crate defines the grammar AST, the contract-violation error raised on
//! broken internal invariants, the grammar diff used for pass idempotence
//! checks, and the generic helpers every later compiler stage relies on.

mod error;
pub mod ast;
pub mod ast_diff;
pub mod util;

pub use error::ContractViolation;

/// Result type used throughout the pegc compiler core.
pub type Result<T> = std::result::Result<T, ContractViolation>;
