//! Error types for binding operations.

use dft_plan_core::allocate::AllocateError;
use thiserror::Error;

/// Errors that can occur while marshaling host arguments or executing a plan.
///
/// Every variant aborts the current call synchronously: no partial output is
/// produced and any native buffer allocated earlier in the call is released
/// before the error propagates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A required positional argument was absent.
    #[error("expected more arguments: argument {position} is required")]
    MissingArgument {
        /// 1-based position of the missing argument.
        position: usize,
    },

    /// An argument was present but of the wrong kind.
    #[error("argument {position} must be {expected}")]
    TypeMismatch {
        /// 1-based position of the offending argument.
        position: usize,
        /// Human-readable description of the expected kind.
        expected: &'static str,
    },

    /// More positional arguments were supplied than the operation accepts.
    #[error("this function takes at most {max} arguments, got {actual}")]
    TooManyArguments {
        /// Maximum arity of the operation.
        max: usize,
        /// Number of arguments actually supplied.
        actual: usize,
    },

    /// Plan size was zero or negative where a positive size is required.
    #[error("cannot transform an empty or negative sized buffer (size {0})")]
    InvalidSize(i64),

    /// Input container length does not equal `2 * plan size`.
    #[error("input must hold exactly {expected} values, got {actual}")]
    LengthMismatch {
        /// Required element count (`2 * plan size`).
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// Handle argument is null, of the wrong tag, or already released.
    #[error("plan handle is invalid or already released")]
    InvalidHandle,

    /// Native buffer allocation failed.
    #[error("out of memory: {0}")]
    AllocationFailed(#[from] AllocateError),
}
