//! C API error handling for plan/execute operations.

use core::ffi::c_char;

use crate::error::PlanError;

/// C-compatible error codes for plan/execute operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftpErrorCode {
    /// Operation succeeded
    Success = 0,
    /// A required positional argument was absent
    MissingArgument = 1,
    /// An argument was present but of the wrong kind
    TypeMismatch = 2,
    /// More positional arguments supplied than the operation accepts
    TooManyArguments = 3,
    /// Plan size was zero or negative
    InvalidSize = 4,
    /// Input length does not equal twice the plan size
    LengthMismatch = 5,
    /// Plan handle is invalid or already released
    InvalidHandle = 6,
    /// Native buffer allocation failed
    AllocationFailed = 7,
    /// Null pointer provided for plan parameter
    NullPlanPointer = 8,
    /// Null pointer provided for input parameter
    NullInputPointer = 9,
    /// Null pointer provided for output parameter
    NullOutputPointer = 10,
}

/// C-compatible Result type for plan/execute operations.
#[repr(C)]
pub struct DftpResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: DftpErrorCode,
}

impl DftpResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: DftpErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: DftpErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, DftpErrorCode::Success)
    }
}

impl From<PlanError> for DftpResult {
    fn from(error: PlanError) -> Self {
        let error_code = match error {
            PlanError::MissingArgument { .. } => DftpErrorCode::MissingArgument,
            PlanError::TypeMismatch { .. } => DftpErrorCode::TypeMismatch,
            PlanError::TooManyArguments { .. } => DftpErrorCode::TooManyArguments,
            PlanError::InvalidSize(_) => DftpErrorCode::InvalidSize,
            PlanError::LengthMismatch { .. } => DftpErrorCode::LengthMismatch,
            PlanError::InvalidHandle => DftpErrorCode::InvalidHandle,
            PlanError::AllocationFailed(_) => DftpErrorCode::AllocationFailed,
        };
        Self::from_error_code(error_code)
    }
}

impl<T> From<Result<T, PlanError>> for DftpResult {
    fn from(result: Result<T, PlanError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_error_message(error_code: DftpErrorCode) -> *const c_char {
    match error_code {
        DftpErrorCode::Success => c"Success".as_ptr() as *const c_char,
        DftpErrorCode::MissingArgument => {
            c"Expected more arguments: a required argument was absent".as_ptr() as *const c_char
        }
        DftpErrorCode::TypeMismatch => {
            c"Argument was present but of the wrong kind".as_ptr() as *const c_char
        }
        DftpErrorCode::TooManyArguments => {
            c"More positional arguments supplied than the operation accepts".as_ptr()
                as *const c_char
        }
        DftpErrorCode::InvalidSize => {
            c"Cannot transform an empty or negative sized buffer".as_ptr() as *const c_char
        }
        DftpErrorCode::LengthMismatch => {
            c"Input length must equal twice the plan size".as_ptr() as *const c_char
        }
        DftpErrorCode::InvalidHandle => {
            c"Plan handle is invalid or already released".as_ptr() as *const c_char
        }
        DftpErrorCode::AllocationFailed => c"Out of memory".as_ptr() as *const c_char,
        DftpErrorCode::NullPlanPointer => {
            c"Null pointer provided for plan parameter".as_ptr() as *const c_char
        }
        DftpErrorCode::NullInputPointer => {
            c"Null pointer provided for input parameter".as_ptr() as *const c_char
        }
        DftpErrorCode::NullOutputPointer => {
            c"Null pointer provided for output parameter".as_ptr() as *const c_char
        }
    }
}
