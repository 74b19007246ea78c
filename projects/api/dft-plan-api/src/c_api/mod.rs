//! C API for the plan/execute binding layer.
//!
//! Exposes the same surface as the Rust API to non-Rust embedders: an opaque
//! plan pointer with create/clone/free lifecycle, an execute entry point over
//! raw interleaved `f64` arrays, and `#[repr(C)]` error codes with static
//! message strings.

pub mod error;
pub mod plan_context;

pub use error::{DftpErrorCode, DftpResult, dftp_error_message};
pub use plan_context::{
    DftpPlan, dftp_plan_clone, dftp_plan_create, dftp_plan_execute, dftp_plan_free, dftp_plan_size,
};
