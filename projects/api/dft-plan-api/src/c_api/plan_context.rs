//! Opaque plan management for the C API.
//!
//! This module provides an opaque plan pointer wrapping a [`PlanHandle`].
//! A plan is per-caller state that must be explicitly freed; clones share the
//! underlying native plan, which is released when the last clone is freed.

use core::ptr;
use core::slice;

use crate::c_api::error::{DftpErrorCode, DftpResult};
use crate::handle::PlanHandle;
use crate::module;
use crate::value::Value;

/// Opaque plan type for transform operations.
///
/// Must be:
///
/// - Created with [`dftp_plan_create()`]
/// - Passed to [`dftp_plan_execute()`] any number of times
/// - Freed with [`dftp_plan_free()`] when no longer needed
#[repr(C)]
pub struct DftpPlan {
    // Private field to ensure it's opaque
    _private: [u8; 0],
}

/// Internal representation of the opaque plan
pub(crate) struct DftpPlanInner {
    pub(crate) handle: PlanHandle,
}

/// Create a plan for a 1D complex-to-complex transform.
///
/// `size` is the number of complex samples; `sign` and `planner_flags` use
/// the engine's native encodings (`FORWARD`/`BACKWARD`, `ESTIMATE`, ...).
/// On success writes a newly allocated plan to `out_plan`; the plan must be
/// freed with [`dftp_plan_free()`].
///
/// # Safety
/// - `out_plan` must be a valid pointer to a plan-pointer slot
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_plan_create(
    size: i64,
    sign: i64,
    planner_flags: i64,
    out_plan: *mut *mut DftpPlan,
) -> DftpResult {
    if out_plan.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullOutputPointer);
    }

    let args = [
        Value::Integer(size),
        Value::Integer(sign),
        Value::Integer(planner_flags),
    ];
    match module::plan_dft_1d(&args) {
        Ok(handle) => {
            let inner = Box::new(DftpPlanInner { handle });
            unsafe { *out_plan = Box::into_raw(inner) as *mut DftpPlan };
            DftpResult::success()
        }
        Err(error) => {
            unsafe { *out_plan = ptr::null_mut() };
            error.into()
        }
    }
}

/// Free a plan.
///
/// The underlying native plan is released once the last clone is freed.
///
/// # Safety
/// - `plan` must be a valid pointer returned by [`dftp_plan_create()`] or
///   [`dftp_plan_clone()`], or null (a no-op)
/// - `plan` must not have been freed already
/// - After calling this function, `plan` becomes invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_plan_free(plan: *mut DftpPlan) {
    if !plan.is_null() {
        unsafe {
            drop(Box::from_raw(plan as *mut DftpPlanInner));
        }
    }
}

/// Clone a plan.
///
/// The clone shares the underlying native plan and must be freed
/// independently.
///
/// # Safety
/// - `plan` must be a valid pointer to a DftpPlan
///
/// # Returns
/// A pointer to a new plan sharing the same native state, or null if `plan`
/// is null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_plan_clone(plan: *const DftpPlan) -> *mut DftpPlan {
    if plan.is_null() {
        return ptr::null_mut();
    }

    let inner = unsafe { &*(plan as *const DftpPlanInner) };
    let cloned = Box::new(DftpPlanInner {
        handle: inner.handle.clone(),
    });
    Box::into_raw(cloned) as *mut DftpPlan
}

/// Get the number of complex samples a plan transforms.
///
/// # Safety
/// - `plan` must be a valid pointer to a DftpPlan
/// - `out_size` must be a valid pointer to a size slot
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_plan_size(plan: *const DftpPlan, out_size: *mut usize) -> DftpResult {
    if plan.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullPlanPointer);
    }
    if out_size.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullOutputPointer);
    }

    let inner = unsafe { &*(plan as *const DftpPlanInner) };
    match inner.handle.size() {
        Ok(size) => {
            unsafe { *out_size = size };
            DftpResult::success()
        }
        Err(error) => error.into(),
    }
}

/// Execute a plan against interleaved `(re, im)` input samples.
///
/// `input` and `output` must each hold `2 * size` values; the output is the
/// transform result with every value multiplied by `scale`. The input is not
/// modified and the plan may be executed again.
///
/// # Safety
/// - `plan` must be a valid pointer to a DftpPlan
/// - `input` must be valid for reads of `num_values` f64 values
/// - `output` must be valid for writes of `num_values` f64 values
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dftp_plan_execute(
    plan: *const DftpPlan,
    input: *const f64,
    num_values: usize,
    scale: f64,
    output: *mut f64,
) -> DftpResult {
    if plan.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullPlanPointer);
    }
    if input.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullInputPointer);
    }
    if output.is_null() {
        return DftpResult::from_error_code(DftpErrorCode::NullOutputPointer);
    }

    let inner = unsafe { &*(plan as *const DftpPlanInner) };
    let input = unsafe { slice::from_raw_parts(input, num_values) };
    match inner.handle.execute_interleaved(input, scale) {
        Ok(result) => {
            unsafe { ptr::copy_nonoverlapping(result.as_ptr(), output, result.len()) };
            DftpResult::success()
        }
        Err(error) => error.into(),
    }
}
