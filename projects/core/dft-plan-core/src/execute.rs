//! Execute primitives and the transform kernels behind them.
//!
//! The raw primitive [`execute_dft`] mirrors how the engine is driven from a
//! binding layer: a plan plus a pointer to an interleaved re/im `f64` buffer,
//! transformed in place. [`execute_dft_slice`] is the validated wrapper for
//! callers that already hold a typed buffer.

use core::slice;

use thiserror::Error;

use crate::complex::Complex64;
use crate::plan::{DftPlan, KernelStrategy};

/// Errors that can occur while executing a plan against a buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteError {
    /// The buffer's sample count does not match the plan's size.
    #[error("buffer must hold exactly {expected} complex samples, got {actual}")]
    LengthMismatch {
        /// The plan's transform size.
        expected: usize,
        /// The buffer's actual sample count.
        actual: usize,
    },
}

/// Executes `plan` in place over a raw interleaved buffer.
///
/// The buffer is read as `plan.size()` complex samples (alternating re/im
/// `f64` values) and overwritten with the transform result. The plan is
/// unchanged and may be executed again.
///
/// # Safety
///
/// - `io_ptr` must be valid for reads and writes of `plan.size() * 2` `f64`
///   values
/// - `io_ptr` must be aligned for `f64`
/// - The buffer must not be accessed from another thread for the duration of
///   the call
pub unsafe fn execute_dft(plan: &DftPlan, io_ptr: *mut f64) {
    debug_assert!(!io_ptr.is_null());

    let io = slice::from_raw_parts_mut(io_ptr as *mut Complex64, plan.size());
    match plan.strategy() {
        KernelStrategy::Radix2 => radix2_in_place(io, plan.twiddles()),
        KernelStrategy::DirectDft => direct_dft(io, plan.twiddles()),
    }
}

/// Executes `plan` in place over a typed sample buffer.
///
/// # Errors
///
/// [`ExecuteError::LengthMismatch`] if `io.len() != plan.size()`.
pub fn execute_dft_slice(plan: &DftPlan, io: &mut [Complex64]) -> Result<(), ExecuteError> {
    if io.len() != plan.size() {
        return Err(ExecuteError::LengthMismatch {
            expected: plan.size(),
            actual: io.len(),
        });
    }

    // Safety: length was validated against the plan; Complex64 is two f64s.
    unsafe { execute_dft(plan, io.as_mut_ptr() as *mut f64) };
    Ok(())
}

/// Iterative radix-2 decimation-in-time, in place. `io.len()` must be a power
/// of two and `twiddles` must hold `io.len() / 2` roots.
fn radix2_in_place(io: &mut [Complex64], twiddles: &[Complex64]) {
    let n = io.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(twiddles.len(), n / 2);

    bit_reverse_permute(io);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        let mut start = 0;
        while start < n {
            for k in 0..half {
                let w = twiddles[k * stride];
                let a = io[start + k];
                let b = io[start + k + half] * w;
                io[start + k] = a + b;
                io[start + k + half] = a - b;
            }
            start += len;
        }
        len <<= 1;
    }
}

/// Reorders `io` into bit-reversed index order. `io.len()` must be a power of
/// two greater than one.
fn bit_reverse_permute(io: &mut [Complex64]) {
    let n = io.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            io.swap(i, j);
        }
    }
}

/// Direct evaluation for sizes without a specialized kernel. `twiddles` must
/// hold all `io.len()` roots; results are staged through a scratch buffer
/// then copied back so the transform remains in place for the caller.
fn direct_dft(io: &mut [Complex64], twiddles: &[Complex64]) {
    let n = io.len();
    debug_assert_eq!(twiddles.len(), n);

    let mut out = vec![Complex64::ZERO; n];
    for (k, out_k) in out.iter_mut().enumerate() {
        let mut acc = Complex64::ZERO;
        // Twiddle index walks (k * j) mod n without the multiply overflowing.
        let mut idx = 0;
        for &x in io.iter() {
            acc = acc + x * twiddles[idx];
            idx += k;
            if idx >= n {
                idx -= n;
            }
        }
        *out_k = acc;
    }
    io.copy_from_slice(&out);
}
