//! Memory allocation for transform buffers.
//!
//! Transform buffers hold interleaved complex samples and are handed to the
//! kernels as raw pointers, so they are allocated cache-line aligned through
//! [`RawAlloc`] rather than `Vec` (no zeroing, guaranteed alignment, freed on
//! drop along every exit path).

use core::alloc::Layout;
use core::slice;

use safe_allocator_api::RawAlloc;
use thiserror::Error;

use crate::complex::Complex64;

/// Errors that can occur while allocating a transform buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocateError {
    /// The requested sample count does not form a valid allocation layout.
    #[error("invalid allocation layout for {num_samples} complex samples")]
    InvalidLayout {
        /// The requested number of complex samples.
        num_samples: usize,
    },

    /// The allocator could not provide the requested memory.
    #[error("allocation of {num_samples} complex samples failed")]
    AllocationFailed {
        /// The requested number of complex samples.
        num_samples: usize,
    },
}

/// Allocates a cache-line aligned buffer holding `num_samples` complex samples.
///
/// The allocation is exactly `num_samples * 16` bytes and is released when the
/// returned [`RawAlloc`] drops.
///
/// # Errors
///
/// - [`AllocateError::InvalidLayout`] if the byte size overflows or cannot
///   form a layout
/// - [`AllocateError::AllocationFailed`] if the allocator reports failure
pub fn allocate_complex_buffer(num_samples: usize) -> Result<RawAlloc, AllocateError> {
    // 64 bytes covers x86/x86_64/aarch64; other targets get the same
    // conservative default.
    const CACHE_LINE_SIZE: usize = 64;

    let num_bytes = num_samples
        .checked_mul(core::mem::size_of::<Complex64>())
        .ok_or(AllocateError::InvalidLayout { num_samples })?;
    let layout = Layout::from_size_align(num_bytes, CACHE_LINE_SIZE)
        .map_err(|_| AllocateError::InvalidLayout { num_samples })?;
    RawAlloc::new(layout).map_err(|_| AllocateError::AllocationFailed { num_samples })
}

/// Views an allocation from [`allocate_complex_buffer`] as complex samples.
pub fn complex_samples_mut(alloc: &mut RawAlloc) -> &mut [Complex64] {
    let bytes = alloc.as_mut_slice();
    debug_assert!(bytes.len() % core::mem::size_of::<Complex64>() == 0);

    // Safety: the allocation is 64-byte aligned (exceeding Complex64's
    // alignment) and its length is a whole number of 16-byte samples.
    unsafe {
        slice::from_raw_parts_mut(
            bytes.as_mut_ptr() as *mut Complex64,
            bytes.len() / core::mem::size_of::<Complex64>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_size_is_sixteen_bytes_per_sample() {
        let alloc = allocate_complex_buffer(7).unwrap();
        assert_eq!(alloc.as_slice().len(), 7 * 16);
    }

    #[test]
    fn overflowing_sample_count_is_rejected() {
        let result = allocate_complex_buffer(usize::MAX);
        assert!(matches!(result, Err(AllocateError::InvalidLayout { .. })));
    }

    #[test]
    fn sample_view_covers_the_whole_allocation() {
        let mut alloc = allocate_complex_buffer(32).unwrap();
        let samples = complex_samples_mut(&mut alloc);
        assert_eq!(samples.len(), 32);
        samples.fill(Complex64::new(1.0, -1.0));
        assert_eq!(samples[31], Complex64::new(1.0, -1.0));
    }
}
