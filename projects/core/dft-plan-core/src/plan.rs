//! Plan construction and native-resource accounting.
//!
//! A [`DftPlan`] captures everything the execute primitive needs ahead of
//! time: transform size, direction, the kernel chosen for that size and the
//! precomputed roots of unity. Plans are immutable after creation and may be
//! executed any number of times.

use core::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

use crate::complex::Complex64;
use crate::flags;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Forward transform (negative exponent sign).
    #[default]
    Forward,
    /// Backward (inverse, unnormalized) transform.
    Backward,
}

impl Direction {
    /// The persisted numeric encoding of this direction
    /// ([`flags::FORWARD`] / [`flags::BACKWARD`]).
    #[inline]
    pub const fn sign(self) -> i64 {
        match self {
            Direction::Forward => flags::FORWARD,
            Direction::Backward => flags::BACKWARD,
        }
    }

    /// Decodes a persisted sign value. Any negative value selects the forward
    /// transform, everything else the backward transform.
    #[inline]
    pub const fn from_sign(sign: i64) -> Self {
        if sign < 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Sign of the exponent in `e^(sign * 2*pi*i * k / n)`.
    #[inline]
    pub(crate) const fn exponent_sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }
}

/// Errors that can occur during plan construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlanCreateError {
    /// The scratch buffer holds zero samples; there is nothing to plan for.
    #[error("cannot plan a transform over an empty buffer")]
    EmptyBuffer,
}

/// Kernel selected at planning time for a given transform size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KernelStrategy {
    /// In-place iterative radix-2 butterflies; power-of-two sizes only.
    Radix2,
    /// Direct evaluation through a scratch buffer; any size.
    DirectDft,
}

static LIVE_PLANS: AtomicUsize = AtomicUsize::new(0);

/// Number of plans currently holding native resources.
///
/// Incremented on plan creation and decremented when a plan drops; a caller
/// that creates and discards plans in a loop should observe no net growth.
pub fn live_plan_count() -> usize {
    LIVE_PLANS.load(Ordering::Acquire)
}

/// A prepared, reusable 1D complex-to-complex transform.
///
/// Create with [`plan_dft_1d`], execute with
/// [`execute_dft`](crate::execute_dft) or
/// [`execute_dft_slice`](crate::execute_dft_slice).
#[derive(Debug)]
pub struct DftPlan {
    size: usize,
    direction: Direction,
    planner_flags: u32,
    strategy: KernelStrategy,
    /// `e^(sign * 2*pi*i * k / size)`; `size / 2` entries for the radix-2
    /// kernel, `size` entries for the direct kernel.
    twiddles: Vec<Complex64>,
}

/// Builds a plan for an in-place transform over `scratch`.
///
/// The transform size is `scratch.len()`. The scratch buffer exists to give
/// the planner the address and alignment the transform will later run
/// against; it carries no data, and planning rigor above
/// [`flags::ESTIMATE`] is permitted to overwrite its contents. Callers
/// typically free it immediately after planning.
///
/// `planner_flags` is a bitwise OR of the [`flags`] constants. The flags are
/// recorded verbatim on the plan; kernel selection itself depends only on the
/// transform size.
///
/// # Errors
///
/// [`PlanCreateError::EmptyBuffer`] if `scratch` is empty.
pub fn plan_dft_1d(
    scratch: &mut [Complex64],
    direction: Direction,
    planner_flags: u32,
) -> Result<DftPlan, PlanCreateError> {
    let size = scratch.len();
    if size == 0 {
        return Err(PlanCreateError::EmptyBuffer);
    }

    let (strategy, twiddle_count) = if size.is_power_of_two() {
        (KernelStrategy::Radix2, size / 2)
    } else {
        (KernelStrategy::DirectDft, size)
    };
    let twiddles = roots_of_unity(size, twiddle_count, direction.exponent_sign());

    LIVE_PLANS.fetch_add(1, Ordering::AcqRel);
    Ok(DftPlan {
        size,
        direction,
        planner_flags,
        strategy,
        twiddles,
    })
}

impl DftPlan {
    /// Number of complex samples this plan transforms.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Direction this plan was created with.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Planner flags recorded at creation, verbatim.
    #[inline]
    pub fn planner_flags(&self) -> u32 {
        self.planner_flags
    }

    #[inline]
    pub(crate) fn strategy(&self) -> KernelStrategy {
        self.strategy
    }

    #[inline]
    pub(crate) fn twiddles(&self) -> &[Complex64] {
        &self.twiddles
    }
}

impl Drop for DftPlan {
    fn drop(&mut self) {
        LIVE_PLANS.fetch_sub(1, Ordering::AcqRel);
    }
}

fn roots_of_unity(size: usize, count: usize, exponent_sign: f64) -> Vec<Complex64> {
    let step = exponent_sign * 2.0 * core::f64::consts::PI / (size as f64);
    (0..count)
        .map(|k| {
            let angle = step * (k as f64);
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn direction_encodings_are_stable() {
        assert_eq!(Direction::Forward.sign(), -1);
        assert_eq!(Direction::Backward.sign(), 1);
        assert_eq!(Direction::from_sign(-1), Direction::Forward);
        assert_eq!(Direction::from_sign(1), Direction::Backward);
    }

    #[test]
    fn empty_scratch_is_rejected() {
        let result = plan_dft_1d(&mut [], Direction::Forward, flags::ESTIMATE);
        assert_eq!(result.unwrap_err(), PlanCreateError::EmptyBuffer);
    }

    #[rstest]
    #[case(1, KernelStrategy::Radix2)]
    #[case(4, KernelStrategy::Radix2)]
    #[case(1024, KernelStrategy::Radix2)]
    #[case(3, KernelStrategy::DirectDft)]
    #[case(12, KernelStrategy::DirectDft)]
    fn kernel_selection_is_size_driven(#[case] size: usize, #[case] expected: KernelStrategy) {
        let mut scratch = vec![Complex64::ZERO; size];
        let plan = plan_dft_1d(&mut scratch, Direction::Forward, flags::ESTIMATE).unwrap();
        assert_eq!(plan.strategy(), expected);
        assert_eq!(plan.size(), size);
    }

    #[test]
    fn planner_flags_are_recorded_verbatim() {
        let mut scratch = vec![Complex64::ZERO; 8];
        let requested = flags::MEASURE | flags::PRESERVE_INPUT | flags::UNALIGNED;
        let plan = plan_dft_1d(&mut scratch, Direction::Backward, requested).unwrap();
        assert_eq!(plan.planner_flags(), requested);
        assert_eq!(plan.direction(), Direction::Backward);
    }

    #[test]
    fn forward_twiddles_rotate_clockwise() {
        let mut scratch = vec![Complex64::ZERO; 4];
        let plan = plan_dft_1d(&mut scratch, Direction::Forward, flags::ESTIMATE).unwrap();
        // k = 1 of 4: e^(-2*pi*i / 4) = -i
        let w = plan.twiddles()[1];
        assert!(w.re.abs() < 1e-12);
        assert!((w.im + 1.0).abs() < 1e-12);
    }
}
