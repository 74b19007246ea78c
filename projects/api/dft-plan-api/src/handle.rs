//! Plan handle lifecycle management.
//!
//! A [`PlanHandle`] is the opaque value the host holds between calls. Clones
//! share one underlying plan, mirroring reference semantics in a
//! garbage-collected host: the native plan is released exactly once, when the
//! last clone drops or on an explicit [`release`](PlanHandle::release). A
//! released handle stays safe to touch; every operation on it reports
//! [`PlanError::InvalidHandle`] instead of reaching freed state.

use std::sync::{Arc, Mutex, MutexGuard};

use dft_plan_core::allocate::{allocate_complex_buffer, complex_samples_mut};
use dft_plan_core::{Complex64, DftPlan, Direction, execute_dft};

use crate::error::PlanError;

/// Opaque, shareable handle to a prepared transform plan.
///
/// The interior mutex serializes executes on a shared plan: the engine's
/// execute primitive is not reentrant for concurrent callers on the same plan
/// object, so a handle cloned across threads still drives it one call at a
/// time.
#[derive(Debug, Clone)]
pub struct PlanHandle {
    /// `Some` while the plan is live, `None` once released.
    inner: Arc<Mutex<Option<DftPlan>>>,
}

impl PartialEq for PlanHandle {
    /// Handles compare by identity: two handles are equal only when they
    /// share the same underlying plan slot, matching the reference
    /// semantics of clones.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PlanHandle {
    pub(crate) fn new(plan: DftPlan) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(plan))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<DftPlan>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            // A panic mid-execute leaves no partial plan state; the slot is
            // still either live or released.
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Number of complex samples the plan transforms.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidHandle`] if the handle was released.
    pub fn size(&self) -> Result<usize, PlanError> {
        self.lock()
            .as_ref()
            .map(DftPlan::size)
            .ok_or(PlanError::InvalidHandle)
    }

    /// Direction the plan was created with.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidHandle`] if the handle was released.
    pub fn direction(&self) -> Result<Direction, PlanError> {
        self.lock()
            .as_ref()
            .map(DftPlan::direction)
            .ok_or(PlanError::InvalidHandle)
    }

    /// Whether [`release`](Self::release) already ran (or the plan slot was
    /// otherwise emptied).
    pub fn is_released(&self) -> bool {
        self.lock().is_none()
    }

    /// Releases the native plan ahead of the last clone dropping.
    ///
    /// Idempotent; affects every clone sharing this plan. Subsequent
    /// operations on any of them report [`PlanError::InvalidHandle`].
    pub fn release(&self) {
        self.lock().take();
    }

    /// Executes the plan against interleaved `(re, im)` input samples.
    ///
    /// Copies the input into a freshly allocated aligned native buffer, runs
    /// the transform in place, and returns a new output vector of the same
    /// length with every element multiplied by `scale`. The input is never
    /// mutated and the plan stays valid for further calls. The native buffer
    /// is released on every exit path.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidHandle`] if the handle was released
    /// - [`PlanError::InvalidSize`] if the plan reports a zero size
    ///   (unreachable by construction, reported rather than assumed)
    /// - [`PlanError::LengthMismatch`] if `input.len() != 2 * size`
    /// - [`PlanError::AllocationFailed`] if the native buffer cannot be
    ///   allocated
    pub fn execute_interleaved(&self, input: &[f64], scale: f64) -> Result<Vec<f64>, PlanError> {
        let guard = self.lock();
        let plan = guard.as_ref().ok_or(PlanError::InvalidHandle)?;

        if plan.size() == 0 {
            return Err(PlanError::InvalidSize(0));
        }
        let expected = plan.size() * 2;
        if input.len() != expected {
            return Err(PlanError::LengthMismatch {
                expected,
                actual: input.len(),
            });
        }

        let mut buffer = allocate_complex_buffer(plan.size())?;
        let samples = complex_samples_mut(&mut buffer);
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = Complex64::new(input[2 * i], input[2 * i + 1]);
        }

        // Safety: the buffer holds exactly plan.size() samples and is held
        // exclusively by this call.
        unsafe { execute_dft(plan, samples.as_mut_ptr() as *mut f64) };

        let mut output = Vec::with_capacity(expected);
        for sample in samples.iter() {
            output.push(sample.re * scale);
            output.push(sample.im * scale);
        }
        Ok(output)
    }
}
