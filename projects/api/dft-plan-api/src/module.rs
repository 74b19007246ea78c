//! The binding operations the embedding host registers and calls.
//!
//! Both operations take the host's raw positional argument list, marshal it
//! through [`crate::args`], and only then touch the engine. Any violation
//! aborts the call with a [`PlanError`] before native resources are acquired.

use dft_plan_core::allocate::{allocate_complex_buffer, complex_samples_mut};
use dft_plan_core::{Direction, flags, plan_dft_1d as engine_plan_dft_1d};

use crate::args::{check_arity, expect_integer, expect_number, expect_plan, expect_table};
use crate::convert::{interleaved_to_table, table_to_interleaved};
use crate::error::PlanError;
use crate::handle::PlanHandle;
use crate::value::Value;

/// Creates a plan for a 1D complex-to-complex transform.
///
/// Positional arguments: `(size, [direction = FORWARD], [flags = ESTIMATE])`.
/// `size` is the number of complex samples; `direction` and `flags` use the
/// engine's native numeric encodings (see [`module_constants`]).
///
/// A scratch buffer of `size` complex samples is allocated so the planner
/// sees the address and alignment class the transform will run against, then
/// dropped before returning; it carries no data.
///
/// # Errors
///
/// - [`PlanError::TooManyArguments`] for more than 3 arguments
/// - [`PlanError::MissingArgument`] / [`PlanError::TypeMismatch`] from
///   marshaling
/// - [`PlanError::InvalidSize`] if `size <= 0`
/// - [`PlanError::AllocationFailed`] if the scratch buffer cannot be
///   allocated
pub fn plan_dft_1d(args: &[Value]) -> Result<PlanHandle, PlanError> {
    check_arity(args, 3)?;
    let size = expect_integer(args, 1, None)?;
    let sign = expect_integer(args, 2, Some(flags::FORWARD))?;
    let planner_flags = expect_integer(args, 3, Some(flags::ESTIMATE as i64))?;

    if size <= 0 {
        return Err(PlanError::InvalidSize(size));
    }
    let num_samples = size as usize;

    let mut scratch = allocate_complex_buffer(num_samples)?;
    let plan = engine_plan_dft_1d(
        complex_samples_mut(&mut scratch),
        Direction::from_sign(sign),
        planner_flags as u32,
    )
    // Size was validated above; report rather than assume if the engine
    // still refuses.
    .map_err(|_| PlanError::InvalidSize(size))?;

    Ok(PlanHandle::new(plan))
}

/// Executes a plan against an interleaved input table.
///
/// Positional arguments: `(plan, input, [scale = 1.0])`. `input` must hold
/// exactly `2 * size` numbers, interleaved `(re0, im0, re1, im1, ...)` in
/// index order. Returns a freshly built table of the same length with every
/// element multiplied by `scale`; the input table and the plan are left
/// untouched, and the plan may be executed again.
///
/// # Errors
///
/// - [`PlanError::TooManyArguments`] for more than 3 arguments
/// - [`PlanError::MissingArgument`] / [`PlanError::TypeMismatch`] from
///   marshaling (including non-numeric table elements)
/// - [`PlanError::InvalidHandle`] if the plan was released
/// - [`PlanError::LengthMismatch`] if the input length is not exactly
///   `2 * size`
/// - [`PlanError::AllocationFailed`] if the native buffer cannot be
///   allocated
pub fn execute_dft(args: &[Value]) -> Result<Vec<Value>, PlanError> {
    check_arity(args, 3)?;
    let handle = expect_plan(args, 1)?;
    let input = expect_table(args, 2)?;
    let scale = expect_number(args, 3, Some(1.0))?;

    // Checked before the element copy so a length mismatch reports as such
    // rather than as a buffer error further down.
    let expected = handle.size()? * 2;
    if input.len() != expected {
        return Err(PlanError::LengthMismatch {
            expected,
            actual: input.len(),
        });
    }

    let samples = table_to_interleaved(input, 2)?;
    let output = handle.execute_interleaved(&samples, 1.0)?;
    Ok(interleaved_to_table(&output, scale))
}

/// Constant name/value pairs for the host's registration glue.
///
/// The values are the engine's native numeric encodings and must reach the
/// host unchanged; hosts persist them and pass them back across calls.
pub fn module_constants() -> [(&'static str, i64); 10] {
    [
        // Transform sign/direction
        ("FORWARD", flags::FORWARD),
        ("BACKWARD", flags::BACKWARD),
        // Planning-rigor flags
        ("ESTIMATE", flags::ESTIMATE as i64),
        ("MEASURE", flags::MEASURE as i64),
        ("PATIENT", flags::PATIENT as i64),
        ("EXHAUSTIVE", flags::EXHAUSTIVE as i64),
        ("WISDOM_ONLY", flags::WISDOM_ONLY as i64),
        // Algorithm-restriction flags
        ("DESTROY_INPUT", flags::DESTROY_INPUT as i64),
        ("PRESERVE_INPUT", flags::PRESERVE_INPUT as i64),
        ("UNALIGNED", flags::UNALIGNED as i64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_excess_arguments() {
        let args = vec![
            Value::Integer(8),
            Value::Integer(flags::FORWARD),
            Value::Integer(flags::ESTIMATE as i64),
            Value::Integer(0),
        ];
        assert_eq!(
            plan_dft_1d(&args).unwrap_err(),
            PlanError::TooManyArguments { max: 3, actual: 4 }
        );
    }

    #[test]
    fn create_requires_a_size() {
        assert_eq!(
            plan_dft_1d(&[]).unwrap_err(),
            PlanError::MissingArgument { position: 1 }
        );
    }

    #[test]
    fn create_defaults_to_forward_estimate() {
        let handle = plan_dft_1d(&[Value::Integer(8)]).unwrap();
        assert_eq!(handle.size(), Ok(8));
        assert_eq!(handle.direction(), Ok(Direction::Forward));
    }

    #[test]
    fn create_honors_the_backward_sign() {
        let args = vec![Value::Integer(8), Value::Integer(flags::BACKWARD)];
        let handle = plan_dft_1d(&args).unwrap();
        assert_eq!(handle.direction(), Ok(Direction::Backward));
    }

    #[test]
    fn zero_and_negative_sizes_are_invalid() {
        assert_eq!(
            plan_dft_1d(&[Value::Integer(0)]).unwrap_err(),
            PlanError::InvalidSize(0)
        );
        assert_eq!(
            plan_dft_1d(&[Value::Integer(-16)]).unwrap_err(),
            PlanError::InvalidSize(-16)
        );
    }

    #[test]
    fn execute_requires_a_plan_handle_first() {
        let args = vec![Value::Integer(1), Value::Table(vec![])];
        assert_eq!(
            execute_dft(&args).unwrap_err(),
            PlanError::TypeMismatch {
                position: 1,
                expected: "a transform plan"
            }
        );
    }

    #[test]
    fn execute_rejects_released_plans() {
        let handle = plan_dft_1d(&[Value::Integer(2)]).unwrap();
        handle.release();
        let args = vec![
            Value::Plan(handle),
            Value::Table(vec![Value::Number(0.0); 4]),
        ];
        assert_eq!(execute_dft(&args).unwrap_err(), PlanError::InvalidHandle);
    }

    #[test]
    fn constants_keep_native_encodings() {
        let constants = module_constants();
        let lookup = |name: &str| {
            constants
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
                .unwrap()
        };
        assert_eq!(lookup("FORWARD"), -1);
        assert_eq!(lookup("BACKWARD"), 1);
        assert_eq!(lookup("MEASURE"), 0);
        assert_eq!(lookup("ESTIMATE"), 64);
        assert_eq!(lookup("WISDOM_ONLY"), 1 << 21);
        assert_eq!(lookup("PRESERVE_INPUT"), 16);
    }
}
