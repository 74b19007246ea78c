//! Argument marshaling: typed extraction from untrusted positional argument
//! lists.
//!
//! Each validator is parameterized by a 1-based position and, for numeric
//! arguments, an optional default (`None` marks the argument required). All
//! validators are side-effect free: they either return a strongly typed value
//! or a [`PlanError`], and never allocate native resources. Callers check
//! arity first via [`check_arity`].

use crate::error::PlanError;
use crate::handle::PlanHandle;
use crate::value::Value;

/// Rejects calls carrying more positional arguments than the operation
/// accepts.
///
/// # Errors
///
/// [`PlanError::TooManyArguments`] if `args.len() > max`.
pub fn check_arity(args: &[Value], max: usize) -> Result<(), PlanError> {
    if args.len() > max {
        return Err(PlanError::TooManyArguments {
            max,
            actual: args.len(),
        });
    }
    Ok(())
}

#[inline]
fn arg_at(args: &[Value], position: usize) -> Option<&Value> {
    debug_assert!(position >= 1);
    args.get(position - 1)
}

/// Extracts an integer at `position`.
///
/// Absent arguments yield `default`, or [`PlanError::MissingArgument`] when
/// `default` is `None` (required).
///
/// # Errors
///
/// [`PlanError::TypeMismatch`] if the argument is present but not numeric.
pub fn expect_integer(
    args: &[Value],
    position: usize,
    default: Option<i64>,
) -> Result<i64, PlanError> {
    match arg_at(args, position) {
        Some(value) => value.as_integer().ok_or(PlanError::TypeMismatch {
            position,
            expected: "a number",
        }),
        None => default.ok_or(PlanError::MissingArgument { position }),
    }
}

/// Extracts a floating-point number at `position`; same contract as
/// [`expect_integer`].
///
/// # Errors
///
/// [`PlanError::TypeMismatch`] if the argument is present but not numeric.
pub fn expect_number(
    args: &[Value],
    position: usize,
    default: Option<f64>,
) -> Result<f64, PlanError> {
    match arg_at(args, position) {
        Some(value) => value.as_number().ok_or(PlanError::TypeMismatch {
            position,
            expected: "a number",
        }),
        None => default.ok_or(PlanError::MissingArgument { position }),
    }
}

/// Extracts a required ordered table at `position`.
///
/// Only the container kind is validated here; its length depends on the plan
/// size, which the caller learns from the handle argument.
///
/// # Errors
///
/// - [`PlanError::MissingArgument`] if the position is absent
/// - [`PlanError::TypeMismatch`] if the argument is not a table
pub fn expect_table(args: &[Value], position: usize) -> Result<&[Value], PlanError> {
    match arg_at(args, position) {
        Some(value) => value.as_table().ok_or(PlanError::TypeMismatch {
            position,
            expected: "a table",
        }),
        None => Err(PlanError::MissingArgument { position }),
    }
}

/// Extracts a required plan handle at `position`.
///
/// # Errors
///
/// - [`PlanError::MissingArgument`] if the position is absent
/// - [`PlanError::TypeMismatch`] if the argument is not a plan handle
pub fn expect_plan(args: &[Value], position: usize) -> Result<&PlanHandle, PlanError> {
    match arg_at(args, position) {
        Some(value) => value.as_plan().ok_or(PlanError::TypeMismatch {
            position,
            expected: "a transform plan",
        }),
        None => Err(PlanError::MissingArgument { position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn arity_counts_all_positional_arguments() {
        let args = vec![Value::Integer(1), Value::Integer(2)];
        assert!(check_arity(&args, 3).is_ok());
        assert!(check_arity(&args, 2).is_ok());
        assert_eq!(
            check_arity(&args, 1),
            Err(PlanError::TooManyArguments { max: 1, actual: 2 })
        );
    }

    #[test]
    fn required_integer_is_extracted_or_missing() {
        let args = vec![Value::Integer(64)];
        assert_eq!(expect_integer(&args, 1, None), Ok(64));
        assert_eq!(
            expect_integer(&args, 2, None),
            Err(PlanError::MissingArgument { position: 2 })
        );
    }

    #[test]
    fn optional_arguments_fall_back_to_defaults() {
        let args = vec![Value::Integer(64)];
        assert_eq!(expect_integer(&args, 2, Some(-1)), Ok(-1));
        assert_eq!(expect_number(&args, 3, Some(1.0)), Ok(1.0));
    }

    #[rstest]
    #[case(Value::Table(vec![]))]
    #[case(Value::Table(vec![Value::Integer(1)]))]
    fn non_numeric_argument_is_a_type_mismatch(#[case] arg: Value) {
        let args = vec![arg];
        assert_eq!(
            expect_integer(&args, 1, None),
            Err(PlanError::TypeMismatch {
                position: 1,
                expected: "a number"
            })
        );
        assert_eq!(
            expect_number(&args, 1, Some(0.0)),
            Err(PlanError::TypeMismatch {
                position: 1,
                expected: "a number"
            })
        );
    }

    #[test]
    fn table_validator_checks_kind_not_length() {
        let args = vec![Value::Table(vec![Value::Number(0.5)])];
        assert_eq!(expect_table(&args, 1).unwrap().len(), 1);
        assert_eq!(
            expect_table(&args, 2),
            Err(PlanError::MissingArgument { position: 2 })
        );

        let wrong = vec![Value::Integer(5)];
        assert_eq!(
            expect_table(&wrong, 1),
            Err(PlanError::TypeMismatch {
                position: 1,
                expected: "a table"
            })
        );
    }

    #[test]
    fn plan_validator_rejects_other_kinds() {
        let args = vec![Value::Number(1.0)];
        assert_eq!(
            expect_plan(&args, 1).unwrap_err(),
            PlanError::TypeMismatch {
                position: 1,
                expected: "a transform plan"
            }
        );
        assert_eq!(
            expect_plan(&args, 2).unwrap_err(),
            PlanError::MissingArgument { position: 2 }
        );
    }

    #[test]
    fn integer_coerces_float_arguments_by_truncation() {
        let args = vec![Value::Number(8.9)];
        assert_eq!(expect_integer(&args, 1, None), Ok(8));
    }
}
