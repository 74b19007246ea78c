//! Layout conversion between host tables and the native interleaved format.
//!
//! The copy contract lives here and nowhere else: a host table is a flat
//! sequence `(re0, im0, re1, im1, ...)` visited in index order, which matches
//! the engine's buffer interleaving exactly. Marshaling goes through these
//! two routines so the layout coupling is enforced in one tested place.

use crate::error::PlanError;
use crate::value::Value;

/// Reads a host table as a flat interleaved sample sequence.
///
/// `position` is the table's 1-based argument position, used for error
/// reporting only.
///
/// # Errors
///
/// [`PlanError::TypeMismatch`] if any element is not numeric. Non-numeric
/// elements are never coerced to zero.
pub(crate) fn table_to_interleaved(
    table: &[Value],
    position: usize,
) -> Result<Vec<f64>, PlanError> {
    let mut samples = Vec::with_capacity(table.len());
    for element in table {
        samples.push(element.as_number().ok_or(PlanError::TypeMismatch {
            position,
            expected: "a table of numbers",
        })?);
    }
    Ok(samples)
}

/// Builds a fresh host table from interleaved output samples, applying the
/// scale factor to every element.
pub(crate) fn interleaved_to_table(samples: &[f64], scale: f64) -> Vec<Value> {
    samples
        .iter()
        .map(|value| Value::Number(value * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_in_preserves_index_order() {
        let table = vec![
            Value::Number(1.0),
            Value::Integer(2),
            Value::Number(-3.5),
            Value::Integer(4),
        ];
        let samples = table_to_interleaved(&table, 2).unwrap();
        assert_eq!(samples, vec![1.0, 2.0, -3.5, 4.0]);
    }

    #[test]
    fn non_numeric_element_aborts_the_copy() {
        let table = vec![Value::Number(1.0), Value::Table(vec![])];
        assert_eq!(
            table_to_interleaved(&table, 2),
            Err(PlanError::TypeMismatch {
                position: 2,
                expected: "a table of numbers"
            })
        );
    }

    #[test]
    fn copy_out_applies_the_scale_factor() {
        let table = interleaved_to_table(&[1.0, -2.0, 0.5], 2.0);
        let values: Vec<f64> = table.iter().map(|v| v.as_number().unwrap()).collect();
        assert_eq!(values, vec![2.0, -4.0, 1.0]);
    }

    #[test]
    fn empty_table_round_trips_empty() {
        assert!(table_to_interleaved(&[], 2).unwrap().is_empty());
        assert!(interleaved_to_table(&[], 1.0).is_empty());
    }
}
