//! The host-side value model.
//!
//! An embedding host hands the binding a list of dynamically typed positional
//! arguments. [`Value`] is the narrow interface this crate needs from the
//! host's value system: numbers, ordered tables, and opaque plan handles.
//! Tables are index-ordered by construction, so the copy order of their
//! elements is always well defined.

use crate::handle::PlanHandle;

/// A dynamically typed host value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integral number.
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// An ordered container of values, indexed from zero.
    Table(Vec<Value>),
    /// An opaque handle to a prepared transform plan.
    Plan(PlanHandle),
}

impl Value {
    /// Reads this value as an integer. Floating-point numbers truncate, the
    /// way the host's integer coercion does.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            Value::Number(value) => Some(*value as i64),
            _ => None,
        }
    }

    /// Reads this value as a floating-point number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(value) => Some(*value as f64),
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads this value as an ordered table.
    #[inline]
    pub fn as_table(&self) -> Option<&[Value]> {
        match self {
            Value::Table(values) => Some(values),
            _ => None,
        }
    }

    /// Reads this value as a plan handle.
    #[inline]
    pub fn as_plan(&self) -> Option<&PlanHandle> {
        match self {
            Value::Plan(handle) => Some(handle),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Table(values)
    }
}
