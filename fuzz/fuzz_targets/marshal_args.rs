#![no_main]

// This fuzz test drives both binding operations with arbitrary positional
// argument lists. Every outcome must be a clean Ok/Err; the marshaling layer
// must never panic, whatever the host throws at it.

use dft_plan_api::{Value, execute_dft, plan_dft_1d};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub enum FuzzValue {
    Integer(i64),
    Number(f64),
    Table(Vec<f64>),
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzCall {
    pub args: Vec<FuzzValue>,
    pub with_valid_plan: bool,
}

fn to_value(fuzz: &FuzzValue) -> Value {
    match fuzz {
        // Bound plan sizes so the allocation path is exercised without the
        // fuzzer tripping its own memory limit.
        FuzzValue::Integer(value) => Value::Integer(value % (1 << 20)),
        FuzzValue::Number(value) => Value::Number(*value),
        FuzzValue::Table(values) => {
            Value::Table(values.iter().map(|v| Value::Number(*v)).collect())
        }
    }
}

fuzz_target!(|call: FuzzCall| {
    let mut args: Vec<Value> = call.args.iter().map(to_value).collect();

    let _ = plan_dft_1d(&args);

    if call.with_valid_plan {
        // A live handle in slot 1 reaches the execute validation ladder.
        if let Ok(handle) = plan_dft_1d(&[Value::Integer(4)]) {
            args.insert(0, Value::Plan(handle));
        }
    }
    let _ = execute_dft(&args);
});
