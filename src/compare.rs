//! Recursive structural-equality comparator.
//!
//! Two regimes share one walk: strict comparison requires identical type
//! and value at every leaf, loose comparison applies the host's coercive
//! equality rules. Both short-circuit at the first mismatch.

use crate::value::Value;

/// Compare two arrays element-wise in index order.
///
/// Lengths must match. Object pairs and array pairs recurse; every other
/// pairing is compared as leaves under the selected regime.
pub fn compare_arrays(expected: &[Value], actual: &[Value], strict: bool) -> bool {
    if expected.len() != actual.len() {
        return false;
    }
    for (expected_value, actual_value) in expected.iter().zip(actual) {
        let matched = match (expected_value, actual_value) {
            (Value::Object(e), Value::Object(a)) => compare_objects(e, a, strict),
            (Value::Array(e), Value::Array(a)) => compare_arrays(e, a, strict),
            _ => leaf_eq(expected_value, actual_value, strict),
        };
        if !matched {
            return false;
        }
    }
    true
}

/// Compare two objects by walking both own-key lists in index order.
///
/// Key comparison is positional: `expected_keys[i]` against
/// `actual_keys[i]`, not a set comparison. Two objects holding the same
/// entries in different enumeration order do not compare equal.
pub fn compare_objects(
    expected: &[(String, Value)],
    actual: &[(String, Value)],
    strict: bool,
) -> bool {
    if expected.len() != actual.len() {
        return false;
    }
    for ((expected_key, expected_value), (actual_key, actual_value)) in
        expected.iter().zip(actual)
    {
        // Keys are strings on both sides, so the strict and loose key
        // comparisons coincide.
        if expected_key != actual_key {
            return false;
        }
        let matched = match (expected_value, actual_value) {
            (Value::Object(e), Value::Object(a)) => compare_objects(e, a, strict),
            (Value::Array(e), Value::Array(a)) => compare_arrays(e, a, strict),
            _ => leaf_eq(expected_value, actual_value, strict),
        };
        if !matched {
            return false;
        }
    }
    true
}

/// Top-level dispatch shared by `toEqual` and `toStrictEqual`: array pairs
/// and object pairs compare structurally, everything else as leaves.
pub fn equals(expected: &Value, actual: &Value, strict: bool) -> bool {
    match (expected, actual) {
        (Value::Array(e), Value::Array(a)) => compare_arrays(e, a, strict),
        (Value::Object(e), Value::Object(a)) => compare_objects(e, a, strict),
        _ => leaf_eq(expected, actual, strict),
    }
}

fn leaf_eq(a: &Value, b: &Value, strict: bool) -> bool {
    if strict {
        strict_eq(a, b)
    } else {
        loose_eq(a, b)
    }
}

/// Identity/type-exact equality. NaN never equals itself; composite
/// leaves are distinct handles and never strictly equal.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

/// Host coercive equality: `null` loosely equals `undefined`, numbers and
/// strings cross-coerce, booleans coerce to numbers, and composites
/// coerce through their primitive text form against primitives.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::String(_)) => *x == b.to_number(),
        (Value::String(_), Value::Number(y)) => a.to_number() == *y,
        (Value::Bool(_), _) => loose_eq(&Value::Number(a.to_number()), b),
        (_, Value::Bool(_)) => loose_eq(a, &Value::Number(b.to_number())),
        (Value::Array(_) | Value::Object(_), Value::Number(_) | Value::String(_)) => {
            loose_eq(&Value::String(a.to_text()), b)
        }
        (Value::Number(_) | Value::String(_), Value::Array(_) | Value::Object(_)) => {
            loose_eq(a, &Value::String(b.to_text()))
        }
        _ => false,
    }
}
