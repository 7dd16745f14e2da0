//! Holder protocol: extracting the per-invocation assertion context.
//!
//! The DSL wrapper builds one holder object per `expect(...)` call,
//! carrying the expected value and an optional negate flag. Matchers read
//! it exclusively through these two accessors.

use crate::error::UsageError;
use crate::value::Value;

fn property<'a>(holder: &'a Value, name: &str) -> Option<&'a Value> {
    match holder {
        Value::Object(entries) => entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value),
        _ => None,
    }
}

/// Read the negate flag. Absent means `false`; a present non-boolean
/// value is a usage error and aborts the enclosing assertion.
pub fn get_negate(holder: &Value) -> Result<bool, UsageError> {
    match property(holder, "negate") {
        None => Ok(false),
        Some(Value::Bool(negate)) => Ok(*negate),
        Some(_) => Err(UsageError::NegateNotBoolean),
    }
}

/// Read the expected value. Absent means `undefined`; any present value
/// is accepted without validation.
pub fn get_expected(holder: &Value) -> Value {
    property(holder, "expected")
        .cloned()
        .unwrap_or(Value::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_defaults_to_false() {
        let holder = Value::object(vec![("expected", Value::Number(1.0))]);
        assert_eq!(get_negate(&holder), Ok(false));
    }

    #[test]
    fn test_negate_reads_boolean() {
        let holder = Value::object(vec![("negate", Value::Bool(true))]);
        assert_eq!(get_negate(&holder), Ok(true));
    }

    #[test]
    fn test_negate_rejects_non_boolean() {
        let holder = Value::object(vec![("negate", Value::Number(1.0))]);
        assert_eq!(get_negate(&holder), Err(UsageError::NegateNotBoolean));
    }

    #[test]
    fn test_expected_defaults_to_undefined() {
        let holder = Value::object::<&str>(vec![]);
        assert_eq!(get_expected(&holder), Value::Undefined);
    }

    #[test]
    fn test_expected_accepts_any_value() {
        let holder = Value::object(vec![("expected", Value::Null)]);
        assert_eq!(get_expected(&holder), Value::Null);
    }
}
