//! Dynamically-typed value model shared with the embedding runtime.
//!
//! `Value` is a tagged variant covering the host value space: `undefined`,
//! `null`, booleans, IEEE doubles, strings, ordered arrays, and objects
//! with ordered own keys. Matchers and the comparator pattern-match on the
//! discriminant; nothing in the engine probes types at runtime.
//!
//! Equality between values is never derived implicitly for assertion
//! purposes — every comparison goes through [`crate::compare`] or a
//! matcher predicate.

use serde_json::json;

/// Integral doubles up to 2^53 convert to `i64` without loss.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically-typed host value.
///
/// Object entries preserve the enumeration order produced by the
/// constructing side; there is no key deduplication or reordering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build an object value from `(key, value)` pairs, keeping their order.
    pub fn object<K: Into<String>>(entries: Vec<(K, Value)>) -> Self {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Host `typeof` semantics: `null`, arrays, and objects all report
    /// `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Numeric coercion following the host rules.
    ///
    /// `undefined` is NaN, `null` is 0, booleans are 0/1, strings are
    /// trimmed and parsed (empty parses to 0, garbage to NaN), and
    /// composites coerce through their primitive text form first.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            Value::Array(_) | Value::Object(_) => parse_number(&self.to_text()),
        }
    }

    /// Host `ToString` coercion.
    ///
    /// Arrays join their elements with `,` (null/undefined elements render
    /// empty), objects render as `[object Object]`, numbers use the host
    /// formatting (integral values print without a fraction), and strings
    /// pass through unquoted.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Serialize for diagnostic output.
    ///
    /// Arrays and objects render as structural JSON (undefined elements
    /// become `null`, object entries with undefined values are dropped);
    /// every other variant uses its host text form.
    pub fn stringify(&self) -> String {
        match self {
            Value::Array(_) | Value::Object(_) => {
                serde_json::to_string(&self.to_json()).unwrap_or_else(|_| self.to_text())
            }
            other => other.to_text(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => json!(b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => json!(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .filter(|(_, value)| !value.is_undefined())
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Host number formatting: integral values print without a fraction,
/// non-finite values print as `NaN` / `Infinity`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        return serde_json::Value::Null;
    }
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Value::from(n)
    }
}

/// Host string-to-number parse: leading/trailing whitespace ignored,
/// empty input is 0, hex literals accepted, anything else is NaN.
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Bool(true).type_of(), "boolean");
        assert_eq!(Value::Number(1.5).type_of(), "number");
        assert_eq!(Value::String("x".into()).type_of(), "string");
        assert_eq!(Value::Array(vec![]).type_of(), "object");
        assert_eq!(Value::Object(vec![]).type_of(), "object");
    }

    #[test]
    fn test_to_number_coercions() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Bool(true).to_number(), 1.0);
        assert_eq!(Value::String("  42 ".into()).to_number(), 42.0);
        assert_eq!(Value::String("".into()).to_number(), 0.0);
        assert_eq!(Value::String("0x10".into()).to_number(), 16.0);
        assert!(Value::String("nope".into()).to_number().is_nan());
    }

    #[test]
    fn test_composite_to_number_via_text() {
        assert_eq!(Value::Array(vec![Value::Number(5.0)]).to_number(), 5.0);
        assert_eq!(Value::Array(vec![]).to_number(), 0.0);
        assert!(Value::Object(vec![]).to_number().is_nan());
    }

    #[test]
    fn test_to_text_array_join() {
        let v = Value::Array(vec![
            Value::Number(1.0),
            Value::Null,
            Value::String("a".into()),
            Value::Undefined,
        ]);
        assert_eq!(v.to_text(), "1,,a,");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Value::Number(1.0).to_text(), "1");
        assert_eq!(Value::Number(1.5).to_text(), "1.5");
        assert_eq!(Value::Number(-0.0).to_text(), "0");
        assert_eq!(Value::Number(f64::NAN).to_text(), "NaN");
        assert_eq!(Value::Number(f64::INFINITY).to_text(), "Infinity");
    }

    #[test]
    fn test_stringify_leaves_are_unquoted() {
        assert_eq!(Value::String("hi".into()).stringify(), "hi");
        assert_eq!(Value::Undefined.stringify(), "undefined");
        assert_eq!(Value::Bool(false).stringify(), "false");
    }

    #[test]
    fn test_stringify_composites_are_json() {
        let v = Value::from(json!([1, "a", {"b": 2}]));
        assert_eq!(v.stringify(), r#"[1,"a",{"b":2}]"#);
    }

    #[test]
    fn test_stringify_drops_undefined_object_entries() {
        let v = Value::object(vec![("a", Value::Undefined), ("b", Value::Number(1.0))]);
        assert_eq!(v.stringify(), r#"{"b":1}"#);
    }

    #[test]
    fn test_stringify_undefined_array_element_is_null() {
        let v = Value::Array(vec![Value::Undefined]);
        assert_eq!(v.stringify(), "[null]");
    }

    #[test]
    fn test_from_json_preserves_object_order() {
        let v = Value::from(json!({"z": 1, "a": 2}));
        match v {
            Value::Object(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["z", "a"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }
}
