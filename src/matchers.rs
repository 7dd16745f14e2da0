//! The matcher set behind the `expect(value).matcher(...)` DSL.
//!
//! Every matcher follows one contract: validate argument count (a usage
//! error, independent of negate), compute the raw predicate, XOR with the
//! holder's negate flag, and return the final boolean. On a false final
//! result the matcher renders labeled expected/received text through the
//! reporter and records it on the caller-owned error channel; assertion
//! failures are never raised as errors.
//!
//! Matchers are exposed both as plain functions and through a
//! name-indexed registry for embedders that dispatch dynamically.

use crate::channel::ErrorChannel;
use crate::compare::equals;
use crate::error::UsageError;
use crate::holder::{get_expected, get_negate};
use crate::modules::{CallSite, ModuleRegistry};
use crate::report::Reporter;
use crate::value::Value;

/// Diagnostic context threaded through every matcher call: the execution
/// context's channel plus what the reporter needs to render a failure.
pub struct MatcherCtx<'a> {
    pub channel: &'a mut ErrorChannel,
    pub reporter: &'a Reporter,
    pub modules: &'a ModuleRegistry,
}

/// Signature shared by every matcher callback.
pub type MatcherFn =
    fn(&Value, &[Value], CallSite, &mut MatcherCtx<'_>) -> Result<bool, UsageError>;

/// Registry of matcher callbacks by their well-known names.
pub const MATCHERS: &[(&str, MatcherFn)] = &[
    ("toEqual", to_equal),
    ("toStrictEqual", to_strict_equal),
    ("toBeEmpty", to_be_empty),
    ("toBeBoolean", to_be_boolean),
    ("toBeTrue", to_be_true),
    ("toBeFalse", to_be_false),
    ("toBeArray", to_be_array),
    ("toBeArrayOfSize", to_be_array_of_size),
    ("toBeObject", to_be_object),
    ("toBeOneOf", to_be_one_of),
];

/// Look up a matcher callback by name.
pub fn lookup(name: &str) -> Option<MatcherFn> {
    MATCHERS
        .iter()
        .find(|(matcher_name, _)| *matcher_name == name)
        .map(|(_, f)| *f)
}

/// The first call argument, or `undefined` when none was supplied.
fn call_arg(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Undefined)
}

fn record_failure(
    cx: &mut MatcherCtx<'_>,
    site: CallSite,
    negate: bool,
    expected_label: &str,
    received_label: &str,
) {
    let message =
        cx.reporter
            .failure_message(expected_label, received_label, negate, site, cx.modules);
    cx.channel.record(false, message);
}

/// Loose structural equality against the call argument.
pub fn to_equal(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    equality_matcher(holder, args, site, cx, false)
}

/// Strict structural equality against the call argument.
pub fn to_strict_equal(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    equality_matcher(holder, args, site, cx, true)
}

fn equality_matcher(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
    strict: bool,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    if args.len() > 1 {
        return Err(UsageError::TooManyArguments);
    }

    let expected = get_expected(holder);
    let actual = call_arg(args);

    let result = equals(&expected, &actual, strict) != negate;
    if !result {
        record_failure(cx, site, negate, &expected.stringify(), &actual.stringify());
    }
    Ok(result)
}

/// The expected value is one of the empty shapes: `undefined`, `null`,
/// either boolean, the empty string, an empty array, or an object with no
/// own keys.
pub fn to_be_empty(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let raw = match &expected {
        Value::Undefined | Value::Null | Value::Bool(_) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Number(_) => false,
    };

    let result = raw != negate;
    if !result {
        let received = call_arg(args);
        record_failure(cx, site, negate, &expected.stringify(), &received.stringify());
    }
    Ok(result)
}

/// The expected value is a boolean.
pub fn to_be_boolean(
    holder: &Value,
    _args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let result = expected.is_boolean() != negate;
    if !result {
        record_failure(cx, site, negate, "boolean", expected.type_of());
    }
    Ok(result)
}

/// The expected value is exactly `true`. Supplying any argument is a
/// usage error.
pub fn to_be_true(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    if !args.is_empty() {
        return Err(UsageError::NoArgumentsAllowed { matcher: "toBeTrue" });
    }

    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let result = expected.is_true() != negate;
    if !result {
        record_failure(cx, site, negate, "true", &expected.stringify());
    }
    Ok(result)
}

/// The expected value is exactly `false`.
pub fn to_be_false(
    holder: &Value,
    _args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let result = expected.is_false() != negate;
    if !result {
        record_failure(cx, site, negate, "false", &expected.stringify());
    }
    Ok(result)
}

/// The expected value is an array.
pub fn to_be_array(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let result = expected.is_array() != negate;
    if !result {
        let received = call_arg(args);
        record_failure(cx, site, negate, "Array", &received.stringify());
    }
    Ok(result)
}

/// The expected value is an array whose length equals the (numerically
/// coerced) call argument.
pub fn to_be_array_of_size(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    if args.len() != 1 {
        return Err(UsageError::ExactlyOneArgument { matcher: "toBeArrayOfSize" });
    }

    let negate = get_negate(holder)?;
    let expected = get_expected(holder);
    let actual = &args[0];

    let raw = match &expected {
        Value::Array(items) => items.len() as f64 == actual.to_number(),
        _ => false,
    };

    let result = raw != negate;
    if !result {
        let expected_label = format!("Array of size {}", to_integer(actual.to_number()));
        let received_label = match &expected {
            Value::Array(items) => format!("Array of size {}", items.len()),
            other => other.stringify(),
        };
        record_failure(cx, site, negate, &expected_label, &received_label);
    }
    Ok(result)
}

/// The expected value is an object (and not an array).
pub fn to_be_object(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    let negate = get_negate(holder)?;
    let expected = get_expected(holder);

    let result = expected.is_object() != negate;
    if !result {
        let received = call_arg(args);
        record_failure(cx, site, negate, "Object", &received.stringify());
    }
    Ok(result)
}

/// The call argument is an array containing an element strictly equal to
/// the expected value. Loose membership does not pass.
pub fn to_be_one_of(
    holder: &Value,
    args: &[Value],
    site: CallSite,
    cx: &mut MatcherCtx<'_>,
) -> Result<bool, UsageError> {
    if args.len() != 1 {
        return Err(UsageError::ExactlyOneArgument { matcher: "toBeOneOf" });
    }

    let negate = get_negate(holder)?;
    let expected = get_expected(holder);
    let actual = &args[0];

    let raw = match actual {
        Value::Array(items) => items.iter().any(|item| equals(item, &expected, true)),
        _ => false,
    };

    let result = raw != negate;
    if !result {
        let expected_label = format!("To have {}", expected.stringify());
        record_failure(cx, site, negate, &expected_label, &actual.stringify());
    }
    Ok(result)
}

/// Host `ToInteger`: NaN maps to 0, everything else truncates.
fn to_integer(n: f64) -> i64 {
    if n.is_nan() {
        0
    } else {
        n.trunc() as i64
    }
}
