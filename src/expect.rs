//! Fluent `expect` wrapper over the matcher set.
//!
//! A [`Session`] is one isolated execution context: it owns the error
//! channel and the module registry backing diagnostics. `expect(...)`
//! builds the per-invocation holder; the terminal matcher methods route
//! through the same name-indexed callbacks an embedder would use, so
//! argument-count validation behaves identically on both paths.
//!
//! # Example
//!
//! ```rust,ignore
//! use veracity::Session;
//!
//! let mut session = Session::new();
//! session.expect(vec![1.into(), 2.into()]).to_equal(vec![1.into(), 2.into()])?;
//!
//! session.expect(false).not().to_be_true()?;
//! assert!(!session.channel().has_failure());
//! ```
//!
//! Assertion failures never raise; read the channel immediately after
//! each matcher call:
//!
//! ```rust,ignore
//! let passed = session.expect(1).to_equal(2)?;
//! if !passed {
//!     eprintln!("{}", session.channel().message().unwrap());
//! }
//! ```

use crate::channel::ErrorChannel;
use crate::error::UsageError;
use crate::matchers::{self, MatcherCtx};
use crate::modules::{CallSite, ModuleRegistry};
use crate::report::{ReportConfig, Reporter};
use crate::value::Value;

/// One isolated execution context: matcher dispatch plus the channel and
/// diagnostics state it writes to.
#[derive(Debug, Default)]
pub struct Session {
    modules: ModuleRegistry,
    channel: ErrorChannel,
    reporter: Reporter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an embedder-provided module registry.
    pub fn with_modules(modules: ModuleRegistry) -> Self {
        Self {
            modules,
            ..Self::default()
        }
    }

    /// Replace the reporter configuration.
    pub fn report_config(mut self, config: ReportConfig) -> Self {
        self.reporter = Reporter::new(config);
        self
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    pub fn modules_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.modules
    }

    /// The session's error channel. Read it immediately after each
    /// matcher call; a stale failure persists until the next failure.
    pub fn channel(&self) -> &ErrorChannel {
        &self.channel
    }

    /// Start an assertion on `value`, constructing its holder.
    pub fn expect(&mut self, value: impl Into<Value>) -> Expectation<'_> {
        let holder = Value::object(vec![("expected", value.into())]);
        Expectation {
            session: self,
            holder,
            site: CallSite::default(),
        }
    }

    /// Dispatch a matcher by its well-known name.
    ///
    /// This is the embedder surface: the holder is any object honoring
    /// the holder protocol, and `args` are the raw call arguments.
    pub fn invoke(
        &mut self,
        name: &str,
        holder: &Value,
        args: &[Value],
        site: CallSite,
    ) -> Result<bool, UsageError> {
        let matcher =
            matchers::lookup(name).ok_or_else(|| UsageError::UnknownMatcher(name.to_string()))?;
        let mut cx = MatcherCtx {
            channel: &mut self.channel,
            reporter: &self.reporter,
            modules: &self.modules,
        };
        matcher(holder, args, site, &mut cx)
    }
}

/// A single in-flight assertion: holder plus call-site token.
#[derive(Debug)]
pub struct Expectation<'s> {
    session: &'s mut Session,
    holder: Value,
    site: CallSite,
}

impl Expectation<'_> {
    /// Negation modifier: flips the outcome of the terminal matcher.
    pub fn not(mut self) -> Self {
        if let Value::Object(entries) = &mut self.holder {
            entries.push(("negate".to_string(), Value::Bool(true)));
        }
        self
    }

    /// Attach the call-site token captured at the `expect()` call.
    pub fn at(mut self, site: CallSite) -> Self {
        self.site = site;
        self
    }

    pub fn to_equal(self, actual: impl Into<Value>) -> Result<bool, UsageError> {
        let actual = actual.into();
        self.finish("toEqual", &[actual])
    }

    pub fn to_strict_equal(self, actual: impl Into<Value>) -> Result<bool, UsageError> {
        let actual = actual.into();
        self.finish("toStrictEqual", &[actual])
    }

    pub fn to_be_empty(self) -> Result<bool, UsageError> {
        self.finish("toBeEmpty", &[])
    }

    pub fn to_be_boolean(self) -> Result<bool, UsageError> {
        self.finish("toBeBoolean", &[])
    }

    pub fn to_be_true(self) -> Result<bool, UsageError> {
        self.finish("toBeTrue", &[])
    }

    pub fn to_be_false(self) -> Result<bool, UsageError> {
        self.finish("toBeFalse", &[])
    }

    pub fn to_be_array(self) -> Result<bool, UsageError> {
        self.finish("toBeArray", &[])
    }

    pub fn to_be_array_of_size(self, size: impl Into<Value>) -> Result<bool, UsageError> {
        let size = size.into();
        self.finish("toBeArrayOfSize", &[size])
    }

    pub fn to_be_object(self) -> Result<bool, UsageError> {
        self.finish("toBeObject", &[])
    }

    pub fn to_be_one_of(self, options: impl Into<Value>) -> Result<bool, UsageError> {
        let options = options.into();
        self.finish("toBeOneOf", &[options])
    }

    fn finish(self, name: &str, args: &[Value]) -> Result<bool, UsageError> {
        self.session.invoke(name, &self.holder, args, self.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{ModuleMetadata, UnitId};
    use serde_json::json;

    #[test]
    fn test_expect_passes() {
        let mut session = Session::new();
        let result = session
            .expect(Value::from(json!([1, 2, 3])))
            .to_equal(Value::from(json!([1, 2, 3])));
        assert_eq!(result, Ok(true));
        assert!(!session.channel().has_failure());
    }

    #[test]
    fn test_not_modifier_flips_result() {
        let mut session = Session::new();
        assert_eq!(session.expect(false).not().to_be_true(), Ok(true));
        assert_eq!(session.expect(true).not().to_be_true(), Ok(false));
    }

    #[test]
    fn test_failure_reaches_channel_with_site() {
        let mut session = Session::new();
        session.modules_mut().insert(
            UnitId(1),
            ModuleMetadata { url: "/spec/math.js".to_string() },
        );
        let result = session
            .expect(1)
            .at(CallSite::new(UnitId(1), 12))
            .to_equal(2);
        assert_eq!(result, Ok(false));
        let message = session.channel().message().unwrap();
        assert!(message.ends_with("   at /spec/math.js:12\n"));
    }

    #[test]
    fn test_invoke_unknown_matcher() {
        let mut session = Session::new();
        let holder = Value::object(vec![("expected", Value::from(1))]);
        let result = session.invoke("toBeShiny", &holder, &[], CallSite::default());
        assert_eq!(result, Err(UsageError::UnknownMatcher("toBeShiny".to_string())));
    }

    #[test]
    fn test_success_does_not_clear_stale_failure() {
        let mut session = Session::new();
        session.expect(1).to_equal(2).unwrap();
        let stale = session.channel().message().unwrap().to_string();
        session.expect(1).to_equal(1).unwrap();
        assert_eq!(session.channel().message(), Some(stale.as_str()));
    }
}
