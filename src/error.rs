//! Usage errors raised by the assertion engine.
//!
//! These represent incorrect test authoring (wrong argument count,
//! malformed holder), not assertion outcomes. They bubble to the caller
//! unmodified; assertion failures never appear here — those are reported
//! through the [`crate::channel::ErrorChannel`] only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Expected a boolean value for `negate` property")]
    NegateNotBoolean,

    #[error("Expected 1 argument")]
    TooManyArguments,

    #[error("{matcher}() requires no arguments")]
    NoArgumentsAllowed { matcher: &'static str },

    #[error("{matcher}() requires 1 argument")]
    ExactlyOneArgument { matcher: &'static str },

    #[error("unknown matcher `{0}`")]
    UnknownMatcher(String),
}
