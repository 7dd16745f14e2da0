//! Out-of-band error channel consumed by the external test runner.
//!
//! The channel is an explicit, caller-owned result object: one instance
//! per execution context, written only by a failing matcher and never
//! cleared on success. A stale failure from an earlier assertion persists
//! until the next failure overwrites it, so consumers must read the
//! channel immediately after each matcher call.

use crate::value::Value;

/// Well-known slot identifier for the failure status.
pub const ERROR_SLOT: &str = "error";
/// Well-known slot identifier for the failure message.
pub const ERROR_STR_SLOT: &str = "errorStr";

/// Most recent assertion failure's status and message.
#[derive(Debug, Clone, Default)]
pub struct ErrorChannel {
    failed: Option<bool>,
    message: Option<String>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed assertion: the (false) final matcher result and the
    /// rendered diagnostic message.
    pub fn record(&mut self, result: bool, message: String) {
        self.failed = Some(result);
        self.message = Some(message);
    }

    /// Whether any failure has been recorded since the channel was created.
    pub fn has_failure(&self) -> bool {
        self.failed.is_some()
    }

    /// The recorded matcher result, if a failure has been recorded.
    pub fn failed(&self) -> Option<bool> {
        self.failed
    }

    /// The recorded diagnostic message, if a failure has been recorded.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Slot view for embedders addressing the channel by its well-known
    /// identifiers. Untouched slots read as `undefined`; unknown
    /// identifiers return `None`.
    pub fn slot(&self, name: &str) -> Option<Value> {
        match name {
            ERROR_SLOT => Some(
                self.failed
                    .map(Value::Bool)
                    .unwrap_or(Value::Undefined),
            ),
            ERROR_STR_SLOT => Some(
                self.message
                    .clone()
                    .map(Value::String)
                    .unwrap_or(Value::Undefined),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_channel() {
        let channel = ErrorChannel::new();
        assert!(!channel.has_failure());
        assert_eq!(channel.slot(ERROR_SLOT), Some(Value::Undefined));
        assert_eq!(channel.slot(ERROR_STR_SLOT), Some(Value::Undefined));
        assert_eq!(channel.slot("other"), None);
    }

    #[test]
    fn test_record_failure() {
        let mut channel = ErrorChannel::new();
        channel.record(false, "Expected: 1\nReceived: 2\n".to_string());
        assert!(channel.has_failure());
        assert_eq!(channel.failed(), Some(false));
        assert_eq!(channel.slot(ERROR_SLOT), Some(Value::Bool(false)));
        assert!(matches!(channel.slot(ERROR_STR_SLOT), Some(Value::String(_))));
    }

    #[test]
    fn test_stale_failure_persists() {
        let mut channel = ErrorChannel::new();
        channel.record(false, "first".to_string());
        // A later passing assertion writes nothing; the first failure
        // remains visible until the next failure overwrites it.
        assert_eq!(channel.message(), Some("first"));
        channel.record(false, "second".to_string());
        assert_eq!(channel.message(), Some("second"));
    }
}
