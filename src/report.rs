//! Diagnostic reporter: renders assertion-failure messages.
//!
//! A failure message is three lines — the labeled expected and received
//! text (prefixed with `[Not] ` when the assertion was negated) and the
//! resolved call site:
//!
//! ```text
//! Expected: [1,2,3]
//! Received: [1,2]
//!    at /tests/demo.js:14
//! ```
//!
//! Coloring is presentational and orthogonal to content; it is off by
//! default so channel messages stay machine-readable, and can be enabled
//! explicitly or auto-detected from the terminal.

use std::io::IsTerminal;

use crate::modules::{CallSite, ModuleRegistry, UNRESOLVED_UNIT};

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Configuration for failure-message rendering.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Whether to use ANSI colors in rendered messages.
    pub colors_enabled: bool,
}

impl ReportConfig {
    /// Create a configuration with defaults (colors off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-detect colors from the terminal.
    pub fn auto() -> Self {
        Self {
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }
}

/// Renders failure messages for the matcher set.
#[derive(Debug, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ReportConfig::new())
    }

    /// Compose the three-line failure message.
    ///
    /// The call site's unit resolves through the module registry to a
    /// display path, falling back to an unresolved marker when absent.
    pub fn failure_message(
        &self,
        expected_label: &str,
        received_label: &str,
        negate: bool,
        site: CallSite,
        modules: &ModuleRegistry,
    ) -> String {
        let not_or_nada = if negate { "[Not] " } else { "" };
        let path = modules.resolve_url(site.unit).unwrap_or(UNRESOLVED_UNIT);
        let line = site.line;

        if self.config.colors_enabled {
            format!(
                "{RED}{BOLD}Expected: {RESET}{RED}{not_or_nada}{expected_label}{RESET}\n\
                 {YELLOW}{BOLD}Received: {RESET}{YELLOW}{not_or_nada}{received_label}{RESET}\n   \
                 at {GRAY}{path}:{line}{RESET}\n"
            )
        } else {
            format!(
                "Expected: {not_or_nada}{expected_label}\n\
                 Received: {not_or_nada}{received_label}\n   \
                 at {path}:{line}\n"
            )
        }
    }
}
