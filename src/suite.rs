//! Declarative assertion suites loaded from YAML.
//!
//! A suite file names a list of cases, each carrying an expected value,
//! a matcher name, optional call arguments, and an optional negate flag:
//!
//! ```yaml
//! name: array basics
//! cases:
//!   - name: equal arrays
//!     expected: [1, 2, 3]
//!     matcher: toEqual
//!     args: [[1, 2, 3]]
//!   - name: not empty
//!     expected: [1]
//!     matcher: toBeEmpty
//!     negate: true
//! ```
//!
//! The runner dispatches each case through the session's matcher
//! registry and reads the error channel immediately after the call.
//! Usage errors (unknown matcher, wrong argument count, malformed
//! negate) abort the run; assertion failures are collected as results.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::expect::Session;
use crate::modules::CallSite;
use crate::value::Value;

/// A suite loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct Suite {
    pub name: String,
    pub cases: Vec<Case>,
    /// Source path, recorded at load time for diagnostics.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// A single assertion case.
#[derive(Debug, Deserialize)]
pub struct Case {
    pub name: String,
    /// Absent means the assertion runs against `undefined`.
    #[serde(default)]
    pub expected: Option<serde_json::Value>,
    pub matcher: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    #[serde(default)]
    pub negate: bool,
}

/// Outcome of one case.
#[derive(Debug)]
pub enum CaseResult {
    Pass,
    Fail { reason: String },
}

impl CaseResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseResult::Pass)
    }
}

/// Load a suite from a YAML file.
pub fn load_suite(path: &Path) -> Result<Suite> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suite file: {:?}", path))?;
    let mut suite: Suite = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse suite file: {:?}", path))?;
    suite.path = Some(path.to_path_buf());
    Ok(suite)
}

/// Run every case in order, reading the channel after each matcher call.
///
/// Diagnostics use the suite's source path as the module URL and the
/// case's 1-based position in place of a source line.
pub fn run_suite(suite: &Suite, session: &mut Session) -> Result<Vec<(String, CaseResult)>> {
    let unit = suite
        .path
        .as_ref()
        .map(|path| session.modules_mut().register(path.display().to_string()));

    let mut results = Vec::with_capacity(suite.cases.len());
    for (index, case) in suite.cases.iter().enumerate() {
        let site = unit
            .map(|unit| CallSite::new(unit, index as u32 + 1))
            .unwrap_or_default();

        let holder = build_holder(case);
        let args: Vec<Value> = case.args.iter().cloned().map(Value::from).collect();

        let passed = session
            .invoke(&case.matcher, &holder, &args, site)
            .with_context(|| format!("case `{}` in suite `{}`", case.name, suite.name))?;

        let result = if passed {
            CaseResult::Pass
        } else {
            CaseResult::Fail {
                reason: session
                    .channel()
                    .message()
                    .unwrap_or_default()
                    .to_string(),
            }
        };
        results.push((format_case_description(case), result));
    }
    Ok(results)
}

fn build_holder(case: &Case) -> Value {
    let mut entries = Vec::new();
    if let Some(expected) = &case.expected {
        entries.push(("expected".to_string(), Value::from(expected.clone())));
    }
    if case.negate {
        entries.push(("negate".to_string(), Value::Bool(true)));
    }
    Value::Object(entries)
}

fn format_case_description(case: &Case) -> String {
    if case.negate {
        format!("{}: not {}", case.name, case.matcher)
    } else {
        format!("{}: {}", case.name, case.matcher)
    }
}
