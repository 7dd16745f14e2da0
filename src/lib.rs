//! # veracity
//!
//! A structural assertion and matcher engine with a Jest-style `expect` API.
//!
//! The engine performs recursive, dynamically-typed structural comparison
//! under two equality regimes (loose/coercive and strict), composes a
//! negation modifier across the whole matcher set, and renders
//! human-readable diagnostics that point back at the originating call
//! site. Assertion failures never raise: a failing matcher records its
//! status and message on a caller-owned error channel, so a failed
//! expectation does not interrupt the statements that follow it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veracity::{Session, Value};
//! use serde_json::json;
//!
//! let mut session = Session::new();
//!
//! session.expect(Value::from(json!([1, 2, 3])))
//!     .to_equal(Value::from(json!([1, 2, 3])))?;
//!
//! session.expect(false).not().to_be_true()?;
//!
//! assert!(!session.channel().has_failure());
//! ```
//!
//! ## Reading failures
//!
//! ```rust,ignore
//! let passed = session.expect(1).to_equal(2)?;
//! if !passed {
//!     // Read immediately: the channel is never cleared on success, so a
//!     // stale failure persists until the next failure overwrites it.
//!     eprintln!("{}", session.channel().message().unwrap());
//! }
//! ```
//!
//! ## Embedding
//!
//! Runtimes that dispatch matchers dynamically address them by name
//! through [`Session::invoke`] and read the channel through its
//! well-known slot identifiers (`"error"`, `"errorStr"`). Call-site
//! diagnostics resolve through a [`ModuleRegistry`] owned by the
//! embedder's module system.

pub mod channel;
pub mod compare;
pub mod error;
pub mod expect;
pub mod holder;
pub mod matchers;
pub mod modules;
pub mod report;
pub mod value;

#[cfg(feature = "yaml")]
pub mod suite;

// Core types
pub use channel::{ErrorChannel, ERROR_SLOT, ERROR_STR_SLOT};
pub use error::UsageError;
pub use value::Value;

// Comparator
pub use compare::{compare_arrays, compare_objects, equals};

// Matcher dispatch
pub use matchers::{lookup, MatcherCtx, MatcherFn, MATCHERS};

// Diagnostics
pub use modules::{CallSite, ModuleMetadata, ModuleRegistry, UnitId};
pub use report::{ReportConfig, Reporter};

// Fluent DSL
pub use expect::{Expectation, Session};

// Suites (feature-gated)
#[cfg(feature = "yaml")]
pub use suite::{load_suite, run_suite, Case, CaseResult, Suite};
