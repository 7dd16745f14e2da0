//! Module metadata and call-site tokens for diagnostics.
//!
//! The embedding runtime owns a stable mapping from compiled-unit
//! identifiers to module URLs. The DSL wrapper captures a call-site token
//! (unit + line) at `expect()` time and passes it down explicitly; the
//! reporter resolves the unit against this registry when rendering a
//! failure. The mapping is never consulted by comparison logic.

use std::collections::HashMap;

/// Marker used when a call site's unit has no registered metadata.
pub const UNRESOLVED_UNIT: &str = "<unknown>";

/// Opaque identifier of a compiled unit (script/module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId(pub u32);

/// Per-unit metadata, owned by the module system.
#[derive(Debug, Clone)]
pub struct ModuleMetadata {
    pub url: String,
}

/// Mapping from compiled-unit identifier to module metadata.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    units: HashMap<UnitId, ModuleMetadata>,
    next_id: u32,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert metadata under an identifier chosen by the embedder.
    pub fn insert(&mut self, unit: UnitId, metadata: ModuleMetadata) {
        self.units.insert(unit, metadata);
    }

    /// Register a URL under a freshly allocated identifier.
    pub fn register(&mut self, url: impl Into<String>) -> UnitId {
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let unit = UnitId(self.next_id);
            if !self.units.contains_key(&unit) {
                self.units.insert(unit, ModuleMetadata { url: url.into() });
                return unit;
            }
        }
    }

    pub fn metadata(&self, unit: UnitId) -> Option<&ModuleMetadata> {
        self.units.get(&unit)
    }

    pub fn resolve_url(&self, unit: UnitId) -> Option<&str> {
        self.units.get(&unit).map(|m| m.url.as_str())
    }
}

/// Call-site token: the first stack frame above the matcher callback,
/// captured by the DSL wrapper at `expect()` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub unit: UnitId,
    pub line: u32,
}

impl CallSite {
    pub const fn new(unit: UnitId, line: u32) -> Self {
        Self { unit, line }
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::new(UnitId(0), 0)
    }
}
