use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of an activatable feature module (e.g. "chat", "auth").
///
/// Identifiers are opaque: equality is exact string match, case-sensitive,
/// with no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Allows HashMap<ModuleId, _> lookups keyed by &str.
impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether a module serves HTTP routes or is a backing service only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// Contributes externally visible endpoints.
    Routed,
    /// Backing service with no routes of its own (e.g. the database).
    Backend,
}

/// A module entry in the catalog: its identity, kind, and direct
/// prerequisites in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub id: ModuleId,
    pub kind: ModuleKind,
    pub deps: Vec<ModuleId>,
}

impl ModuleSpec {
    pub fn routed(id: impl Into<ModuleId>, deps: &[&str]) -> Self {
        Self {
            id: id.into(),
            kind: ModuleKind::Routed,
            deps: deps.iter().map(|d| ModuleId::from(*d)).collect(),
        }
    }

    pub fn backend(id: impl Into<ModuleId>, deps: &[&str]) -> Self {
        Self {
            id: id.into(),
            kind: ModuleKind::Backend,
            deps: deps.iter().map(|d| ModuleId::from(*d)).collect(),
        }
    }
}
