// src/resolver/diagnostics.rs
//
// Structured resolver diagnostics. Records, not strings: the host renders
// them as log fields, JSON, or text without parsing anything back out.

use crate::domain::ModuleId;
use serde::Serialize;
use thiserror::Error;

/// A module that entered the closure without being explicitly requested,
/// with the module that first pulled it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoAdded {
    pub module: ModuleId,
    pub required_by: ModuleId,
}

impl std::fmt::Display for AutoAdded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Auto-added dependency '{}' required by '{}'",
            self.module, self.required_by
        )
    }
}

/// A reason resolution failed. All errors reachable from a request are
/// collected before the caller is expected to abort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveError {
    /// A requested or transitively-required identifier has no catalog entry.
    #[error("Unknown module: '{module}'")]
    UnknownModule { module: ModuleId },

    /// A dependency edge closes back onto a module still being resolved.
    /// `path` runs from the first cycle member back to itself.
    #[error("Dependency cycle: {}", join_path(.path))]
    DependencyCycle { path: Vec<ModuleId> },
}

fn join_path(path: &[ModuleId]) -> String {
    path.iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_module_display() {
        let err = ResolveError::UnknownModule {
            module: ModuleId::from("ghost"),
        };
        assert_eq!(err.to_string(), "Unknown module: 'ghost'");
    }

    #[test]
    fn test_cycle_display() {
        let err = ResolveError::DependencyCycle {
            path: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "Dependency cycle: a -> b -> a");
    }

    #[test]
    fn test_auto_added_display() {
        let warning = AutoAdded {
            module: ModuleId::from("database"),
            required_by: ModuleId::from("auth"),
        };
        assert_eq!(
            warning.to_string(),
            "Auto-added dependency 'database' required by 'auth'"
        );
    }
}
