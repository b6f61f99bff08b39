// src/resolver/resolve.rs
//
// Dependency closure over the module catalog.
//
// CRITICAL RULES:
// - Deterministic: same request + same catalog -> same result
// - Dependencies are emitted before their dependents (post-order per edge)
// - Sibling branches keep resolving after an error; everything is collected
// - Cycles are reported as errors, never silently absorbed

use std::collections::{HashMap, HashSet};

use crate::domain::ModuleId;
use crate::resolver::catalog::ModuleCatalog;
use crate::resolver::diagnostics::{AutoAdded, ResolveError};

/// Output of a resolution pass.
///
/// When `errors` is non-empty the whole resolution is failed: the caller must
/// not activate any module.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Dependency-closed, deduplicated activation list. Every module appears
    /// after all of its direct dependencies.
    pub modules: Vec<ModuleId>,

    /// One entry per module that entered the closure without being requested,
    /// in completion order.
    pub warnings: Vec<AutoAdded>,

    /// Every problem found anywhere in the traversal.
    pub errors: Vec<ResolveError>,
}

impl Resolution {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.as_str() == name)
    }

    /// Modules present in the closure but absent from the original request.
    pub fn auto_added(&self) -> impl Iterator<Item = &ModuleId> {
        self.warnings.iter().map(|w| &w.module)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

struct Frame {
    id: ModuleId,
    /// The module whose dependency list pushed this frame; None for
    /// explicitly requested roots.
    required_by: Option<ModuleId>,
    next_dep: usize,
}

enum Step {
    Descend { dep: ModuleId, parent: ModuleId },
    Complete,
}

/// Compute the dependency-closed module set for `requested`.
///
/// The request may be empty (result is three empty collections), may contain
/// duplicates (deduplicated silently), and may name identifiers absent from
/// the catalog (collected as errors). Unknown identifiers are reported once
/// each, no matter how often they are reached.
pub fn resolve(catalog: &ModuleCatalog, requested: &[ModuleId]) -> Resolution {
    let requested_set: HashSet<&ModuleId> = requested.iter().collect();

    let mut marks: HashMap<ModuleId, Mark> = HashMap::new();
    let mut missing: HashSet<ModuleId> = HashSet::new();
    let mut result = Resolution::default();

    for root in requested {
        if marks.get(root.as_str()) == Some(&Mark::Done) {
            continue;
        }
        if catalog.get(root.as_str()).is_none() {
            if missing.insert(root.clone()) {
                result
                    .errors
                    .push(ResolveError::UnknownModule { module: root.clone() });
            }
            continue;
        }
        visit(
            catalog,
            root,
            &requested_set,
            &mut marks,
            &mut missing,
            &mut result,
        );
    }

    result
}

/// Explicit-stack depth-first traversal from one requested root. Equivalent
/// to the recursive "add with dependencies" form, minus the recursion depth.
fn visit(
    catalog: &ModuleCatalog,
    root: &ModuleId,
    requested_set: &HashSet<&ModuleId>,
    marks: &mut HashMap<ModuleId, Mark>,
    missing: &mut HashSet<ModuleId>,
    result: &mut Resolution,
) {
    let mut stack: Vec<Frame> = vec![Frame {
        id: root.clone(),
        required_by: None,
        next_dep: 0,
    }];
    marks.insert(root.clone(), Mark::InProgress);

    loop {
        let step = match stack.last_mut() {
            None => break,
            Some(frame) => {
                let deps = catalog
                    .get(frame.id.as_str())
                    .map(|spec| spec.deps.as_slice())
                    .unwrap_or(&[]);
                if frame.next_dep < deps.len() {
                    let dep = deps[frame.next_dep].clone();
                    frame.next_dep += 1;
                    Step::Descend {
                        dep,
                        parent: frame.id.clone(),
                    }
                } else {
                    Step::Complete
                }
            }
        };

        match step {
            Step::Descend { dep, parent } => match marks.get(dep.as_str()) {
                // Already in the closure; nothing to add, nothing to warn.
                Some(Mark::Done) => {}
                // The edge closes back onto the active path.
                Some(Mark::InProgress) => {
                    let path = cycle_path(&stack, &dep);
                    result.errors.push(ResolveError::DependencyCycle { path });
                }
                None => {
                    if catalog.get(dep.as_str()).is_none() {
                        if missing.insert(dep.clone()) {
                            result
                                .errors
                                .push(ResolveError::UnknownModule { module: dep });
                        }
                    } else {
                        marks.insert(dep.clone(), Mark::InProgress);
                        stack.push(Frame {
                            id: dep,
                            required_by: Some(parent),
                            next_dep: 0,
                        });
                    }
                }
            },
            Step::Complete => {
                if let Some(frame) = stack.pop() {
                    marks.insert(frame.id.clone(), Mark::Done);
                    if let Some(parent) = frame.required_by {
                        // Warn only for modules the caller did not ask for.
                        if !requested_set.contains(&frame.id) {
                            result.warnings.push(AutoAdded {
                                module: frame.id.clone(),
                                required_by: parent,
                            });
                        }
                    }
                    result.modules.push(frame.id);
                }
            }
        }
    }
}

/// Reconstruct the cycle from the active stack: the frames from the repeated
/// module up to the top, closed with the repeated module itself.
fn cycle_path(stack: &[Frame], repeated: &ModuleId) -> Vec<ModuleId> {
    let start = stack
        .iter()
        .position(|frame| &frame.id == repeated)
        .unwrap_or(0);
    let mut path: Vec<ModuleId> = stack[start..].iter().map(|f| f.id.clone()).collect();
    path.push(repeated.clone());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModuleSpec;

    fn ids(names: &[&str]) -> Vec<ModuleId> {
        names.iter().map(|n| ModuleId::from(*n)).collect()
    }

    fn names(modules: &[ModuleId]) -> Vec<&str> {
        modules.iter().map(|m| m.as_str()).collect()
    }

    // The four-module table from the concrete scenarios:
    // auth -> [database], blog -> [auth, database],
    // database -> [], dashboard -> []
    fn scenario_catalog() -> ModuleCatalog {
        let mut catalog = ModuleCatalog::empty();
        for spec in [
            ModuleSpec::routed("auth", &["database"]),
            ModuleSpec::routed("blog", &["auth", "database"]),
            ModuleSpec::backend("database", &[]),
            ModuleSpec::routed("dashboard", &[]),
        ] {
            catalog.register(spec).expect("valid spec");
        }
        catalog
    }

    #[test]
    fn test_blog_pulls_auth_and_database() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["blog"]));

        assert!(resolution.is_ok());
        assert_eq!(names(&resolution.modules), vec!["database", "auth", "blog"]);
        // database warned via auth, auth warned via blog; database's second
        // reach through blog's own list is suppressed by the visited check.
        assert_eq!(
            resolution.warnings,
            vec![
                AutoAdded {
                    module: "database".into(),
                    required_by: "auth".into()
                },
                AutoAdded {
                    module: "auth".into(),
                    required_by: "blog".into()
                },
            ]
        );
    }

    #[test]
    fn test_standalone_module() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["dashboard"]));

        assert_eq!(names(&resolution.modules), vec!["dashboard"]);
        assert!(resolution.warnings.is_empty());
        assert!(resolution.errors.is_empty());
    }

    #[test]
    fn test_unknown_module() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["ghost"]));

        assert!(resolution.modules.is_empty());
        assert_eq!(
            resolution.errors,
            vec![ResolveError::UnknownModule {
                module: "ghost".into()
            }]
        );
    }

    #[test]
    fn test_empty_request() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &[]);

        assert!(resolution.modules.is_empty());
        assert!(resolution.warnings.is_empty());
        assert!(resolution.errors.is_empty());
    }

    #[test]
    fn test_explicit_modules_warned_once_for_shared_dep() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["auth", "blog"]));

        assert_eq!(names(&resolution.modules), vec!["database", "auth", "blog"]);
        // database is warned once, first reached via auth; auth itself was
        // requested and is never warned about.
        assert_eq!(
            resolution.warnings,
            vec![AutoAdded {
                module: "database".into(),
                required_by: "auth".into()
            }]
        );
    }

    #[test]
    fn test_duplicates_deduplicated_silently() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["blog", "blog", "auth", "auth"]));

        assert_eq!(names(&resolution.modules), vec!["database", "auth", "blog"]);
        assert!(resolution.is_ok());
    }

    #[test]
    fn test_unknown_module_errors_once() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["ghost", "ghost", "dashboard"]));

        // Exactly one error per unknown identifier, and siblings still resolve.
        assert_eq!(resolution.errors.len(), 1);
        assert_eq!(names(&resolution.modules), vec!["dashboard"]);
    }

    #[test]
    fn test_unknown_dependency_collected_without_stopping_siblings() {
        let mut catalog = scenario_catalog();
        catalog
            .register(ModuleSpec::routed("gallery", &["ghost"]))
            .expect("valid spec");
        let resolution = resolve(&catalog, &ids(&["gallery", "dashboard"]));

        assert_eq!(
            resolution.errors,
            vec![ResolveError::UnknownModule {
                module: "ghost".into()
            }]
        );
        // The traversal kept going: gallery itself and dashboard are present.
        assert!(resolution.contains("gallery"));
        assert!(resolution.contains("dashboard"));
    }

    #[test]
    fn test_dependencies_precede_dependents() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["blog", "dashboard"]));

        let position = |name: &str| {
            resolution
                .modules
                .iter()
                .position(|m| m.as_str() == name)
                .expect("present")
        };
        assert!(position("database") < position("auth"));
        assert!(position("auth") < position("blog"));
    }

    #[test]
    fn test_closure_property() {
        let catalog = scenario_catalog();
        let resolution = resolve(&catalog, &ids(&["blog", "dashboard"]));

        for module in &resolution.modules {
            let spec = catalog.get(module.as_str()).expect("resolved from catalog");
            for dep in &spec.deps {
                assert!(
                    resolution.contains(dep.as_str()),
                    "{module} resolved without its dependency {dep}"
                );
            }
        }
    }

    #[test]
    fn test_monotonicity() {
        let catalog = scenario_catalog();
        let requested = ids(&["auth", "dashboard"]);
        let resolution = resolve(&catalog, &requested);

        for module in &requested {
            assert!(resolution.contains(module.as_str()));
        }
    }

    #[test]
    fn test_idempotence() {
        let catalog = scenario_catalog();
        let first = resolve(&catalog, &ids(&["blog"]));
        assert!(first.is_ok());

        let second = resolve(&catalog, &first.modules);
        assert_eq!(second.modules, first.modules);
        assert!(second.warnings.is_empty());
        assert!(second.errors.is_empty());
    }

    #[test]
    fn test_cycle_is_a_distinct_error() {
        let mut catalog = ModuleCatalog::empty();
        catalog
            .register(ModuleSpec::routed("a", &["b"]))
            .expect("valid spec");
        catalog
            .register(ModuleSpec::routed("b", &["a"]))
            .expect("valid spec");

        let resolution = resolve(&catalog, &ids(&["a"]));
        assert!(!resolution.is_ok());
        assert_eq!(
            resolution.errors,
            vec![ResolveError::DependencyCycle {
                path: ids(&["a", "b", "a"])
            }]
        );
    }

    #[test]
    fn test_cycle_off_the_requested_path() {
        // c -> a -> b -> a: the cycle sits below the requested root.
        let mut catalog = ModuleCatalog::empty();
        catalog
            .register(ModuleSpec::routed("a", &["b"]))
            .expect("valid spec");
        catalog
            .register(ModuleSpec::routed("b", &["a"]))
            .expect("valid spec");
        catalog
            .register(ModuleSpec::routed("c", &["a"]))
            .expect("valid spec");

        let resolution = resolve(&catalog, &ids(&["c"]));
        assert_eq!(resolution.errors.len(), 1);
        match &resolution.errors[0] {
            ResolveError::DependencyCycle { path } => {
                assert_eq!(path.first(), path.last());
                assert!(path.iter().any(|m| m.as_str() == "b"));
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_catalog_full_platform() {
        let catalog = ModuleCatalog::builtin();
        let resolution = resolve(&catalog, &ids(&["blog", "chat", "dashboard", "auth"]));

        assert!(resolution.is_ok());
        assert!(resolution.contains("database"));
        // database was never requested, so it is the only auto-add.
        let auto: Vec<&str> = resolution.auto_added().map(|m| m.as_str()).collect();
        assert_eq!(auto, vec!["database"]);
    }
}
