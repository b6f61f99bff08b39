// src/resolver/catalog.rs
//
// The static module catalog: which modules exist, what kind they are, and
// what each one directly requires. Built once at startup, read-only after.

use std::collections::HashMap;

use crate::domain::{validate_module_spec, DomainResult, ModuleId, ModuleSpec};

pub struct ModuleCatalog {
    specs: HashMap<ModuleId, ModuleSpec>,
}

impl ModuleCatalog {
    pub fn empty() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// The stock catalog every sitekit application starts from.
    ///
    /// `database` is the only backend module; everything else serves routes.
    /// `dashboard`, `main`, and `contact` work standalone.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for spec in [
            ModuleSpec::routed("auth", &["database"]),
            ModuleSpec::routed("dashboard", &[]),
            ModuleSpec::routed("main", &[]),
            ModuleSpec::backend("database", &[]),
            ModuleSpec::routed("chat", &["database"]),
            ModuleSpec::routed("blog", &["auth", "database"]),
            ModuleSpec::routed("contact", &[]),
        ] {
            catalog.specs.insert(spec.id.clone(), spec);
        }
        catalog
    }

    /// Register a module in a caller-built catalog.
    pub fn register(&mut self, spec: ModuleSpec) -> DomainResult<()> {
        validate_module_spec(&spec)?;
        self.specs.insert(spec.id.clone(), spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ModuleSpec> {
        self.specs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = ModuleCatalog::builtin();
        assert_eq!(catalog.len(), 7);
        for name in ["auth", "dashboard", "main", "database", "chat", "blog", "contact"] {
            assert!(catalog.contains(name), "missing builtin module {name}");
        }
        assert!(!catalog.contains("gallery"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = ModuleCatalog::builtin();
        assert!(catalog.contains("auth"));
        assert!(!catalog.contains("Auth"));
    }

    #[test]
    fn test_builtin_dependency_edges() {
        let catalog = ModuleCatalog::builtin();
        let blog = catalog.get("blog").expect("blog registered");
        assert_eq!(
            blog.deps,
            vec![ModuleId::from("auth"), ModuleId::from("database")]
        );
        let database = catalog.get("database").expect("database registered");
        assert!(database.deps.is_empty());
    }

    #[test]
    fn test_register_rejects_self_dependency() {
        let mut catalog = ModuleCatalog::empty();
        let result = catalog.register(ModuleSpec::routed("loop", &["loop"]));
        assert!(result.is_err());
        assert!(!catalog.contains("loop"));
    }
}
