use super::entity::ModuleSpec;
use crate::domain::{DomainError, DomainResult};

/// Validates all ModuleSpec invariants
pub fn validate_module_spec(spec: &ModuleSpec) -> DomainResult<()> {
    if spec.id.as_str().trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Module name cannot be empty".to_string(),
        ));
    }

    if spec.deps.iter().any(|d| d == &spec.id) {
        return Err(DomainError::InvariantViolation(format!(
            "Module '{}' cannot depend on itself",
            spec.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module::ModuleSpec;

    #[test]
    fn test_valid_spec() {
        let spec = ModuleSpec::routed("blog", &["auth", "database"]);
        assert!(validate_module_spec(&spec).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let spec = ModuleSpec::routed("  ", &[]);
        assert!(validate_module_spec(&spec).is_err());
    }

    #[test]
    fn test_self_dependency_fails() {
        let spec = ModuleSpec::routed("auth", &["auth"]);
        assert!(validate_module_spec(&spec).is_err());
    }
}
