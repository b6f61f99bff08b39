// src/domain/module/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::{ModuleId, ModuleKind, ModuleSpec};
pub use invariants::validate_module_spec;
