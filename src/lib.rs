// src/lib.rs
// sitekit - Modular web-application toolkit
//
// Architecture:
// - Domain-centric: entities and invariants live in domain/
// - Resolver-driven: the factory activates only the dependency-closed module set
// - Explicit: services and repositories are injected, never global
// - Storage-backed: one local SQLite database behind trait repositories

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod resolver;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod http;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_module_spec,
    validate_password,
    validate_post,
    validate_username,
    // Module
    ModuleId,
    ModuleKind,
    ModuleSpec,
    // Post
    Post,
    // Session
    Session,
    // User
    User,
    UserProfile,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Resolver
// ============================================================================

pub use resolver::{resolve, AutoAdded, ModuleCatalog, Resolution, ResolveError};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{DomainEvent, EventBus, MessageSent, PostCreated, UserLoggedIn, UserRegistered};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    PostRepository, SessionRepository, SqlitePostRepository, SqliteSessionRepository,
    SqliteUserRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AuthService, BlogService, CategorySummary, ChatService, CreatePostRequest, DashboardService,
    RegisterUserRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{create_app, App, AppState, DashboardKind, Preset, PresetKind, SiteConfig};

// Re-export application submodules
pub use application::dto;
