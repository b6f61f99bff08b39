// src/application/factory.rs
//
// Application factory: resolve the requested modules, construct backend
// services before the features that need them, and assemble the router.
//
// CRITICAL RULES:
// - Resolution errors abort construction before anything is initialized
// - Services are built in resolver emission order (dependencies first)
// - Everything is injected explicitly; no process-wide singletons

use axum::Router;
use std::sync::Arc;

use crate::application::config::SiteConfig;
use crate::application::state::AppState;
use crate::db::{
    create_connection_pool, default_database_path, get_connection, initialize_database,
    ConnectionPool,
};
use crate::domain::ModuleId;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, MessageSent, PostCreated, UserLoggedIn, UserRegistered};
use crate::http::build_router;
use crate::repositories::{
    SessionRepository, SqlitePostRepository, SqliteSessionRepository, SqliteUserRepository,
    UserRepository,
};
use crate::resolver::{resolve, ModuleCatalog};
use crate::services::{AuthService, BlogService, ChatService, DashboardService};

/// A fully assembled application: the router to serve and the state behind it.
pub struct App {
    pub router: Router,
    pub state: Arc<AppState>,
}

/// Build an application from a requested module list and configuration.
///
/// Fails with `AppError::ModuleResolution` (carrying every collected error)
/// when the request names unknown modules; nothing is partially initialized
/// in that case.
pub fn create_app(requested: &[ModuleId], config: SiteConfig) -> AppResult<App> {
    let catalog = ModuleCatalog::builtin();
    let resolution = resolve(&catalog, requested);

    tracing::info!(
        requested = ?requested.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        resolved = ?resolution.modules.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
        "module dependency analysis"
    );
    for warning in &resolution.warnings {
        tracing::warn!(
            module = %warning.module,
            required_by = %warning.required_by,
            "auto-added dependency"
        );
    }

    if !resolution.is_ok() {
        for error in &resolution.errors {
            tracing::error!(%error, "module resolution error");
        }
        return Err(AppError::ModuleResolution(resolution.errors));
    }

    tracing::info!(
        theme = %config.theme,
        site = config.site_name_display(),
        dashboard = ?config.dashboard,
        "site configuration"
    );

    let event_bus = Arc::new(EventBus::new());
    register_observers(&event_bus);

    let mut state = AppState {
        config,
        modules: resolution.modules.clone(),
        event_bus: event_bus.clone(),
        pool: None,
        auth_service: None,
        blog_service: None,
        chat_service: None,
        dashboard_service: None,
    };

    // Emission order guarantees each module's dependencies are already
    // constructed when it comes up.
    for module in &resolution.modules {
        match module.as_str() {
            "database" => {
                let path = match &state.config.database_path {
                    Some(path) => path.clone(),
                    None => default_database_path()?,
                };
                let pool = Arc::new(create_connection_pool(&path)?);
                {
                    let conn = get_connection(&pool)?;
                    initialize_database(&conn)?;
                }
                state.pool = Some(pool);
                tracing::info!(module = "database", db_path = %path.display(), "backend module loaded");
            }
            "auth" => {
                let pool = active_pool(&state)?;
                let user_repo: Arc<dyn UserRepository> =
                    Arc::new(SqliteUserRepository::new(pool.clone()));
                let session_repo: Arc<dyn SessionRepository> =
                    Arc::new(SqliteSessionRepository::new(pool));

                // Stale sessions from previous runs are dead weight
                let purged = session_repo.purge_expired()?;
                if purged > 0 {
                    tracing::info!(purged, "removed expired sessions");
                }

                state.auth_service = Some(Arc::new(AuthService::new(
                    user_repo,
                    session_repo,
                    event_bus.clone(),
                )));
                tracing::info!(module = "auth", "module loaded");
            }
            "blog" => {
                let pool = active_pool(&state)?;
                state.blog_service = Some(Arc::new(BlogService::new(
                    Arc::new(SqlitePostRepository::new(pool)),
                    event_bus.clone(),
                )));
                tracing::info!(module = "blog", "module loaded");
            }
            "chat" => {
                state.chat_service = Some(Arc::new(ChatService::new(event_bus.clone())));
                tracing::info!(module = "chat", "module loaded");
            }
            "dashboard" => {
                state.dashboard_service = Some(Arc::new(DashboardService::new()));
                tracing::info!(module = "dashboard", "module loaded");
            }
            // Route-only modules have nothing to construct
            _ => {}
        }
    }

    let state = Arc::new(state);
    let router = build_router(state.clone(), &catalog);

    Ok(App { router, state })
}

/// The database pool, which emission order guarantees is already up for any
/// module that declared it as a dependency.
fn active_pool(state: &AppState) -> AppResult<Arc<ConnectionPool>> {
    state
        .pool
        .clone()
        .ok_or_else(|| AppError::ModuleDisabled("database".to_string()))
}

/// Observability-only subscribers; no behavior depends on them.
fn register_observers(event_bus: &EventBus) {
    event_bus.subscribe::<UserRegistered, _>(|event| {
        tracing::info!(user_id = %event.user_id, username = %event.username, "user registered");
    });
    event_bus.subscribe::<UserLoggedIn, _>(|event| {
        tracing::info!(user_id = %event.user_id, "user logged in");
    });
    event_bus.subscribe::<PostCreated, _>(|event| {
        tracing::info!(post_id = %event.post_id, title = %event.title, "post created");
    });
    event_bus.subscribe::<MessageSent, _>(|event| {
        tracing::debug!(room_id = event.room_id, length = event.length, "chat message sent");
    });
}
