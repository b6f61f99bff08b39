// src/http/mod.rs
//
// HTTP layer: one sub-router per routed module, assembled by the factory for
// the modules that survived resolution. Handlers accept and return JSON.

pub mod auth_routes;
pub mod blog_routes;
pub mod chat_routes;
pub mod dashboard_routes;
pub mod debug_routes;
pub mod main_routes;

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::application::dto::{CurrentUser, PageContext};
use crate::application::state::AppState;
use crate::domain::ModuleKind;
use crate::error::AppError;
use crate::resolver::ModuleCatalog;

/// Cookie carrying the session token minted at login.
pub const SESSION_COOKIE: &str = "sitekit_session";

/// Assemble the application router. Modules are walked in resolver emission
/// order; backend modules contribute no routes. The dashboard owns `/` when
/// active, otherwise `main` takes it.
pub fn build_router(state: Arc<AppState>, catalog: &ModuleCatalog) -> Router {
    let mut router = Router::new().merge(debug_routes::router());

    let dashboard_active = state.module_enabled("dashboard");
    for module in &state.modules {
        let kind = catalog.get(module.as_str()).map(|spec| spec.kind);
        if kind == Some(ModuleKind::Backend) {
            continue;
        }
        match module.as_str() {
            "auth" => router = router.merge(auth_routes::router()),
            "dashboard" => router = router.merge(dashboard_routes::router()),
            "main" => router = router.merge(main_routes::router(!dashboard_active)),
            "chat" => router = router.merge(chat_routes::router()),
            "blog" => router = router.merge(blog_routes::router()),
            other => {
                tracing::warn!(module = other, "module not found in route registry");
            }
        }
    }

    router
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Domain(_) => StatusCode::BAD_REQUEST,
            AppError::ModuleDisabled(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Build the context embedded in every page payload.
pub fn page_context(state: &AppState, headers: &HeaderMap) -> PageContext {
    let mut links = BTreeMap::new();
    for (module, path) in [
        ("dashboard", "/dashboard"),
        ("blog", "/blog"),
        ("chat", "/chat"),
        ("auth", "/login"),
        ("main", "/home"),
    ] {
        let target = if state.module_enabled(module) {
            path.to_string()
        } else {
            // Disabled modules keep a dead link instead of breaking clients
            "#".to_string()
        };
        links.insert(module.to_string(), target);
    }

    PageContext {
        site_name: state.config.site_name_display().to_string(),
        theme: state.config.theme.clone(),
        theme_css: state.config.theme_css_url(),
        available_modules: state.modules.iter().map(|m| m.to_string()).collect(),
        links,
        current_user: current_user_from_headers(state, headers),
    }
}

/// Resolve the request's session cookie to a user; any failure along the way
/// degrades to Guest.
pub fn current_user_from_headers(state: &AppState, headers: &HeaderMap) -> CurrentUser {
    if state.module_enabled("auth") {
        if let (Ok(auth), Some(token)) = (state.auth(), session_token(headers)) {
            if let Ok(Some(user)) = auth.current_user(token) {
                return CurrentUser::from(&user);
            }
        }
    }
    CurrentUser::guest()
}

/// Extract the session token from the Cookie header, if present and valid.
pub fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}
