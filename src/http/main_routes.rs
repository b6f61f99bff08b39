// src/http/main_routes.rs
//
// Basic site pages: index, about, contact.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::PageContext;
use crate::application::state::AppState;
use crate::http::page_context;

/// `include_root` mounts `/` here as well; the factory only sets it when the
/// dashboard module is inactive, since axum rejects duplicate paths.
pub fn router(include_root: bool) -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .route("/home", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact));
    if include_root {
        router = router.route("/", get(index));
    }
    router
}

#[derive(Serialize)]
struct MainPage {
    context: PageContext,
    page: &'static str,
    content: String,
}

async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<MainPage> {
    let context = page_context(&state, &headers);
    let content = format!("Welcome to {}", context.site_name);
    Json(MainPage {
        context,
        page: "index",
        content,
    })
}

async fn about(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<MainPage> {
    let context = page_context(&state, &headers);
    let content = format!("{} is built from composable feature modules.", context.site_name);
    Json(MainPage {
        context,
        page: "about",
        content,
    })
}

async fn contact(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<MainPage> {
    let context = page_context(&state, &headers);
    Json(MainPage {
        context,
        page: "contact",
        content: "Reach the team at hello@example.com".to_string(),
    })
}
