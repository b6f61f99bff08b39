// src/http/dashboard_routes.rs
//
// Dashboard page. Also the home page: the configuration picks which
// dashboard variant is served, making dashboard kind the single source of
// truth rather than route registration order.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::PageContext;
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::http::page_context;
use crate::services::dashboard_service::DashboardData;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dashboard))
        .route("/dashboard", get(dashboard))
}

#[derive(Serialize)]
struct DashboardPage {
    context: PageContext,
    #[serde(flatten)]
    data: DashboardData,
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Json<DashboardPage>> {
    let kind = state.config.dashboard;
    tracing::debug!(dashboard = ?kind, "loading dashboard");

    let data = state.dashboard()?.overview(kind);

    Ok(Json(DashboardPage {
        context: page_context(&state, &headers),
        data,
    }))
}
