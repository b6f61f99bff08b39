// src/http/debug_routes.rs
//
// Operator-facing view of the assembled configuration: theme, dashboard
// variant, active modules, and storage row counts when the database is on.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use crate::application::dto::DebugInfoDto;
use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats};
use crate::error::AppResult;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/debug", get(debug_info))
}

async fn debug_info(State(state): State<Arc<AppState>>) -> AppResult<Json<DebugInfoDto>> {
    let database = match &state.pool {
        Some(pool) => {
            let conn = get_connection(pool)?;
            Some(get_database_stats(&conn)?)
        }
        None => None,
    };

    Ok(Json(DebugInfoDto {
        site_name: state.config.site_name_display().to_string(),
        theme: state.config.theme.clone(),
        cache_buster: state.config.cache_buster.clone(),
        theme_css: state.config.theme_css_url(),
        dashboard: state.config.dashboard,
        modules: state.modules.iter().map(|m| m.to_string()).collect(),
        database,
    }))
}
