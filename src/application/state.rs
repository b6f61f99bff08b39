// src/application/state.rs

use std::sync::Arc;

use crate::application::config::SiteConfig;
use crate::db::ConnectionPool;
use crate::domain::ModuleId;
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::services::{AuthService, BlogService, ChatService, DashboardService};

/// Application state shared by every route handler.
///
/// Service slots are Option: a slot is filled only when its module survived
/// resolution, and the factory mounts routes only for filled slots. The
/// accessors exist for the impossible case anyway; they fail with
/// ModuleDisabled rather than panicking.
pub struct AppState {
    pub config: SiteConfig,

    /// Active modules in resolver emission order (dependencies first)
    pub modules: Vec<ModuleId>,

    pub event_bus: Arc<EventBus>,

    pub pool: Option<Arc<ConnectionPool>>,
    pub auth_service: Option<Arc<AuthService>>,
    pub blog_service: Option<Arc<BlogService>>,
    pub chat_service: Option<Arc<ChatService>>,
    pub dashboard_service: Option<Arc<DashboardService>>,
}

impl AppState {
    pub fn module_enabled(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.as_str() == name)
    }

    pub fn auth(&self) -> AppResult<&AuthService> {
        self.auth_service
            .as_deref()
            .ok_or_else(|| AppError::ModuleDisabled("auth".to_string()))
    }

    pub fn blog(&self) -> AppResult<&BlogService> {
        self.blog_service
            .as_deref()
            .ok_or_else(|| AppError::ModuleDisabled("blog".to_string()))
    }

    pub fn chat(&self) -> AppResult<&ChatService> {
        self.chat_service
            .as_deref()
            .ok_or_else(|| AppError::ModuleDisabled("chat".to_string()))
    }

    pub fn dashboard(&self) -> AppResult<&DashboardService> {
        self.dashboard_service
            .as_deref()
            .ok_or_else(|| AppError::ModuleDisabled("dashboard".to_string()))
    }

    pub fn database(&self) -> AppResult<&ConnectionPool> {
        self.pool
            .as_deref()
            .ok_or_else(|| AppError::ModuleDisabled("database".to_string()))
    }
}
