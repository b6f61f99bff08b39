// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod auth_service;
pub mod blog_service;
pub mod chat_service;
pub mod dashboard_service;

#[cfg(test)]
mod auth_service_tests;

// Re-export all services and their types
pub use auth_service::{AuthService, CredentialRules, RegisterUserRequest, SESSION_TTL_DAYS};

pub use blog_service::{BlogService, CategorySummary, CreatePostRequest};

pub use chat_service::{ChatMessage, ChatRoom, ChatService, Conversation, RoomView, SentMessage};

pub use dashboard_service::{ActivityItem, DashboardData, DashboardService};
