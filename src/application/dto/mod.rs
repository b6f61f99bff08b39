// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are wire-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::config::DashboardKind;
use crate::db::DatabaseStats;
use crate::domain::post::Post;
use crate::domain::user::User;

// ============================================================================
// PAGE CONTEXT
// ============================================================================

/// Context attached to every page payload: what templates used to get
/// injected, now carried in the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub site_name: String,
    pub theme: String,
    pub theme_css: String,
    pub available_modules: Vec<String>,
    /// Entry point per routed module; "#" when the module is disabled, so
    /// clients can always render the link without checking availability.
    pub links: BTreeMap<String, String>,
    pub current_user: CurrentUser,
}

/// The signed-in user, or the Guest fallback.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub username: String,
    pub authenticated: bool,
}

impl CurrentUser {
    pub fn guest() -> Self {
        Self {
            username: "Guest".to_string(),
            authenticated: false,
        }
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            authenticated: true,
        }
    }
}

// ============================================================================
// USER DTOs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Mirrors the old flash-message pattern: success flag plus a message.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// BLOG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub views: u32,
    pub comments: u32,
    pub date: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let excerpt = excerpt_of(&post.content);
        Self {
            id: post.id.to_string(),
            title: post.title,
            excerpt,
            content: post.content,
            author: post.author,
            category: post.category,
            tags: post.tags,
            featured_image: post.featured_image,
            views: post.views,
            comments: post.comments,
            date: post.created_at.to_rfc3339(),
        }
    }
}

/// First sentence-ish slice of the content for listing pages.
fn excerpt_of(content: &str) -> String {
    const EXCERPT_CHARS: usize = 160;
    if content.chars().count() <= EXCERPT_CHARS {
        return content.to_string();
    }
    let cut: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{cut}…")
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    /// Comma-separated, matching the old form field
    pub tags: Option<String>,
}

// ============================================================================
// CHAT DTOs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageDto {
    #[serde(default)]
    pub message: String,
    pub room_id: Option<u32>,
}

// ============================================================================
// DEBUG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DebugInfoDto {
    pub site_name: String,
    pub theme: String,
    pub cache_buster: String,
    pub theme_css: String,
    pub dashboard: DashboardKind,
    pub modules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_content_untouched() {
        assert_eq!(excerpt_of("short"), "short");
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let long = "x".repeat(500);
        let excerpt = excerpt_of(&long);
        assert_eq!(excerpt.chars().count(), 161);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn test_post_dto_from_entity() {
        let mut post = Post::new("Title".to_string(), "Body".to_string());
        post.tags = vec!["a".to_string()];
        let dto = PostDto::from(post.clone());
        assert_eq!(dto.id, post.id.to_string());
        assert_eq!(dto.excerpt, "Body");
    }
}
