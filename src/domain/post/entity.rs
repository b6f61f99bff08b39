use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Internal immutable identifier
    pub id: Uuid,

    pub title: String,

    pub content: String,

    pub author: Option<String>,

    pub category: Option<String>,

    pub tags: Vec<String>,

    pub featured_image: Option<String>,

    pub views: u32,

    pub comments: u32,

    /// Unpublished posts are invisible to listings and lookups
    pub published: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new published Post
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author: None,
            category: None,
            tags: Vec::new(),
            featured_image: None,
            views: 0,
            comments: 0,
            published: true,
            created_at: now,
            updated_at: now,
        }
    }
}
