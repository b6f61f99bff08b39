// src/services/blog_service.rs
//
// Blog content management over the post repository.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::post::{validate_post, Post};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, PostCreated};
use crate::repositories::PostRepository;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
}

/// A category name with how many published posts carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

pub struct BlogService {
    post_repo: Arc<dyn PostRepository>,
    event_bus: Arc<EventBus>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            post_repo,
            event_bus,
        }
    }

    pub fn create_post(&self, request: CreatePostRequest) -> AppResult<Uuid> {
        let mut post = Post::new(request.title, request.content);
        post.author = request.author;
        post.category = request.category;
        post.tags = request
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        post.featured_image = request.featured_image;

        validate_post(&post).map_err(AppError::Domain)?;
        self.post_repo.save(&post)?;

        self.event_bus
            .emit(PostCreated::new(post.id, post.title.clone()));

        Ok(post.id)
    }

    pub fn list_posts(&self, limit: u32) -> AppResult<Vec<Post>> {
        self.post_repo.list_published(limit, 0)
    }

    pub fn get_post(&self, post_id: Uuid) -> AppResult<Post> {
        self.post_repo.get_by_id(post_id)?.ok_or(AppError::NotFound)
    }

    pub fn posts_by_category(&self, category: &str) -> AppResult<Vec<Post>> {
        self.post_repo.list_by_category(category)
    }

    pub fn search_posts(&self, query: &str) -> AppResult<Vec<Post>> {
        self.post_repo.search(query, 20)
    }

    /// Category names with counts, busiest first. Uncategorized posts are
    /// grouped under "Uncategorized".
    pub fn categories(&self) -> AppResult<Vec<CategorySummary>> {
        let posts = self.post_repo.list_published(100, 0)?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for post in &posts {
            let name = post
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string());
            *counts.entry(name).or_insert(0) += 1;
        }

        let mut summary: Vec<CategorySummary> = counts
            .into_iter()
            .map(|(name, count)| CategorySummary { name, count })
            .collect();
        // Busiest first; name as a tiebreak to keep output deterministic
        summary.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

        Ok(summary)
    }
}
