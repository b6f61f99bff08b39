// src/http/blog_routes.rs
//
// Blog listing, detail, category, search, and write endpoints.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{CreatePostDto, PageContext, PostDto};
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::http::{current_user_from_headers, page_context};
use crate::services::blog_service::{CategorySummary, CreatePostRequest};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blog", get(blog_home))
        .route("/blog/post/:post_id", get(blog_post))
        .route("/blog/category/:category", get(blog_category))
        .route("/blog/write", post(blog_write))
        .route("/blog/search", get(blog_search))
}

#[derive(Serialize)]
struct BlogHomePage {
    context: PageContext,
    posts: Vec<PostDto>,
    categories: Vec<CategorySummary>,
}

async fn blog_home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Json<BlogHomePage>> {
    let blog = state.blog()?;
    let posts = blog.list_posts(20)?.into_iter().map(PostDto::from).collect();
    let categories = blog.categories()?;

    Ok(Json(BlogHomePage {
        context: page_context(&state, &headers),
        posts,
        categories,
    }))
}

#[derive(Serialize)]
struct BlogPostPage {
    context: PageContext,
    post: PostDto,
    comments: Vec<serde_json::Value>,
    related_posts: Vec<PostDto>,
}

async fn blog_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> AppResult<Json<BlogPostPage>> {
    let post = state.blog()?.get_post(post_id)?;

    Ok(Json(BlogPostPage {
        context: page_context(&state, &headers),
        post: PostDto::from(post),
        comments: Vec::new(),
        related_posts: Vec::new(),
    }))
}

#[derive(Serialize)]
struct BlogCategoryPage {
    context: PageContext,
    category: String,
    posts: Vec<PostDto>,
}

async fn blog_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> AppResult<Json<BlogCategoryPage>> {
    let posts = state
        .blog()?
        .posts_by_category(&category)?
        .into_iter()
        .map(PostDto::from)
        .collect();

    Ok(Json(BlogCategoryPage {
        context: page_context(&state, &headers),
        category,
        posts,
    }))
}

#[derive(Serialize)]
struct BlogWriteResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_id: Option<String>,
}

async fn blog_write(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<Json<BlogWriteResponse>> {
    let blog = state.blog()?;

    // Author precedence: explicit field, then the signed-in user, then Guest
    let author = dto.author.or_else(|| {
        let user = current_user_from_headers(&state, &headers);
        user.authenticated.then_some(user.username)
    });

    let tags = dto
        .tags
        .map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    let request = CreatePostRequest {
        title: dto.title,
        content: dto.content,
        author: Some(author.unwrap_or_else(|| "Guest".to_string())),
        category: dto.category,
        tags,
        featured_image: None,
    };

    match blog.create_post(request) {
        Ok(post_id) => Ok(Json(BlogWriteResponse {
            success: true,
            message: "Post created successfully!".to_string(),
            post_id: Some(post_id.to_string()),
        })),
        Err(AppError::Domain(err)) => Ok(Json(BlogWriteResponse {
            success: false,
            message: err.to_string(),
            post_id: None,
        })),
        Err(err) => Err(err),
    }
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct BlogSearchPage {
    context: PageContext,
    query: String,
    posts: Vec<PostDto>,
}

async fn blog_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> AppResult<Json<BlogSearchPage>> {
    let posts = if params.q.is_empty() {
        Vec::new()
    } else {
        state
            .blog()?
            .search_posts(&params.q)?
            .into_iter()
            .map(PostDto::from)
            .collect()
    };

    Ok(Json(BlogSearchPage {
        context: page_context(&state, &headers),
        query: params.q,
        posts,
    }))
}
