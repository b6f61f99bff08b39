// src/repositories/post_repository.rs
//
// Blog post persistence
//
// Tags are stored comma-joined in a single column; the mapper splits them
// back out.

use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::post::Post;
use crate::error::{AppError, AppResult};
use crate::repositories::user_repository::parse_timestamp;

pub trait PostRepository: Send + Sync {
    fn save(&self, post: &Post) -> AppResult<()>;
    /// Published posts only; drafts are invisible to lookups.
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Post>>;
    fn list_published(&self, limit: u32, offset: u32) -> AppResult<Vec<Post>>;
    fn list_by_category(&self, category: &str) -> AppResult<Vec<Post>>;
    fn search(&self, query: &str, limit: u32) -> AppResult<Vec<Post>>;
}

pub struct SqlitePostRepository {
    pool: Arc<ConnectionPool>,
}

const POST_COLUMNS: &str = "id, title, content, author, category, tags, featured_image, \
                            views, comments, published, created_at, updated_at";

impl SqlitePostRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &Row) -> Result<Post, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let tags_str: String = row.get("tags")?;
        let tags = tags_str
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let views: i64 = row.get("views")?;
        let comments: i64 = row.get("comments")?;
        let published: i64 = row.get("published")?;

        Ok(Post {
            id,
            title: row.get("title")?,
            content: row.get("content")?,
            author: row.get("author")?,
            category: row.get("category")?,
            tags,
            featured_image: row.get("featured_image")?,
            views: views as u32,
            comments: comments as u32,
            published: published != 0,
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }
}

impl PostRepository for SqlitePostRepository {
    fn save(&self, post: &Post) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO posts (
                id, title, content, author, category, tags, featured_image,
                views, comments, published, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                post.id.to_string(),
                post.title,
                post.content,
                post.author,
                post.category,
                post.tags.join(","),
                post.featured_image,
                post.views as i64,
                post.comments as i64,
                post.published as i64,
                post.created_at.to_rfc3339(),
                post.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?1 AND published = 1"
        ))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_post) {
            Ok(post) => Ok(Some(post)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_published(&self, limit: u32, offset: u32) -> AppResult<Vec<Post>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE published = 1
             ORDER BY created_at DESC
             LIMIT ?1 OFFSET ?2"
        ))?;

        let posts = stmt
            .query_map(params![limit, offset], Self::row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    fn list_by_category(&self, category: &str) -> AppResult<Vec<Post>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE published = 1 AND LOWER(category) = LOWER(?1)
             ORDER BY created_at DESC"
        ))?;

        let posts = stmt
            .query_map(params![category], Self::row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    fn search(&self, query: &str, limit: u32) -> AppResult<Vec<Post>> {
        let conn = self.pool.get()?;
        let search_term = format!("%{}%", query);

        let mut stmt = conn.prepare(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE published = 1 AND (title LIKE ?1 OR content LIKE ?1 OR tags LIKE ?1)
             ORDER BY created_at DESC
             LIMIT ?2"
        ))?;

        let posts = stmt
            .query_map(params![search_term, limit], Self::row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }
}
