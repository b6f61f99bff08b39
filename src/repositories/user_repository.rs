// src/repositories/user_repository.rs
//
// User persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::user::{User, UserProfile};
use crate::error::{AppError, AppResult};

pub trait UserRepository: Send + Sync {
    /// Persist a new user together with its empty profile row.
    fn create(&self, user: &User) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;
    fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
    fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;
    fn update_profile(&self, profile: &UserProfile) -> AppResult<bool>;
    /// Soft delete: marks the user inactive, lookups stop returning it.
    fn deactivate(&self, id: Uuid) -> AppResult<bool>;
    fn list(&self, limit: u32, offset: u32) -> AppResult<Vec<User>>;
    fn search(&self, query: &str, limit: u32) -> AppResult<Vec<User>>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to User - returns rusqlite::Error for query_map compatibility
    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let is_active: i64 = row.get("is_active")?;

        Ok(User {
            id,
            username: row.get("username")?,
            email: row.get("email")?,
            password_hash: row.get("password_hash")?,
            is_active: is_active != 0,
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }

    fn row_to_profile(row: &Row) -> Result<UserProfile, rusqlite::Error> {
        let user_id_str: String = row.get("user_id")?;
        let user_id = Uuid::parse_str(&user_id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(UserProfile {
            user_id,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            bio: row.get("bio")?,
            avatar_url: row.get("avatar_url")?,
            created_at: parse_timestamp(row, "created_at")?,
            updated_at: parse_timestamp(row, "updated_at")?,
        })
    }

    fn get_by_column(&self, column: &str, value: &str) -> AppResult<Option<User>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT id, username, email, password_hash, is_active, created_at, updated_at
             FROM users WHERE {} = ?1 AND is_active = 1",
            column
        );
        let mut stmt = conn.prepare(&sql)?;

        match stmt.query_row(params![value], Self::row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}

pub(crate) fn parse_timestamp(row: &Row, column: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: &User) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO users (id, username, email, password_hash, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                user.id.to_string(),
                user.username,
                user.email,
                user.password_hash,
                user.is_active as i64,
                user.created_at.to_rfc3339(),
                user.updated_at.to_rfc3339(),
            ],
        )?;

        // Default profile row, created alongside the user
        let profile = UserProfile::empty(user.id);
        conn.execute(
            "INSERT INTO user_profiles (user_id, first_name, last_name, bio, avatar_url, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                profile.user_id.to_string(),
                profile.first_name,
                profile.last_name,
                profile.bio,
                profile.avatar_url,
                profile.created_at.to_rfc3339(),
                profile.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.get_by_column("id", &id.to_string())
    }

    fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.get_by_column("email", email)
    }

    fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.get_by_column("username", username)
    }

    fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT user_id, first_name, last_name, bio, avatar_url, created_at, updated_at
             FROM user_profiles WHERE user_id = ?1",
        )?;

        match stmt.query_row(params![user_id.to_string()], Self::row_to_profile) {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn update_profile(&self, profile: &UserProfile) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let changed = conn.execute(
            "UPDATE user_profiles
             SET first_name = ?2, last_name = ?3, bio = ?4, avatar_url = ?5, updated_at = ?6
             WHERE user_id = ?1",
            params![
                profile.user_id.to_string(),
                profile.first_name,
                profile.last_name,
                profile.bio,
                profile.avatar_url,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(changed > 0)
    }

    fn deactivate(&self, id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let changed = conn.execute(
            "UPDATE users SET is_active = 0, updated_at = ?2 WHERE id = ?1",
            params![id.to_string(), Utc::now().to_rfc3339()],
        )?;

        Ok(changed > 0)
    }

    fn list(&self, limit: u32, offset: u32) -> AppResult<Vec<User>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, username, email, password_hash, is_active, created_at, updated_at
             FROM users WHERE is_active = 1
             ORDER BY created_at DESC
             LIMIT ?1 OFFSET ?2",
        )?;

        let users = stmt
            .query_map(params![limit, offset], Self::row_to_user)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    fn search(&self, query: &str, limit: u32) -> AppResult<Vec<User>> {
        let conn = self.pool.get()?;
        let search_term = format!("%{}%", query);

        let mut stmt = conn.prepare(
            "SELECT id, username, email, password_hash, is_active, created_at, updated_at
             FROM users
             WHERE is_active = 1 AND (username LIKE ?1 OR email LIKE ?1)
             ORDER BY username
             LIMIT ?2",
        )?;

        let users = stmt
            .query_map(params![search_term, limit], Self::row_to_user)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }
}
