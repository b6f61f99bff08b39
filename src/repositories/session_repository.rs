// src/repositories/session_repository.rs
//
// Login session persistence

use chrono::Utc;
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::session::Session;
use crate::error::{AppError, AppResult};
use crate::repositories::user_repository::parse_timestamp;

pub trait SessionRepository: Send + Sync {
    fn create(&self, session: &Session) -> AppResult<()>;
    /// Active, unexpired session for the token, if any.
    fn get_active(&self, token: Uuid) -> AppResult<Option<Session>>;
    fn revoke(&self, token: Uuid) -> AppResult<bool>;
    /// Delete rows whose expiry has passed; returns how many were removed.
    fn purge_expired(&self) -> AppResult<usize>;
}

pub struct SqliteSessionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &Row) -> Result<Session, rusqlite::Error> {
        let token_str: String = row.get("token")?;
        let token = Uuid::parse_str(&token_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let user_id_str: String = row.get("user_id")?;
        let user_id = Uuid::parse_str(&user_id_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let is_active: i64 = row.get("is_active")?;

        Ok(Session {
            token,
            user_id,
            is_active: is_active != 0,
            created_at: parse_timestamp(row, "created_at")?,
            expires_at: parse_timestamp(row, "expires_at")?,
        })
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn create(&self, session: &Session) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO user_sessions (token, user_id, is_active, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session.token.to_string(),
                session.user_id.to_string(),
                session.is_active as i64,
                session.created_at.to_rfc3339(),
                session.expires_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_active(&self, token: Uuid) -> AppResult<Option<Session>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT token, user_id, is_active, created_at, expires_at
             FROM user_sessions
             WHERE token = ?1 AND is_active = 1 AND expires_at > ?2",
        )?;

        match stmt.query_row(
            params![token.to_string(), Utc::now().to_rfc3339()],
            Self::row_to_session,
        ) {
            Ok(session) => Ok(Some(session)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn revoke(&self, token: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let changed = conn.execute(
            "UPDATE user_sessions SET is_active = 0 WHERE token = ?1",
            params![token.to_string()],
        )?;

        Ok(changed > 0)
    }

    fn purge_expired(&self) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let removed = conn.execute(
            "DELETE FROM user_sessions WHERE expires_at <= ?1",
            params![Utc::now().to_rfc3339()],
        )?;

        Ok(removed)
    }
}
