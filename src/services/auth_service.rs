// src/services/auth_service.rs
//
// Registration, login, logout, and session lookup.
//
// Password storage: "{salt}${digest_hex}" where digest = SHA-256(salt || password)
// and salt is a random 128-bit value in hex. Sessions are UUID tokens persisted
// in user_sessions; the HTTP layer carries them in a cookie.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::user::{validate_password, validate_username, User};
use crate::domain::{DomainError, DomainResult, Session};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, UserLoggedIn, UserRegistered};
use crate::repositories::{SessionRepository, UserRepository};

/// How long a freshly minted session stays valid.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Compiled validation rules for credentials.
pub struct CredentialRules {
    email_pattern: Regex,
}

impl Default for CredentialRules {
    fn default() -> Self {
        Self {
            email_pattern: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap(),
        }
    }
}

impl CredentialRules {
    pub fn validate_email(&self, email: &str) -> DomainResult<()> {
        if !self.email_pattern.is_match(email) {
            return Err(DomainError::InvariantViolation(
                "Invalid email format".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    event_bus: Arc<EventBus>,
    rules: CredentialRules,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            event_bus,
            rules: CredentialRules::default(),
        }
    }

    pub fn register_user(&self, request: RegisterUserRequest) -> AppResult<Uuid> {
        validate_username(&request.username).map_err(AppError::Domain)?;
        self.rules
            .validate_email(&request.email)
            .map_err(AppError::Domain)?;
        validate_password(&request.password).map_err(AppError::Domain)?;

        if self.user_repo.get_by_email(&request.email)?.is_some() {
            return Err(AppError::Validation("Email already registered".to_string()));
        }
        if self.user_repo.get_by_username(&request.username)?.is_some() {
            return Err(AppError::Validation("Username already taken".to_string()));
        }

        let password_hash = hash_password(&request.password);
        let user = User::new(request.username, request.email, password_hash);
        self.user_repo.create(&user)?;

        self.event_bus
            .emit(UserRegistered::new(user.id, user.username.clone()));

        Ok(user.id)
    }

    /// Verify credentials and mint a persisted session.
    ///
    /// Lookup and verification failures share one message so the response
    /// does not reveal which half was wrong.
    pub fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let user = self
            .user_repo
            .get_by_email(email)?
            .ok_or_else(|| AppError::Validation("Invalid email or password".to_string()))?;

        if !verify_password(&user.password_hash, password) {
            return Err(AppError::Validation(
                "Invalid email or password".to_string(),
            ));
        }

        let session = Session::new(user.id, SESSION_TTL_DAYS);
        self.session_repo.create(&session)?;

        self.event_bus
            .emit(UserLoggedIn::new(user.id, session.token));

        Ok(session)
    }

    /// Revoke the session behind a token. Returns false for unknown tokens.
    pub fn logout(&self, token: Uuid) -> AppResult<bool> {
        self.session_repo.revoke(token)
    }

    /// Resolve a session token to its user, if the session is still live.
    pub fn current_user(&self, token: Uuid) -> AppResult<Option<User>> {
        let session = match self.session_repo.get_active(token)? {
            Some(session) => session,
            None => return Ok(None),
        };
        self.user_repo.get_by_id(session.user_id)
    }
}

pub(crate) fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest_hex(&salt, password))
}

pub(crate) fn verify_password(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_hex(salt, password) == digest,
        None => false,
    }
}

fn digest_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_roundtrip() {
        let stored = hash_password("Sup3rSecret");
        assert!(verify_password(&stored, "Sup3rSecret"));
        assert!(!verify_password(&stored, "Sup3rSecret!"));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("Sup3rSecret");
        let b = hash_password("Sup3rSecret");
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_never_verifies() {
        assert!(!verify_password("not-a-real-hash", "anything"));
    }

    #[test]
    fn test_email_rules() {
        let rules = CredentialRules::default();
        assert!(rules.validate_email("alice@example.com").is_ok());
        assert!(rules.validate_email("not-an-email").is_err());
        assert!(rules.validate_email("missing@tld").is_err());
    }
}
