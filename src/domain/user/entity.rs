use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` stores `"{salt_hex}${digest_hex}"`; the hashing scheme
/// itself lives in the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Internal immutable identifier
    pub id: Uuid,

    pub username: String,

    pub email: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Soft-delete flag; inactive users are invisible to lookups
    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active User entity
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Optional profile attached to a user. Created empty at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            first_name: None,
            last_name: None,
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
