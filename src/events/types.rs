// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted when a new account is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
}

impl UserRegistered {
    pub fn new(user_id: Uuid, username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            username,
        }
    }
}

impl DomainEvent for UserRegistered {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "UserRegistered"
    }
}

/// Emitted on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub session_token: Uuid,
}

impl UserLoggedIn {
    pub fn new(user_id: Uuid, session_token: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
            session_token,
        }
    }
}

impl DomainEvent for UserLoggedIn {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "UserLoggedIn"
    }
}

/// Emitted when a blog post is published
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub post_id: Uuid,
    pub title: String,
}

impl PostCreated {
    pub fn new(post_id: Uuid, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            post_id,
            title,
        }
    }
}

impl DomainEvent for PostCreated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "PostCreated"
    }
}

/// Emitted when the chat module accepts a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub room_id: u32,
    pub length: usize,
}

impl MessageSent {
    pub fn new(room_id: u32, length: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            room_id,
            length,
        }
    }
}

impl DomainEvent for MessageSent {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "MessageSent"
    }
}
