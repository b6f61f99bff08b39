// src/services/chat_service.rs
//
// Chat rooms and direct messages.
//
// Room and message data are static fixtures: there is no live transport, and
// the send endpoint only echoes. The module still depends on `database` in
// the catalog so persistence can land here without re-wiring dependents.

use chrono::Local;
use serde::Serialize;
use std::sync::Arc;

use crate::events::{EventBus, MessageSent};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRoom {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub users_online: u32,
    pub last_message: String,
    pub last_activity: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub username: String,
    pub message: String,
    pub timestamp: String,
    pub is_own_message: bool,
}

/// One room plus its recent messages.
#[derive(Debug, Clone, Serialize)]
pub struct RoomView {
    pub room: ChatRoom,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: u32,
    pub username: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
    pub online: bool,
}

/// Echo payload returned by the send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SentMessage {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub username: String,
}

pub struct ChatService {
    event_bus: Arc<EventBus>,
}

impl ChatService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    pub fn rooms(&self) -> Vec<ChatRoom> {
        vec![
            ChatRoom {
                id: 1,
                name: "General".to_string(),
                description: "General discussion for everyone".to_string(),
                users_online: 12,
                last_message: "Welcome to the chat!".to_string(),
                last_activity: "2 minutes ago".to_string(),
            },
            ChatRoom {
                id: 2,
                name: "Tech Talk".to_string(),
                description: "Programming and technology discussions".to_string(),
                users_online: 8,
                last_message: "Anyone working with Rust?".to_string(),
                last_activity: "5 minutes ago".to_string(),
            },
            ChatRoom {
                id: 3,
                name: "Random".to_string(),
                description: "Off-topic conversations".to_string(),
                users_online: 15,
                last_message: "Coffee or tea?".to_string(),
                last_activity: "1 minute ago".to_string(),
            },
        ]
    }

    /// Room detail for any id: known ids get their fixture, everything else
    /// falls back to the Random room shape.
    pub fn room(&self, room_id: u32) -> RoomView {
        let room = self
            .rooms()
            .into_iter()
            .find(|room| room.id == room_id)
            .unwrap_or_else(|| ChatRoom {
                id: room_id,
                name: "Random".to_string(),
                description: "Off-topic conversations".to_string(),
                users_online: 12,
                last_message: String::new(),
                last_activity: String::new(),
            });

        let messages = vec![
            ChatMessage {
                id: 1,
                username: "Alice".to_string(),
                message: "Hey everyone!".to_string(),
                timestamp: "10:30 AM".to_string(),
                is_own_message: false,
            },
            ChatMessage {
                id: 2,
                username: "Bob".to_string(),
                message: "How is everyone doing today?".to_string(),
                timestamp: "10:32 AM".to_string(),
                is_own_message: false,
            },
            ChatMessage {
                id: 3,
                username: "You".to_string(),
                message: "Great! Just joined the chat".to_string(),
                timestamp: "10:35 AM".to_string(),
                is_own_message: true,
            },
        ];

        RoomView { room, messages }
    }

    /// Accept a message and echo it back stamped with the server clock.
    pub fn send_message(&self, room_id: u32, message: String, username: Option<String>) -> SentMessage {
        self.event_bus
            .emit(MessageSent::new(room_id, message.chars().count()));

        SentMessage {
            success: true,
            message,
            timestamp: Local::now().format("%I:%M %p").to_string(),
            username: username.unwrap_or_else(|| "You".to_string()),
        }
    }

    pub fn conversations(&self) -> Vec<Conversation> {
        vec![
            Conversation {
                id: 1,
                username: "Alice".to_string(),
                last_message: "Thanks for the help!".to_string(),
                timestamp: "5 min ago".to_string(),
                unread_count: 2,
                online: true,
            },
            Conversation {
                id: 2,
                username: "Bob".to_string(),
                last_message: "See you tomorrow".to_string(),
                timestamp: "1 hour ago".to_string(),
                unread_count: 0,
                online: false,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChatService {
        ChatService::new(Arc::new(EventBus::new()))
    }

    #[test]
    fn test_room_fixtures() {
        let service = service();
        let rooms = service.rooms();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[0].name, "General");
    }

    #[test]
    fn test_known_room_detail() {
        let service = service();
        let view = service.room(2);
        assert_eq!(view.room.name, "Tech Talk");
        assert_eq!(view.messages.len(), 3);
        assert!(view.messages[2].is_own_message);
    }

    #[test]
    fn test_unknown_room_falls_back() {
        let service = service();
        let view = service.room(99);
        assert_eq!(view.room.id, 99);
        assert_eq!(view.room.name, "Random");
    }

    #[test]
    fn test_send_echoes_message() {
        let service = service();
        let sent = service.send_message(1, "hello".to_string(), None);
        assert!(sent.success);
        assert_eq!(sent.message, "hello");
        assert_eq!(sent.username, "You");
        assert!(!sent.timestamp.is_empty());
    }
}
