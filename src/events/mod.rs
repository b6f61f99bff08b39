// src/events/mod.rs
//
// Event system
//
// Services emit facts; the factory subscribes observers. Nothing in the
// request path depends on a handler running.

pub mod bus;
pub mod types;

pub use bus::EventBus;
pub use types::{DomainEvent, MessageSent, PostCreated, UserLoggedIn, UserRegistered};
