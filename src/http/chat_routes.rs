// src/http/chat_routes.rs
//
// Chat pages and the send API. Data is fixture-backed; see ChatService.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::{PageContext, SendMessageDto};
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::http::page_context;
use crate::services::chat_service::{ChatRoom, Conversation, RoomView, SentMessage};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", get(chat_home))
        .route("/chat/room/:room_id", get(chat_room))
        .route("/chat/api/send", post(send_message))
        .route("/chat/direct", get(direct_messages))
}

#[derive(Serialize)]
struct ChatHomePage {
    context: PageContext,
    rooms: Vec<ChatRoom>,
}

async fn chat_home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Json<ChatHomePage>> {
    let rooms = state.chat()?.rooms();
    Ok(Json(ChatHomePage {
        context: page_context(&state, &headers),
        rooms,
    }))
}

#[derive(Serialize)]
struct ChatRoomPage {
    context: PageContext,
    #[serde(flatten)]
    view: RoomView,
}

async fn chat_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<u32>,
    headers: HeaderMap,
) -> AppResult<Json<ChatRoomPage>> {
    let view = state.chat()?.room(room_id);
    Ok(Json(ChatRoomPage {
        context: page_context(&state, &headers),
        view,
    }))
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(dto): Json<SendMessageDto>,
) -> AppResult<Json<SentMessage>> {
    let room_id = dto.room_id.unwrap_or(1);

    // Signed-in senders are echoed under their own name
    let user = crate::http::current_user_from_headers(&state, &headers);
    let username = user.authenticated.then_some(user.username);

    let sent = state.chat()?.send_message(room_id, dto.message, username);
    Ok(Json(sent))
}

#[derive(Serialize)]
struct DirectMessagesPage {
    context: PageContext,
    conversations: Vec<Conversation>,
}

async fn direct_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Json<DirectMessagesPage>> {
    let conversations = state.chat()?.conversations();
    Ok(Json(DirectMessagesPage {
        context: page_context(&state, &headers),
        conversations,
    }))
}
