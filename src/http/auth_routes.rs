// src/http/auth_routes.rs
//
// Registration, login, and logout endpoints.
//
// Expected-failure paths (bad credentials, taken email) come back as
// success=false payloads rather than HTTP errors, mirroring flash messages;
// infrastructure failures still surface as error responses.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::application::dto::{AuthResponseDto, LoginDto, RegisterDto};
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::http::{session_token, SESSION_COOKIE};
use crate::services::auth_service::{RegisterUserRequest, SESSION_TTL_DAYS};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

fn rejection(message: String) -> Json<AuthResponseDto> {
    Json(AuthResponseDto {
        success: false,
        message,
    })
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<RegisterDto>,
) -> AppResult<Json<AuthResponseDto>> {
    if dto.password != dto.confirm_password {
        return Ok(rejection("Passwords do not match".to_string()));
    }

    let auth = state.auth()?;
    let request = RegisterUserRequest {
        username: dto.username,
        email: dto.email,
        password: dto.password,
    };

    match auth.register_user(request) {
        Ok(_) => Ok(Json(AuthResponseDto {
            success: true,
            message: "User registered successfully".to_string(),
        })),
        Err(AppError::Validation(message)) => Ok(rejection(message)),
        Err(AppError::Domain(err)) => Ok(rejection(err.to_string())),
        Err(err) => Err(err),
    }
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(dto): Json<LoginDto>,
) -> AppResult<(HeaderMap, Json<AuthResponseDto>)> {
    let auth = state.auth()?;

    match auth.login(&dto.email, &dto.password) {
        Ok(session) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::SET_COOKIE,
                session_cookie(&session.token.to_string(), SESSION_TTL_DAYS * 24 * 3600)?,
            );
            Ok((
                headers,
                Json(AuthResponseDto {
                    success: true,
                    message: "Login successful".to_string(),
                }),
            ))
        }
        Err(AppError::Validation(message)) => Ok((HeaderMap::new(), rejection(message))),
        Err(err) => Err(err),
    }
}

async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<(HeaderMap, Json<AuthResponseDto>)> {
    let auth = state.auth()?;

    if let Some(token) = session_token(&headers) {
        auth.logout(token)?;
    }

    // Expire the cookie client-side regardless of whether a session existed
    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::SET_COOKIE, session_cookie("", 0)?);

    Ok((
        response_headers,
        Json(AuthResponseDto {
            success: true,
            message: "You have been logged out".to_string(),
        }),
    ))
}

fn session_cookie(value: &str, max_age_secs: i64) -> AppResult<HeaderValue> {
    let cookie = format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; Max-Age={max_age_secs}");
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Other(format!("Invalid cookie header: {}", e)))
}
