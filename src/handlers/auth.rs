use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::{AppError, FieldError};
use crate::services::auth;
use crate::state::AppState;

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

// POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut errors = vec![];
    let email = body.email.trim().to_string();
    if !email.contains('@') {
        errors.push(FieldError::new("email", "Please enter a valid email"));
    }
    if body.password.chars().count() < 6 {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let session = {
        let db = state.db.lock().unwrap();
        let _ = queries::delete_expired_sessions(&db);
        auth::login(&db, &state.config.auth_secret, &email, &body.password)?
    };

    let session = session.ok_or(AppError::InvalidCredentials)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "token": session.token,
        "user": {
            "name": session.user.name,
            "role": session.user.role,
        },
    })))
}

// POST /api/auth/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;

    let removed = {
        let db = state.db.lock().unwrap();
        auth::logout(&db, token)?
    };

    if !removed {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
