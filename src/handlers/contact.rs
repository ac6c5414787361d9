use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::ContactRequest;
use crate::state::AppState;

// POST /api/contact
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let message = body.validate().map_err(AppError::Validation)?;

    {
        let db = state.db.lock().unwrap();
        queries::create_contact(&db, &message)?;
    }

    tracing::info!(message_id = %message.id, subject = %message.subject, "contact message received");

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Message sent successfully! We will get back to you soon.",
    })))
}
