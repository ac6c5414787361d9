use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingRequest};
use crate::services::pricing;
use crate::state::AppState;

// GET /api/estimate
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateQuery {
    pub time_slot: String,
    pub guests: i64,
}

/// Live estimate for the booking form. An unknown slot is "no estimate
/// available", never a zero price.
pub async fn get_estimate(
    Query(query): Query<EstimateQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    match pricing::estimate(&query.time_slot, query.guests) {
        Some(price) => Ok(Json(serde_json::json!({
            "success": true,
            "estimatedPrice": price,
        }))),
        None => Err(AppError::BadRequest("no estimate available".to_string())),
    }
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookingRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let today = Utc::now().date_naive();
    let valid = body.validate(today).map_err(AppError::Validation)?;
    let booking = Booking::new(valid);

    {
        let db = state.db.lock().unwrap();
        queries::create_booking(&db, &booking)?;
    }

    tracing::info!(
        booking_id = %booking.id,
        event_type = booking.event_type.as_str(),
        date = %booking.date,
        guests = booking.guests,
        estimated_price = booking.estimated_price,
        "booking request received"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Booking request submitted successfully! We will contact you soon.",
    })))
}
