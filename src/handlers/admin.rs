use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::queries::{self, DashboardStats};
use crate::errors::AppError;
use crate::handlers::auth::bearer_token;
use crate::models::{Booking, BookingStatus, ContactMessage, User};
use crate::services::{auth, workflow};
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 100;

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;

    let session = {
        let db = state.db.lock().unwrap();
        auth::authenticate(&db, token)?
    };

    let session = session.ok_or(AppError::Unauthorized)?;
    if !session.user.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(session.user)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    total_bookings: i64,
    pending_bookings: i64,
    confirmed_bookings: i64,
    total_revenue: i64,
    monthly_revenue: i64,
}

impl From<DashboardStats> for StatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_bookings: stats.total_bookings,
            pending_bookings: stats.pending_bookings,
            confirmed_bookings: stats.confirmed_bookings,
            total_revenue: stats.total_revenue,
            monthly_revenue: stats.monthly_revenue,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    id: String,
    name: String,
    email: String,
    phone: String,
    event_type: String,
    date: NaiveDate,
    time_slot: String,
    guests: i64,
    special_requests: Option<String>,
    estimated_price: i64,
    status: String,
    created_at: String,
    updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            name: b.name,
            email: b.email,
            phone: b.phone,
            event_type: b.event_type.as_str().to_string(),
            date: b.date,
            time_slot: b.time_slot,
            guests: b.guests,
            special_requests: b.special_requests,
            estimated_price: b.estimated_price,
            status: b.status.as_str().to_string(),
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: b.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    id: String,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    created_at: String,
}

impl From<ContactMessage> for ContactResponse {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.message,
            created_at: m.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;

    let stats = {
        let db = state.db.lock().unwrap();
        queries::dashboard_stats(&db)?
    };

    Ok(Json(serde_json::json!({
        "success": true,
        "stats": StatsResponse::from(stats),
    })))
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;

    let status_filter = match query.status.as_deref() {
        Some(s) => Some(
            BookingStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status filter: {s}")))?,
        ),
        None => None,
    };
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::get_all_bookings(&db, status_filter.map(|s| s.as_str()), limit)?
    };

    let bookings: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(serde_json::json!({ "success": true, "bookings": bookings })))
}

// GET /api/admin/contacts
#[derive(Deserialize)]
pub struct ContactsQuery {
    pub limit: Option<i64>,
}

pub async fn get_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ContactsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;

    let contacts = {
        let db = state.db.lock().unwrap();
        queries::get_contacts(&db, query.limit.unwrap_or(DEFAULT_LIST_LIMIT))?
    };

    let contacts: Vec<ContactResponse> = contacts.into_iter().map(Into::into).collect();
    Ok(Json(serde_json::json!({ "success": true, "contacts": contacts })))
}

// PATCH /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    #[serde(default)]
    pub status: String,
}

/// Applies a workflow transition and hands back refreshed aggregates so the
/// dashboard can replace its whole view instead of patching counters.
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;

    let to = BookingStatus::parse(&body.status)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", body.status)))?;

    let (booking, stats) = {
        let db = state.db.lock().unwrap();
        let booking = workflow::apply_transition(&db, &id, to)?;
        let stats = queries::dashboard_stats(&db)?;
        (booking, stats)
    };

    Ok(Json(serde_json::json!({
        "success": true,
        "booking": BookingResponse::from(booking),
        "stats": StatsResponse::from(stats),
    })))
}

// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;

    let stats = {
        let db = state.db.lock().unwrap();
        if !queries::delete_booking(&db, &id)? {
            return Err(AppError::NotFound("booking not found".to_string()));
        }
        queries::dashboard_stats(&db)?
    };

    tracing::info!(booking_id = %id, "booking deleted");

    Ok(Json(serde_json::json!({
        "success": true,
        "stats": StatsResponse::from(stats),
    })))
}
