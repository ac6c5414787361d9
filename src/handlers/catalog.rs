//! Read-only venue content for the public pages.

use axum::Json;
use serde::Serialize;

use crate::models::catalog::{FACILITIES, MENU_CATEGORIES, VENUE_INFO};
use crate::models::time_slot::TIME_SLOTS;

// GET /api/venue
pub async fn get_venue() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "venue": VENUE_INFO,
        "facilities": FACILITIES,
    }))
}

// GET /api/menu
pub async fn get_menu() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "categories": MENU_CATEGORIES,
    }))
}

// GET /api/slots
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotResponse {
    id: &'static str,
    label: &'static str,
    base_price: i64,
}

pub async fn get_slots() -> Json<serde_json::Value> {
    let slots: Vec<SlotResponse> = TIME_SLOTS
        .iter()
        .map(|s| SlotResponse {
            id: s.id,
            label: s.label,
            base_price: s.base_price,
        })
        .collect();

    Json(serde_json::json!({ "success": true, "timeSlots": slots }))
}
