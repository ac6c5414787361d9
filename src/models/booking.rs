use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::FieldError;
use crate::models::time_slot::{self, TimeSlot};
use crate::services::pricing;

pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Wedding,
    Reception,
    Engagement,
    Birthday,
    Corporate,
    Anniversary,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Reception => "reception",
            EventType::Engagement => "engagement",
            EventType::Birthday => "birthday",
            EventType::Corporate => "corporate",
            EventType::Anniversary => "anniversary",
            EventType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Reception => "Reception",
            EventType::Engagement => "Engagement",
            EventType::Birthday => "Birthday Party",
            EventType::Corporate => "Corporate Event",
            EventType::Anniversary => "Anniversary",
            EventType::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wedding" => Some(EventType::Wedding),
            "reception" => Some(EventType::Reception),
            "engagement" => Some(EventType::Engagement),
            "birthday" => Some(EventType::Birthday),
            "corporate" => Some(EventType::Corporate),
            "anniversary" => Some(EventType::Anniversary),
            "other" => Some(EventType::Other),
            _ => None,
        }
    }

    pub const ALL: [EventType; 7] = [
        EventType::Wedding,
        EventType::Reception,
        EventType::Engagement,
        EventType::Birthday,
        EventType::Corporate,
        EventType::Anniversary,
        EventType::Other,
    ];
}

/// A persisted booking. Status only changes through explicit admin
/// transitions; the record never moves on its own.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time_slot: String,
    pub guests: i64,
    pub special_requests: Option<String>,
    pub estimated_price: i64,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Booking {
    pub fn new(valid: NewBooking) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            event_type: valid.event_type,
            date: valid.date,
            time_slot: valid.slot.id.to_string(),
            guests: valid.guests,
            special_requests: valid.special_requests,
            estimated_price: valid.estimated_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Wire payload of the booking form, camelCase to match the frontend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
    pub guests: Option<i64>,
    pub special_requests: Option<String>,
    pub estimated_price: Option<i64>,
}

/// A booking request that passed every field check, with the price the
/// server computed for it.
#[derive(Debug)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    pub slot: &'static TimeSlot,
    pub guests: i64,
    pub special_requests: Option<String>,
    pub estimated_price: i64,
}

impl BookingRequest {
    /// Field-level validation. Mirrors the rules the client form enforces;
    /// the server figure is authoritative when the two disagree.
    pub fn validate(self, today: NaiveDate) -> Result<NewBooking, Vec<FieldError>> {
        let mut errors = vec![];

        let name = self.name.trim().to_string();
        if name.chars().count() < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        }

        let email = self.email.trim().to_string();
        if !is_plausible_email(&email) {
            errors.push(FieldError::new("email", "Please enter a valid email"));
        }

        let phone = self.phone.trim().to_string();
        if digit_count(&phone) < 10 {
            errors.push(FieldError::new(
                "phone",
                "Phone number must be at least 10 digits",
            ));
        }

        let event_type = EventType::parse(self.event_type.trim());
        if event_type.is_none() {
            errors.push(FieldError::new("eventType", "Please select an event type"));
        }

        let slot = time_slot::find_slot(self.time_slot.trim());
        if slot.is_none() {
            errors.push(FieldError::new("timeSlot", "Please select a time slot"));
        }

        let guests = self.guests.unwrap_or(0);
        if guests < MIN_GUESTS {
            errors.push(FieldError::new("guests", "Number of guests is required"));
        } else if guests > MAX_GUESTS {
            errors.push(FieldError::new("guests", "Maximum 500 guests allowed"));
        }

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(d) if d < today => {
                errors.push(FieldError::new("date", "Event date cannot be in the past"));
                None
            }
            Ok(d) => Some(d),
            Err(_) => {
                errors.push(FieldError::new("date", "Please select a date"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // All Options are Some once errors is empty.
        let (event_type, slot, date) = match (event_type, slot, date) {
            (Some(e), Some(s), Some(d)) => (e, s, d),
            _ => return Err(errors),
        };

        let estimated_price = pricing::surcharged_price(slot.base_price, guests);
        if let Some(client_price) = self.estimated_price {
            if client_price != estimated_price {
                tracing::warn!(
                    client_price,
                    server_price = estimated_price,
                    "client price estimate diverges, using server figure"
                );
            }
        }

        let special_requests = self
            .special_requests
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(NewBooking {
            name,
            email,
            phone,
            event_type,
            date,
            slot,
            guests,
            special_requests,
            estimated_price,
        })
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

fn is_plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Asha Patil".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 93595 25834".to_string(),
            event_type: "wedding".to_string(),
            date: "2025-09-20".to_string(),
            time_slot: "evening".to_string(),
            guests: Some(150),
            special_requests: Some("Stage decoration".to_string()),
            estimated_price: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn field_names(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_request() {
        let valid = request().validate(today()).unwrap();
        assert_eq!(valid.event_type, EventType::Wedding);
        assert_eq!(valid.slot.id, "evening");
        assert_eq!(valid.estimated_price, 25000);
        assert_eq!(valid.special_requests.as_deref(), Some("Stage decoration"));
    }

    #[test]
    fn test_surcharge_applied_to_stored_price() {
        let mut req = request();
        req.guests = Some(250);
        let valid = req.validate(today()).unwrap();
        assert_eq!(valid.estimated_price, 25000 + 50 * 100);
    }

    #[test]
    fn test_client_price_is_not_trusted() {
        let mut req = request();
        req.estimated_price = Some(1);
        let valid = req.validate(today()).unwrap();
        assert_eq!(valid.estimated_price, 25000);
    }

    #[test]
    fn test_short_name_rejected() {
        let mut req = request();
        req.name = " A ".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(field_names(&errors), vec!["name"]);
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["", "plain", "a@b", "@example.com", "a@.com"] {
            let mut req = request();
            req.email = email.to_string();
            let errors = req.validate(today()).unwrap_err();
            assert!(field_names(&errors).contains(&"email"), "email {email:?}");
        }
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut req = request();
        req.phone = "12345".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(field_names(&errors), vec!["phone"]);
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let mut req = request();
        req.event_type = "concert".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(field_names(&errors), vec!["eventType"]);
    }

    #[test]
    fn test_unknown_time_slot_rejected() {
        let mut req = request();
        req.time_slot = "midnight".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(field_names(&errors), vec!["timeSlot"]);
    }

    #[test]
    fn test_guest_count_bounds() {
        for guests in [0, -5] {
            let mut req = request();
            req.guests = Some(guests);
            let errors = req.validate(today()).unwrap_err();
            assert_eq!(field_names(&errors), vec!["guests"], "guests {guests}");
        }

        let mut req = request();
        req.guests = Some(501);
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(errors[0].message, "Maximum 500 guests allowed");

        let mut req = request();
        req.guests = None;
        assert!(req.validate(today()).is_err());

        for guests in [1, 500] {
            let mut req = request();
            req.guests = Some(guests);
            assert!(req.validate(today()).is_ok(), "guests {guests}");
        }
    }

    #[test]
    fn test_past_date_rejected() {
        let mut req = request();
        req.date = "2025-06-15".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(errors[0].message, "Event date cannot be in the past");
    }

    #[test]
    fn test_today_is_allowed() {
        let mut req = request();
        req.date = "2025-06-16".to_string();
        assert!(req.validate(today()).is_ok());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut req = request();
        req.date = "20/09/2025".to_string();
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(field_names(&errors), vec!["date"]);
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let req = BookingRequest {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            event_type: String::new(),
            date: String::new(),
            time_slot: String::new(),
            guests: None,
            special_requests: None,
            estimated_price: None,
        };
        let errors = req.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let valid = request().validate(today()).unwrap();
        let booking = Booking::new(valid);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.id.is_empty());
    }

    #[test]
    fn test_status_parse_is_strict() {
        assert_eq!(BookingStatus::parse("pending"), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::parse("confirmed"), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("cancelled"), Some(BookingStatus::Cancelled));
        assert_eq!(BookingStatus::parse("deleted"), None);
        assert_eq!(BookingStatus::parse("Pending"), None);
    }

    #[test]
    fn test_event_type_round_trip() {
        for event in EventType::ALL {
            assert_eq!(EventType::parse(event.as_str()), Some(event));
        }
        assert_eq!(EventType::parse("gala"), None);
    }
}
