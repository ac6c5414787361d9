//! Booking lifecycle: pending is the only state an admin can act on, and
//! confirm/cancel are its only exits. Deletion is handled separately and is
//! reachable from any state.

use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("booking not found")]
    NotFound,

    #[error("cannot move a {from} booking to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl From<WorkflowError> for AppError {
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::NotFound => AppError::NotFound("booking not found".to_string()),
            WorkflowError::InvalidTransition { .. } => AppError::InvalidTransition(e.to_string()),
            WorkflowError::Database(err) => AppError::Internal(err),
        }
    }
}

/// The full transition table: pending→confirmed and pending→cancelled.
/// Confirmed and cancelled are terminal.
pub fn can_transition(from: BookingStatus, to: BookingStatus) -> bool {
    matches!(
        (from, to),
        (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Pending, BookingStatus::Cancelled)
    )
}

/// Apply an admin-initiated status change and return the updated record.
///
/// Re-validates the transition against the stored status even though the
/// admin UI only offers confirm/cancel on pending rows; a stale view must
/// get an error back, not a silent overwrite.
pub fn apply_transition(
    conn: &Connection,
    id: &str,
    to: BookingStatus,
) -> Result<Booking, WorkflowError> {
    let booking = queries::get_booking_by_id(conn, id)?.ok_or(WorkflowError::NotFound)?;

    if !can_transition(booking.status, to) {
        return Err(WorkflowError::InvalidTransition {
            from: booking.status.as_str(),
            to: to.as_str(),
        });
    }

    queries::update_booking_status(conn, id, to)?;
    tracing::info!(booking_id = %id, from = booking.status.as_str(), to = to.as_str(), "booking status changed");

    queries::get_booking_by_id(conn, id)?.ok_or(WorkflowError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{Booking, BookingRequest};
    use chrono::NaiveDate;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn insert_booking(conn: &Connection) -> Booking {
        let request = BookingRequest {
            name: "Asha Patil".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9359525834".to_string(),
            event_type: "wedding".to_string(),
            date: "2030-01-15".to_string(),
            time_slot: "morning".to_string(),
            guests: Some(100),
            special_requests: None,
            estimated_price: None,
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let booking = Booking::new(request.validate(today).unwrap());
        queries::create_booking(conn, &booking).unwrap();
        booking
    }

    #[test]
    fn test_transition_table() {
        use BookingStatus::*;
        assert!(can_transition(Pending, Confirmed));
        assert!(can_transition(Pending, Cancelled));

        assert!(!can_transition(Pending, Pending));
        assert!(!can_transition(Confirmed, Confirmed));
        assert!(!can_transition(Confirmed, Cancelled));
        assert!(!can_transition(Confirmed, Pending));
        assert!(!can_transition(Cancelled, Confirmed));
        assert!(!can_transition(Cancelled, Pending));
    }

    #[test]
    fn test_confirm_pending_booking() {
        let conn = setup_db();
        let booking = insert_booking(&conn);

        let updated = apply_transition(&conn, &booking.id, BookingStatus::Confirmed).unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_cancel_pending_booking() {
        let conn = setup_db();
        let booking = insert_booking(&conn);

        let updated = apply_transition(&conn, &booking.id, BookingStatus::Cancelled).unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_confirm_twice_is_rejected() {
        let conn = setup_db();
        let booking = insert_booking(&conn);

        apply_transition(&conn, &booking.id, BookingStatus::Confirmed).unwrap();
        let err = apply_transition(&conn, &booking.id, BookingStatus::Confirmed).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));

        // The stored status is untouched by the rejected call.
        let stored = queries::get_booking_by_id(&conn, &booking.id).unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_cancel_after_confirm_is_rejected() {
        let conn = setup_db();
        let booking = insert_booking(&conn);

        apply_transition(&conn, &booking.id, BookingStatus::Confirmed).unwrap();
        let err = apply_transition(&conn, &booking.id, BookingStatus::Cancelled).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::InvalidTransition { from: "confirmed", to: "cancelled" }
        ));
    }

    #[test]
    fn test_transition_to_pending_is_rejected() {
        let conn = setup_db();
        let booking = insert_booking(&conn);

        let err = apply_transition(&conn, &booking.id, BookingStatus::Pending).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    }

    #[test]
    fn test_unknown_booking_is_not_found() {
        let conn = setup_db();
        let err = apply_transition(&conn, "no-such-id", BookingStatus::Confirmed).unwrap_err();
        assert!(matches!(err, WorkflowError::NotFound));
    }

    #[test]
    fn test_delete_reachable_from_any_status() {
        let conn = setup_db();

        let pending = insert_booking(&conn);
        let confirmed = insert_booking(&conn);
        let cancelled = insert_booking(&conn);
        apply_transition(&conn, &confirmed.id, BookingStatus::Confirmed).unwrap();
        apply_transition(&conn, &cancelled.id, BookingStatus::Cancelled).unwrap();

        for id in [&pending.id, &confirmed.id, &cancelled.id] {
            assert!(queries::delete_booking(&conn, id).unwrap());
            assert!(queries::get_booking_by_id(&conn, id).unwrap().is_none());
        }
    }
}
