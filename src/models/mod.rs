pub mod booking;
pub mod catalog;
pub mod contact;
pub mod time_slot;
pub mod user;

pub use booking::{Booking, BookingRequest, BookingStatus, EventType, NewBooking};
pub use contact::{ContactMessage, ContactRequest};
pub use time_slot::TimeSlot;
pub use user::{SessionUser, User};
