use serde::Serialize;

/// A bookable time window with its base price in whole rupees.
///
/// The catalog is fixed at compile time; slot ids are the stable keys the
/// booking form submits.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlot {
    pub id: &'static str,
    pub label: &'static str,
    pub base_price: i64,
}

pub const TIME_SLOTS: [TimeSlot; 4] = [
    TimeSlot {
        id: "morning",
        label: "Morning (6:00 AM - 12:00 PM)",
        base_price: 15000,
    },
    TimeSlot {
        id: "afternoon",
        label: "Afternoon (12:00 PM - 6:00 PM)",
        base_price: 20000,
    },
    TimeSlot {
        id: "evening",
        label: "Evening (6:00 PM - 12:00 AM)",
        base_price: 25000,
    },
    TimeSlot {
        id: "fullday",
        label: "Full Day (6:00 AM - 12:00 AM)",
        base_price: 45000,
    },
];

pub fn find_slot(id: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_slots() {
        assert_eq!(TIME_SLOTS.len(), 4);
    }

    #[test]
    fn test_find_known_slot() {
        let slot = find_slot("morning").unwrap();
        assert_eq!(slot.base_price, 15000);
        let slot = find_slot("fullday").unwrap();
        assert_eq!(slot.base_price, 45000);
    }

    #[test]
    fn test_find_unknown_slot() {
        assert!(find_slot("midnight").is_none());
        assert!(find_slot("").is_none());
        assert!(find_slot("Morning").is_none());
    }
}
