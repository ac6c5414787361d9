use crate::models::time_slot;

/// Guest count above which per-guest charges kick in.
pub const SURCHARGE_THRESHOLD: i64 = 200;
/// Extra rupees charged per guest above the threshold.
pub const SURCHARGE_PER_GUEST: i64 = 100;

pub fn surcharged_price(base_price: i64, guests: i64) -> i64 {
    if guests > SURCHARGE_THRESHOLD {
        base_price + (guests - SURCHARGE_THRESHOLD) * SURCHARGE_PER_GUEST
    } else {
        base_price
    }
}

/// Price for a slot and guest count, or `None` when the slot id is unknown.
/// "No estimate" is not the same as a zero price; callers must not display
/// or submit a figure when this returns `None`. Guest range checks are the
/// caller's job.
pub fn estimate(time_slot_id: &str, guests: i64) -> Option<i64> {
    let slot = time_slot::find_slot(time_slot_id)?;
    Some(surcharged_price(slot.base_price, guests))
}

/// Running estimate for a form in progress. Keeps the last computed value
/// and only recomputes when one of the two inputs actually changes.
#[derive(Debug, Default)]
pub struct Estimator {
    time_slot: Option<String>,
    guests: Option<i64>,
    cached: Option<i64>,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the input changed and the estimate was recomputed.
    pub fn set_time_slot(&mut self, id: Option<&str>) -> bool {
        if self.time_slot.as_deref() == id {
            return false;
        }
        self.time_slot = id.map(str::to_string);
        self.recompute();
        true
    }

    /// Returns true if the input changed and the estimate was recomputed.
    pub fn set_guests(&mut self, guests: Option<i64>) -> bool {
        if self.guests == guests {
            return false;
        }
        self.guests = guests;
        self.recompute();
        true
    }

    /// The cached estimate; `None` until both inputs are present and the
    /// slot is known.
    pub fn current(&self) -> Option<i64> {
        self.cached
    }

    fn recompute(&mut self) {
        self.cached = match (self.time_slot.as_deref(), self.guests) {
            (Some(slot), Some(guests)) => estimate(slot, guests),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_or_below_threshold_is_base_price() {
        assert_eq!(estimate("morning", 1), Some(15000));
        assert_eq!(estimate("morning", 200), Some(15000));
        assert_eq!(estimate("afternoon", 200), Some(20000));
        assert_eq!(estimate("evening", 50), Some(25000));
    }

    #[test]
    fn test_surcharge_above_threshold() {
        assert_eq!(estimate("morning", 201), Some(15000 + 100));
        assert_eq!(estimate("morning", 250), Some(20000));
        assert_eq!(estimate("fullday", 500), Some(75000));
    }

    #[test]
    fn test_unknown_slot_has_no_estimate() {
        assert_eq!(estimate("midnight", 100), None);
        assert_eq!(estimate("", 100), None);
    }

    #[test]
    fn test_estimator_needs_both_inputs() {
        let mut est = Estimator::new();
        assert_eq!(est.current(), None);

        est.set_time_slot(Some("morning"));
        assert_eq!(est.current(), None);

        est.set_guests(Some(100));
        assert_eq!(est.current(), Some(15000));
    }

    #[test]
    fn test_estimator_recomputes_on_change() {
        let mut est = Estimator::new();
        est.set_time_slot(Some("morning"));
        est.set_guests(Some(250));
        assert_eq!(est.current(), Some(20000));

        assert!(est.set_time_slot(Some("fullday")));
        assert_eq!(est.current(), Some(50000));

        assert!(est.set_guests(Some(500)));
        assert_eq!(est.current(), Some(75000));
    }

    #[test]
    fn test_estimator_skips_unchanged_inputs() {
        let mut est = Estimator::new();
        est.set_time_slot(Some("evening"));
        est.set_guests(Some(80));

        assert!(!est.set_time_slot(Some("evening")));
        assert!(!est.set_guests(Some(80)));
        assert_eq!(est.current(), Some(25000));
    }

    #[test]
    fn test_estimator_clearing_an_input_clears_estimate() {
        let mut est = Estimator::new();
        est.set_time_slot(Some("evening"));
        est.set_guests(Some(80));
        assert_eq!(est.current(), Some(25000));

        est.set_guests(None);
        assert_eq!(est.current(), None);
    }

    #[test]
    fn test_estimator_unknown_slot_has_no_estimate() {
        let mut est = Estimator::new();
        est.set_time_slot(Some("brunch"));
        est.set_guests(Some(80));
        assert_eq!(est.current(), None);
    }
}
