//! Storeroom occupancy arithmetic.
//!
//! Occupancy is always derived from a fresh count of `stored` rows; it is
//! never persisted.

use serde::Serialize;

/// Live occupancy of one storeroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub stored_count: i64,
    /// `capacity - stored_count`. Negative when capacity was lowered below
    /// the number of items already admitted; reported as-is.
    pub remaining: i64,
}

impl Occupancy {
    pub fn new(capacity: i32, stored_count: i64) -> Self {
        Self {
            stored_count,
            remaining: i64::from(capacity) - stored_count,
        }
    }

    /// Whether one more item may be admitted.
    pub fn has_room(&self) -> bool {
        self.remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_is_capacity_minus_stored() {
        let occ = Occupancy::new(10, 4);
        assert_eq!(occ.remaining, 6);
        assert!(occ.has_room());
    }

    #[test]
    fn full_storeroom_has_no_room() {
        let occ = Occupancy::new(2, 2);
        assert_eq!(occ.remaining, 0);
        assert!(!occ.has_room());
    }

    #[test]
    fn remaining_is_not_clamped() {
        let occ = Occupancy::new(1, 3);
        assert_eq!(occ.remaining, -2);
        assert!(!occ.has_room());
    }

    #[test]
    fn zero_capacity_never_admits() {
        assert!(!Occupancy::new(0, 0).has_room());
    }
}
