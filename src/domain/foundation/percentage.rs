//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number share between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Share of `part` in `total`, rounded half up.
    ///
    /// A zero total yields zero rather than an error, and `part` is clamped
    /// to `total`.
    pub fn share_of(part: u32, total: u32) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let part = u64::from(part.min(total));
        let total = u64::from(total);
        let rounded = (part * 100 + total / 2) / total;
        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(Percentage::share_of(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::share_of(5, 0), Percentage::ZERO);
    }

    #[test]
    fn share_of_rounds_half_up() {
        assert_eq!(Percentage::share_of(1, 3).value(), 33);
        assert_eq!(Percentage::share_of(2, 3).value(), 67);
        assert_eq!(Percentage::share_of(1, 8).value(), 13);
    }

    #[test]
    fn share_of_whole_is_hundred() {
        assert_eq!(Percentage::share_of(24, 24), Percentage::HUNDRED);
    }

    #[test]
    fn share_of_clamps_part_to_total() {
        assert_eq!(Percentage::share_of(30, 24), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
