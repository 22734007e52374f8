//! Hour/minute/second counters and duration decomposition

use crate::value::{DisplayValue, InvalidDigitValue};

/// Largest hour the display can show; larger inputs are clamped
pub const MAX_HOURS: u32 = 99;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Live (or target) countdown counters
///
/// `hour` never exceeds [`MAX_HOURS`]. `minute` and `second` stay in
/// `0..=59` once ticking has carried through them, but a directly set
/// duration may seed them higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Result of clamping an hour input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clamped {
    pub counters: Counters,
    /// The requested hour, when it was above [`MAX_HOURS`]
    pub clamped_from: Option<u32>,
}

impl Counters {
    pub const ZERO: Counters = Counters::new(0, 0, 0);

    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Build counters, clamping the hour to [`MAX_HOURS`]
    ///
    /// Clamping is lossy on purpose and never an error.
    pub const fn clamped(hour: u32, minute: u32, second: u32) -> Clamped {
        if hour > MAX_HOURS {
            Clamped {
                counters: Counters::new(MAX_HOURS, minute, second),
                clamped_from: Some(hour),
            }
        } else {
            Clamped {
                counters: Counters::new(hour, minute, second),
                clamped_from: None,
            }
        }
    }

    /// Decompose a total number of seconds, clamping the hour
    pub const fn from_total_seconds(total: u32) -> Clamped {
        Self::clamped(
            total / SECONDS_PER_HOUR,
            total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            total % SECONDS_PER_MINUTE,
        )
    }

    /// Decompose a duration given in milliseconds; sub-second parts are dropped
    pub const fn from_millis(millis: u32) -> Clamped {
        Self::from_total_seconds(millis / 1000)
    }

    pub const fn is_zero(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// Remaining time in seconds
    pub const fn total_seconds(&self) -> u64 {
        self.hour as u64 * SECONDS_PER_HOUR as u64
            + self.minute as u64 * SECONDS_PER_MINUTE as u64
            + self.second as u64
    }

    /// Advance by one second
    ///
    /// Borrows from the next larger counter when the smaller one is
    /// exhausted. Returns `false` (and changes nothing) at zero.
    pub fn decrement(&mut self) -> bool {
        if self.second > 0 {
            self.second -= 1;
        } else if self.minute > 0 {
            self.minute -= 1;
            self.second = SECONDS_PER_MINUTE - 1;
        } else if self.hour > 0 {
            self.hour -= 1;
            self.minute = SECONDS_PER_MINUTE - 1;
            self.second = SECONDS_PER_MINUTE - 1;
        } else {
            return false;
        }
        true
    }

    /// Two-digit values for `[hour, minute, second]`
    ///
    /// Fails if a seeded counter is above 99.
    pub fn display_values(&self) -> Result<[DisplayValue; 3], InvalidDigitValue> {
        Ok([
            DisplayValue::new(self.hour)?,
            DisplayValue::new(self.minute)?,
            DisplayValue::new(self.second)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decrement_priority() {
        let mut c = Counters::new(1, 0, 0);
        assert!(c.decrement());
        assert_eq!(c, Counters::new(0, 59, 59));

        let mut c = Counters::new(0, 2, 0);
        assert!(c.decrement());
        assert_eq!(c, Counters::new(0, 1, 59));

        let mut c = Counters::new(3, 4, 5);
        assert!(c.decrement());
        assert_eq!(c, Counters::new(3, 4, 4));
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut c = Counters::ZERO;
        assert!(!c.decrement());
        assert_eq!(c, Counters::ZERO);
    }

    #[test]
    fn test_hour_clamp() {
        let c = Counters::clamped(100, 0, 0);
        assert_eq!(c.counters, Counters::new(99, 0, 0));
        assert_eq!(c.clamped_from, Some(100));

        let c = Counters::clamped(99, 59, 59);
        assert_eq!(c.clamped_from, None);
    }

    #[test]
    fn test_millis_decomposition() {
        let c = Counters::from_millis(3_661_000);
        assert_eq!(c.counters, Counters::new(1, 1, 1));
        assert_eq!(c.clamped_from, None);

        // sub-second remainder is dropped
        assert_eq!(Counters::from_millis(59_999).counters, Counters::new(0, 0, 59));
    }

    #[test]
    fn test_exact_minute_and_hour_carry() {
        assert_eq!(Counters::from_total_seconds(60).counters, Counters::new(0, 1, 0));
        assert_eq!(Counters::from_total_seconds(3600).counters, Counters::new(1, 0, 0));
    }

    #[test]
    fn test_total_seconds_clamp_keeps_minutes_and_seconds() {
        let c = Counters::from_total_seconds(100 * 3600 + 61);
        assert_eq!(c.counters, Counters::new(99, 1, 1));
        assert_eq!(c.clamped_from, Some(100));
    }

    #[test]
    fn test_display_values_reject_large_seed() {
        assert!(Counters::new(0, 0, 99).display_values().is_ok());
        assert_eq!(
            Counters::new(0, 0, 150).display_values(),
            Err(InvalidDigitValue(150))
        );
    }

    proptest! {
        #[test]
        fn prop_total_seconds_roundtrip(total in 0u32..(100 * 3600)) {
            let c = Counters::from_total_seconds(total);
            prop_assert_eq!(c.clamped_from, None);
            prop_assert!(c.counters.minute < 60);
            prop_assert!(c.counters.second < 60);
            prop_assert_eq!(c.counters.total_seconds(), total as u64);
        }

        #[test]
        fn prop_decrement_removes_one_second(h in 0u32..=99, m in 0u32..60, s in 0u32..60) {
            let mut c = Counters::new(h, m, s);
            let before = c.total_seconds();
            let moved = c.decrement();
            prop_assert_eq!(moved, before > 0);
            prop_assert_eq!(c.total_seconds(), before.saturating_sub(1));
        }
    }
}
