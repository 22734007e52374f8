//! Two-digit display values

use crate::glyph::DigitPattern;

/// Largest value a digit pair can show
pub const MAX_DISPLAY_VALUE: u8 = 99;

/// A value outside `0..=99` was handed to a digit pair
///
/// This means a counter invariant was broken upstream, so callers are
/// expected to fail fast rather than clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDigitValue(pub u32);

/// A value in `0..=99`, split into tens and ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue(u8);

impl DisplayValue {
    pub const ZERO: DisplayValue = DisplayValue(0);

    /// Validate a raw value
    pub const fn new(value: u32) -> Result<Self, InvalidDigitValue> {
        if value <= MAX_DISPLAY_VALUE as u32 {
            Ok(Self(value as u8))
        } else {
            Err(InvalidDigitValue(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn tens(self) -> u8 {
        self.0 / 10
    }

    pub const fn ones(self) -> u8 {
        self.0 % 10
    }

    /// Split into `(tens, ones)`
    pub const fn decompose(self) -> (u8, u8) {
        (self.tens(), self.ones())
    }

    /// Glyph patterns for `(tens, ones)`
    pub const fn patterns(self) -> (DigitPattern, DigitPattern) {
        (
            DigitPattern::for_digit(self.tens() as i32),
            DigitPattern::for_digit(self.ones() as i32),
        )
    }
}

impl TryFrom<u32> for DisplayValue {
    type Error = InvalidDigitValue;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for DisplayValue {
    type Error = InvalidDigitValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as u32)
    }
}

impl From<DisplayValue> for u8 {
    fn from(value: DisplayValue) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_digit_has_zero_tens() {
        let v = DisplayValue::new(7).unwrap();
        assert_eq!(v.decompose(), (0, 7));
    }

    #[test]
    fn test_bounds() {
        assert!(DisplayValue::new(0).is_ok());
        assert!(DisplayValue::new(99).is_ok());
        assert_eq!(DisplayValue::new(100), Err(InvalidDigitValue(100)));
        assert_eq!(DisplayValue::try_from(u32::MAX), Err(InvalidDigitValue(u32::MAX)));
        assert_eq!(DisplayValue::try_from(255u8), Err(InvalidDigitValue(255)));
    }

    #[test]
    fn test_patterns_follow_digits() {
        let (tens, ones) = DisplayValue::new(41).unwrap().patterns();
        assert_eq!(tens, DigitPattern::for_digit(4));
        assert_eq!(ones, DigitPattern::for_digit(1));
    }

    proptest! {
        #[test]
        fn prop_decompose_recomposes(v in 0u32..=99) {
            let value = DisplayValue::new(v).unwrap();
            let (tens, ones) = value.decompose();
            prop_assert!(tens <= 9);
            prop_assert!(ones <= 9);
            prop_assert_eq!(tens as u32, v / 10);
            prop_assert_eq!(ones as u32, v % 10);
            prop_assert_eq!(tens as u32 * 10 + ones as u32, v);
        }

        #[test]
        fn prop_rejects_above_99(v in 100u32..) {
            prop_assert_eq!(DisplayValue::new(v), Err(InvalidDigitValue(v)));
        }
    }
}
