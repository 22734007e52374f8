//! Configuration type definitions
//!
//! These types describe how a timer starts and how it is drawn. They are
//! read once at boot from the embedded `timer.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::countdown::{Counters, VisibilityPolicy};

/// Default digit padding inside each group region
pub const DEFAULT_DIGIT_PADDING_PX: u32 = 8;

/// Default gap between the two digits of a pair
pub const DEFAULT_DIGIT_INSET_PX: u32 = 10;

/// Largest accepted digit padding or inset
pub const MAX_DIGIT_SPACING_PX: u32 = 64;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const GRAY: Rgb = Rgb::new(0x88, 0x88, 0x88);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness, 0..=255
    pub const fn luma(&self) -> u8 {
        ((self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000) as u8
    }
}

/// Shape of the two marks in a separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeparatorShape {
    Circle,
    #[default]
    Square,
}

/// Duration a timer starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Duration {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub const fn counters(&self) -> Counters {
        Counters::new(self.hour, self.minute, self.second)
    }
}

/// Timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Duration started at boot and on restart
    pub initial: Duration,
    pub hide_hour_group_when_zero: bool,
    pub hide_minute_group_when_zero: bool,
    pub lit_color: Rgb,
    pub unlit_color: Rgb,
    /// Color of the separator marks
    pub separator_color: Rgb,
    /// Fill behind the separator marks
    pub separator_background: Rgb,
    pub separator_shape: SeparatorShape,
    /// Padding around each digit pair
    pub digit_padding_px: u32,
    /// Extra gap between tens and ones glyphs
    pub digit_inset_px: u32,
}

impl TimerConfig {
    pub const fn new() -> Self {
        Self {
            initial: Duration::new(0, 0, 0),
            hide_hour_group_when_zero: false,
            hide_minute_group_when_zero: false,
            lit_color: Rgb::WHITE,
            unlit_color: Rgb::GRAY,
            separator_color: Rgb::BLACK,
            separator_background: Rgb::WHITE,
            separator_shape: SeparatorShape::Square,
            digit_padding_px: DEFAULT_DIGIT_PADDING_PX,
            digit_inset_px: DEFAULT_DIGIT_INSET_PX,
        }
    }

    pub const fn policy(&self) -> VisibilityPolicy {
        VisibilityPolicy::new(self.hide_hour_group_when_zero, self.hide_minute_group_when_zero)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new()
    }
}
