//! Colors and drawing style
//!
//! Configuration stores plain RGB; each display converts it to its own
//! pixel color through [`PaletteColor`].

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, Rgb888, RgbColor};
use embedded_graphics::prelude::PixelColor;
use segclock_core::config::{Rgb, SeparatorShape, TimerConfig};

/// Minimum luma that switches a monochrome pixel on
pub const LUMA_THRESHOLD: u8 = 128;

/// Pixel colors that configured RGB colors can be mapped onto
pub trait PaletteColor: PixelColor {
    /// Color used to clear the frame
    const BACKGROUND: Self;

    fn from_rgb(rgb: Rgb) -> Self;
}

impl PaletteColor for Rgb888 {
    const BACKGROUND: Self = Rgb888::BLACK;

    fn from_rgb(rgb: Rgb) -> Self {
        Rgb888::new(rgb.r, rgb.g, rgb.b)
    }
}

impl PaletteColor for Rgb565 {
    const BACKGROUND: Self = Rgb565::BLACK;

    fn from_rgb(rgb: Rgb) -> Self {
        Rgb565::from(Rgb888::new(rgb.r, rgb.g, rgb.b))
    }
}

impl PaletteColor for BinaryColor {
    const BACKGROUND: Self = BinaryColor::Off;

    fn from_rgb(rgb: Rgb) -> Self {
        if rgb.luma() >= LUMA_THRESHOLD {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}

/// Lit and unlit segment colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle<C> {
    pub lit: C,
    pub unlit: C,
}

impl<C: PixelColor> SegmentStyle<C> {
    pub const fn new(lit: C, unlit: C) -> Self {
        Self { lit, unlit }
    }

    pub fn color(&self, lit: bool) -> C {
        if lit {
            self.lit
        } else {
            self.unlit
        }
    }
}

/// Everything needed to draw a timer frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerStyle<C> {
    pub segments: SegmentStyle<C>,
    pub separator: C,
    pub separator_background: C,
    pub separator_shape: SeparatorShape,
    pub background: C,
    /// Padding around each digit pair
    pub digit_padding: u32,
    /// Extra gap between tens and ones glyphs
    pub digit_inset: u32,
}

impl<C: PaletteColor> TimerStyle<C> {
    pub fn from_config(config: &TimerConfig) -> Self {
        Self {
            segments: SegmentStyle::new(
                C::from_rgb(config.lit_color),
                C::from_rgb(config.unlit_color),
            ),
            separator: C::from_rgb(config.separator_color),
            separator_background: C::from_rgb(config.separator_background),
            separator_shape: config.separator_shape,
            background: C::BACKGROUND,
            digit_padding: config.digit_padding_px,
            digit_inset: config.digit_inset_px,
        }
    }
}

impl<C: PaletteColor> Default for TimerStyle<C> {
    fn default() -> Self {
        Self::from_config(&TimerConfig::default())
    }
}
