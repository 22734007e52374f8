//! Seven-segment countdown renderer
//!
//! This crate provides:
//! - `PaletteColor` for mapping configured RGB colors onto a display's
//!   native pixel color
//! - `DigitPair` drawable for a two-digit group of segment glyphs
//! - `Separator` drawable for the two marks between groups
//! - Weighted five-group layout
//! - `TimerScreen` frame buffer state fed by countdown snapshots
//!
//! Everything draws onto any `embedded_graphics::DrawTarget`, so the same
//! code runs on an OLED framebuffer and a `MockDisplay` in tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod digits;
pub mod error;
pub mod layout;
pub mod screen;
pub mod separator;
pub mod style;

pub use digits::DigitPair;
pub use error::RenderError;
pub use layout::{layout_groups, GroupAreas, GROUP_WEIGHTS};
pub use screen::TimerScreen;
pub use separator::Separator;
pub use style::{PaletteColor, SegmentStyle, TimerStyle};
