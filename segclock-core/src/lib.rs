//! Board-agnostic core logic for the segclock countdown timer
//!
//! This crate contains everything that does not depend on a display or
//! a runtime:
//!
//! - Seven-segment glyph table (digit to lit segments)
//! - Segment geometry engine (the seven "light tube" polygons)
//! - Two-digit display values
//! - Countdown state machine and group visibility policy
//! - Timer configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod countdown;
pub mod geometry;
pub mod glyph;
pub mod value;

pub use glyph::{lit_pattern, DigitPattern, Segment};
pub use value::{DisplayValue, InvalidDigitValue};
