//! Timer configuration
//!
//! Types plus a small `no_std` parser for the TOML subset the firmware
//! embeds.

pub mod parse;
pub mod types;

pub use parse::{parse_color, parse_config, ParseError};
pub use types::*;
