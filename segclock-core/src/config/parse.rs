//! Timer configuration parser
//!
//! A minimal line parser for the TOML subset used by `timer.toml`. It
//! does NOT support full TOML.
//!
//! Supported features:
//! - `[timer]` and `[display]` section headers
//! - Key = value pairs (integer, boolean, quoted string)
//! - Comments (# ...), including trailing comments
//!
//! Colors are written as `"#RRGGBB"`.

use super::types::{Rgb, SeparatorShape, TimerConfig, MAX_DIGIT_SPACING_PX};

/// Largest minute or second accepted in the initial duration
pub const MAX_MINUTE_SECOND: u32 = 59;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Value has the wrong type or format
    InvalidValue,
    /// Value parsed but is outside its allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timer,
    Display,
}

/// Parse TOML configuration into a `TimerConfig`
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        match section {
            Section::Root => return Err(ParseError::UnknownKey),
            Section::Timer => apply_timer_key(&mut config, key, value)?,
            Section::Display => apply_display_key(&mut config, key, value)?,
        }
    }

    Ok(config)
}

fn apply_timer_key(config: &mut TimerConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "hour" => config.initial.hour = parse_int(value)?,
        "minute" => config.initial.minute = parse_minute_second(value)?,
        "second" => config.initial.second = parse_minute_second(value)?,
        "hide_hour_group_when_zero" => config.hide_hour_group_when_zero = parse_bool(value)?,
        "hide_minute_group_when_zero" => config.hide_minute_group_when_zero = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_display_key(config: &mut TimerConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "lit_color" => config.lit_color = parse_color(value)?,
        "unlit_color" => config.unlit_color = parse_color(value)?,
        "separator_color" => config.separator_color = parse_color(value)?,
        "separator_background" => config.separator_background = parse_color(value)?,
        "separator_shape" => config.separator_shape = parse_shape(value)?,
        "digit_padding_px" => config.digit_padding_px = parse_spacing(value)?,
        "digit_inset_px" => config.digit_inset_px = parse_spacing(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Parse "[name]" line
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "timer" => Ok(Section::Timer),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments, but not a '#' inside a string
    let mut in_string = false;
    let end = value
        .char_indices()
        .find(|&(_, c)| {
            if c == '"' {
                in_string = !in_string;
            }
            c == '#' && !in_string
        })
        .map_or(value.len(), |(pos, _)| pos);
    let value = value[..end].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_minute_second(value: &str) -> Result<u32, ParseError> {
    let v: u32 = parse_int(value)?;
    if v > MAX_MINUTE_SECOND {
        return Err(ParseError::OutOfRange);
    }
    Ok(v)
}

fn parse_spacing(value: &str) -> Result<u32, ParseError> {
    let v: u32 = parse_int(value)?;
    if v > MAX_DIGIT_SPACING_PX {
        return Err(ParseError::OutOfRange);
    }
    Ok(v)
}

/// Parse a color string like "#ff8800"
pub fn parse_color(value: &str) -> Result<Rgb, ParseError> {
    let hex = parse_string(value)?
        .strip_prefix('#')
        .ok_or(ParseError::InvalidValue)?;

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ParseError::InvalidValue);
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseError::InvalidValue);
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_shape(value: &str) -> Result<SeparatorShape, ParseError> {
    match parse_string(value)? {
        "circle" | "Circle" => Ok(SeparatorShape::Circle),
        "square" | "Square" => Ok(SeparatorShape::Square),
        _ => Err(ParseError::InvalidValue),
    }
}
