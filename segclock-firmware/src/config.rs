//! Timer configuration loading
//!
//! The configuration is `timer.toml`, embedded at compile time and
//! already validated by the build script.

use defmt::*;
use segclock_core::config::{parse_config, TimerConfig};

/// Embedded configuration (compiled into firmware)
/// Edit timer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../timer.toml");

/// Parse the embedded configuration
///
/// Falls back to defaults if parsing fails, which should only happen if
/// the build script and the parser disagree.
pub fn load() -> TimerConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Parsed embedded configuration: {:02}:{:02}:{:02}",
                config.initial.hour, config.initial.minute, config.initial.second
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            TimerConfig::default()
        }
    }
}
