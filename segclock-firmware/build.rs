//! Build script for segclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMER_KEYS: &[&str] = &[
    "hour",
    "minute",
    "second",
    "hide_hour_group_when_zero",
    "hide_minute_group_when_zero",
];

const DISPLAY_KEYS: &[&str] = &[
    "lit_color",
    "unlit_color",
    "separator_color",
    "separator_background",
    "separator_shape",
    "digit_padding_px",
    "digit_inset_px",
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file.          ║\n\
            ║  Please create one in the segclock-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in timer.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_timer(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timer configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only [timer] and [display] tables, each with known keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        let allowed = match name.as_str() {
            "timer" => TIMER_KEYS,
            "display" => DISPLAY_KEYS,
            _ => {
                errors.push(format!("unknown section [{}]", name));
                continue;
            }
        };
        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };
        for key in table.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

fn validate_timer(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(timer) = config.get("timer") else {
        return;
    };

    if let Some(hour) = timer.get("hour") {
        match hour.as_integer() {
            Some(h) if h >= 0 => {
                if h > 99 {
                    println!("cargo:warning=timer.hour {} will be clamped to 99", h);
                }
            }
            _ => errors.push("[timer] hour must be a non-negative integer".to_string()),
        }
    }

    for key in ["minute", "second"] {
        if let Some(value) = timer.get(key) {
            match value.as_integer() {
                Some(v) if (0..=59).contains(&v) => {}
                _ => errors.push(format!("[timer] {} must be 0-59", key)),
            }
        }
    }

    for key in ["hide_hour_group_when_zero", "hide_minute_group_when_zero"] {
        if let Some(value) = timer.get(key) {
            if !value.is_bool() {
                errors.push(format!("[timer] {} must be true or false", key));
            }
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display") else {
        return;
    };

    for key in ["lit_color", "unlit_color", "separator_color", "separator_background"] {
        if let Some(value) = display.get(key) {
            if !value.as_str().is_some_and(is_hex_color) {
                errors.push(format!("[display] {} must look like \"#rrggbb\"", key));
            }
        }
    }

    if let Some(value) = display.get("separator_shape") {
        if !matches!(value.as_str(), Some("circle" | "square" | "Circle" | "Square")) {
            errors.push("[display] separator_shape must be 'circle' or 'square'".to_string());
        }
    }

    for key in ["digit_padding_px", "digit_inset_px"] {
        if let Some(value) = display.get(key) {
            match value.as_integer() {
                Some(v) if (0..=64).contains(&v) => {}
                _ => errors.push(format!("[display] {} must be 0-64", key)),
            }
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
