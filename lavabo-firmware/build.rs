//! Build script for lavabo-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates washer.toml, generating the firmware constants

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lavabo_core::config::{ConfigError, WasherConfig};
use serde::Deserialize;

/// Layout of washer.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WasherToml {
    device: DeviceSection,
    washer: WasherConfig,
}

/// `[device]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DeviceSection {
    name: String,
    hostname: String,
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            name: "Wash Hands".into(),
            hostname: "lavabo-1".into(),
        }
    }
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set by cargo"));
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to copy memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Turn washer.toml into `config.rs` in OUT_DIR
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=washer.toml");

    let config_path = Path::new("washer.toml");
    let parsed = if config_path.exists() {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => fail("Failed to read washer.toml", &[e.to_string()]),
        };
        match toml::from_str::<WasherToml>(&content) {
            Ok(parsed) => parsed,
            Err(e) => fail("Invalid washer.toml", &format_error_lines(&e.to_string())),
        }
    } else {
        println!("cargo:warning=washer.toml not found, using built-in defaults");
        WasherToml::default()
    };

    if let Err(e) = parsed.washer.validate() {
        fail("Invalid [washer] configuration", &[describe(e).to_string()]);
    }

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());
    fs::write(out_dir.join("config.rs"), render(&parsed, &profile))
        .expect("failed to write config.rs");
}

/// Rust source for the generated constants
fn render(parsed: &WasherToml, profile: &str) -> String {
    let w = &parsed.washer;
    format!(
        "/// Device identity from washer.toml\n\
         pub const BUILD: lavabo_core::config::BuildInfo = lavabo_core::config::BuildInfo {{\n\
         \x20   name: {name:?},\n\
         \x20   version: concat!(\"V\", env!(\"CARGO_PKG_VERSION\")),\n\
         \x20   build: {profile:?},\n\
         \x20   hostname: {hostname:?},\n\
         }};\n\
         \n\
         /// Washer timing and thresholds from washer.toml\n\
         pub const WASHER: lavabo_core::config::WasherConfig = lavabo_core::config::WasherConfig {{\n\
         \x20   trigger_distance_mm: {},\n\
         \x20   fallback_distance_mm: {},\n\
         \x20   sensor_timeout_ms: {},\n\
         \x20   sensor_settle_ms: {},\n\
         \x20   countdown_from: {},\n\
         \x20   count_hold_ms: {},\n\
         \x20   rinse_hold_ms: {},\n\
         \x20   done_hold_ms: {},\n\
         \x20   poll_interval_ms: {},\n\
         \x20   banner_hold_ms: {},\n\
         \x20   startup_hold_ms: {},\n\
         }};\n",
        w.trigger_distance_mm,
        w.fallback_distance_mm,
        w.sensor_timeout_ms,
        w.sensor_settle_ms,
        w.countdown_from,
        w.count_hold_ms,
        w.rinse_hold_ms,
        w.done_hold_ms,
        w.poll_interval_ms,
        w.banner_hold_ms,
        w.startup_hold_ms,
        name = parsed.device.name,
        hostname = parsed.device.hostname,
        profile = profile,
    )
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::ZeroTriggerDistance => "trigger_distance_mm must be greater than 0",
        ConfigError::FallbackWouldTrigger => {
            "fallback_distance_mm must be greater than trigger_distance_mm"
        }
        ConfigError::ZeroCountdown => "countdown_from must be at least 1",
        ConfigError::ZeroSensorTimeout => "sensor_timeout_ms must be greater than 0",
        ConfigError::ZeroPollInterval => "poll_interval_ms must be greater than 0",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> Vec<String> {
    msg.lines()
        .map(|line| {
            if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|l| format!("║  • {:<62} ║", l))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
