//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance at or below which a hand is considered present (mm)
pub const DEFAULT_TRIGGER_DISTANCE_MM: u16 = 160;

/// Distance reported when a sensor read times out (mm)
///
/// The VL53L0X reports 8190 for "nothing in range", which can never
/// satisfy the trigger threshold.
pub const DEFAULT_FALLBACK_DISTANCE_MM: u16 = 8190;

/// Per-read sensor timeout (ms)
pub const DEFAULT_SENSOR_TIMEOUT_MS: u16 = 500;

/// Pause between the three raw reads of one sample (ms)
pub const DEFAULT_SENSOR_SETTLE_MS: u32 = 50;

/// First value shown by the countdown
pub const DEFAULT_COUNTDOWN_FROM: u8 = 20;

/// Hold per countdown value, slightly under a second to budget for rendering (ms)
pub const DEFAULT_COUNT_HOLD_MS: u32 = 990;

/// Hold for the rinse prompt (ms)
pub const DEFAULT_RINSE_HOLD_MS: u32 = 4000;

/// Hold for the completion prompt (ms)
pub const DEFAULT_DONE_HOLD_MS: u32 = 2000;

/// Sleep between polling ticks (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 200;

/// Hold for the version banner at startup (ms)
pub const DEFAULT_BANNER_HOLD_MS: u32 = 1500;

/// Hold after hardware setup before the first tick (ms)
pub const DEFAULT_STARTUP_HOLD_MS: u32 = 3000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Trigger distance of zero would never fire
    ZeroTriggerDistance,
    /// Fallback distance would satisfy the trigger condition
    FallbackWouldTrigger,
    /// Countdown must show at least one value
    ZeroCountdown,
    /// Sensor timeout of zero makes every read fail
    ZeroSensorTimeout,
    /// Poll interval of zero removes the implicit button debounce
    ZeroPollInterval,
}

/// Washer timing and threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WasherConfig {
    /// Trigger when the averaged distance is at or below this (mm)
    pub trigger_distance_mm: u16,
    /// Substituted distance when a read times out (mm)
    pub fallback_distance_mm: u16,
    /// Per-read sensor timeout (ms)
    pub sensor_timeout_ms: u16,
    /// Pause between raw reads (ms)
    pub sensor_settle_ms: u32,
    /// Countdown start value
    pub countdown_from: u8,
    /// Hold per countdown value (ms)
    pub count_hold_ms: u32,
    /// Rinse prompt hold (ms)
    pub rinse_hold_ms: u32,
    /// Completion prompt hold (ms)
    pub done_hold_ms: u32,
    /// Sleep between ticks (ms)
    pub poll_interval_ms: u32,
    /// Version banner hold (ms)
    pub banner_hold_ms: u32,
    /// Hold before entering the polling loop (ms)
    pub startup_hold_ms: u32,
}

impl WasherConfig {
    /// Defaults matching the deployed device
    pub const DEFAULT: Self = Self {
        trigger_distance_mm: DEFAULT_TRIGGER_DISTANCE_MM,
        fallback_distance_mm: DEFAULT_FALLBACK_DISTANCE_MM,
        sensor_timeout_ms: DEFAULT_SENSOR_TIMEOUT_MS,
        sensor_settle_ms: DEFAULT_SENSOR_SETTLE_MS,
        countdown_from: DEFAULT_COUNTDOWN_FROM,
        count_hold_ms: DEFAULT_COUNT_HOLD_MS,
        rinse_hold_ms: DEFAULT_RINSE_HOLD_MS,
        done_hold_ms: DEFAULT_DONE_HOLD_MS,
        poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        banner_hold_ms: DEFAULT_BANNER_HOLD_MS,
        startup_hold_ms: DEFAULT_STARTUP_HOLD_MS,
    };

    /// Check the configuration for values that break the wash cycle
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_distance_mm == 0 {
            return Err(ConfigError::ZeroTriggerDistance);
        }
        if self.fallback_distance_mm <= self.trigger_distance_mm {
            return Err(ConfigError::FallbackWouldTrigger);
        }
        if self.countdown_from == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.sensor_timeout_ms == 0 {
            return Err(ConfigError::ZeroSensorTimeout);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
