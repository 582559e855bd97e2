//! SPI bus settings for the colour LCD

use embassy_rp::spi::{Config, Phase, Polarity};

/// Default LCD clock (ST7735 tolerates up to ~15 MHz writes)
pub const LCD_FREQUENCY: u32 = 15_000_000;

/// Mode 0 write-only configuration at `frequency` Hz
pub fn lcd_config(frequency: u32) -> Config {
    let mut config = Config::default();
    config.frequency = frequency;
    config.phase = Phase::CaptureOnFirstTransition;
    config.polarity = Polarity::IdleLow;
    config
}
