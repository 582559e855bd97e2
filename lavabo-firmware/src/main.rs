//! Lavabo - Hand-Wash Timer Firmware
//!
//! Main firmware binary for RP2040-based wash stations. Shows a version
//! banner, probes the distance sensor (falling back to the push buttons
//! when it is missing), then polls forever: a hand under the sensor or a
//! button press starts a countdown followed by rinse and done prompts.
//!
//! All timing and thresholds come from washer.toml at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use {defmt_rtt as _, panic_probe as _};

use lavabo_core::input::{Buttons, InputSource};
use lavabo_core::sequence::{Screen, SequenceController};
use lavabo_core::Washer;
use lavabo_drivers::display::{Geometry, GraphicsPanel, St7735};
use lavabo_drivers::sensor::{Vl53l0x, DEFAULT_ADDRESS};
use lavabo_hal::I2cConfig;
use lavabo_hal_rp2040::{i2c, spi, ActiveLowButton, BlockingI2c};

use crate::board::Board;
use crate::report::log_activity;

mod board;
mod report;

/// Generated by build.rs from washer.toml
mod config {
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

use config::{BUILD, WASHER};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!(
        "{} {} ({}) on {}",
        BUILD.name, BUILD.version, BUILD.build, BUILD.hostname
    );

    let board = Board::new(embassy_rp::init(Default::default()));
    let mut delay = Delay;

    // Display
    let lcd_pins = board.lcd;
    let lcd_spi = Spi::new_blocking_txonly(
        lcd_pins.spi,
        lcd_pins.clk,
        lcd_pins.mosi,
        spi::lcd_config(spi::LCD_FREQUENCY),
    );
    let dc = Output::new(lcd_pins.dc, Level::Low);
    let cs = Output::new(lcd_pins.cs, Level::High);
    let mut rst = Output::new(lcd_pins.rst, Level::High);
    let mut lcd = St7735::new(lcd_spi, dc, cs, Geometry::LANDSCAPE_80X160);
    if let Err(e) = lcd.init(Some(&mut rst), &mut delay) {
        warn!("LCD init failed: {}", e);
    }

    let mut controller = SequenceController::new(GraphicsPanel::new(lcd), &WASHER);
    controller.show(Screen::Banner(BUILD.short()));
    delay.delay_ms(WASHER.banner_hold_ms);

    // Distance sensor
    let sensor_pins = board.sensor;
    let i2c_bus = I2c::new_blocking(
        sensor_pins.i2c,
        sensor_pins.scl,
        sensor_pins.sda,
        i2c::peripheral_config(I2cConfig::default()),
    );
    let mut sensor = Vl53l0x::new(BlockingI2c::new(i2c_bus), Delay);
    let sensor_present = match sensor.init() {
        Ok(()) => {
            sensor.set_timeout(WASHER.sensor_timeout_ms);
            info!(
                "VL53L0X device found at {=u8:#x}, timeout {} ms",
                DEFAULT_ADDRESS, WASHER.sensor_timeout_ms
            );
            true
        }
        Err(e) => {
            warn!("TEST MODE - BUTTON ({})", e);
            false
        }
    };

    delay.delay_ms(WASHER.startup_hold_ms);
    controller.show(Screen::Blank);

    let buttons = Buttons::new(
        ActiveLowButton::new(board.unit_button),
        ActiveLowButton::new(board.side_button),
    );
    let input = InputSource::new(sensor, sensor_present, buttons, &WASHER);
    let mut washer = Washer::new(input, controller, &WASHER);
    info!("Input mode: {}", washer.mode());

    let mut display_errors = 0;
    loop {
        washer.tick(&mut delay, log_activity);

        let errors = washer.controller().panel().error_count();
        if errors != display_errors {
            warn!("Display errors: {}", errors);
            display_errors = errors;
        }
    }
}
