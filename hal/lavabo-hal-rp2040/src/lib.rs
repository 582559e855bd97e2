//! RP2040-specific HAL for the hand-wash timer firmware
//!
//! Implements the shared `lavabo-hal` traits on top of embassy-rp:
//!
//! - Active-low push buttons with the internal pull-up enabled
//! - Blocking I2C master (implements `lavabo_hal::I2cBus`)
//! - Peripheral configuration helpers for the LCD SPI bus

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod spi;

pub use gpio::ActiveLowButton;
pub use i2c::{BlockingI2c, I2cBusError};
