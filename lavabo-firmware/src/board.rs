//! Board pin assignment
//!
//! Pico-style RP2040 board with a 0.96" ST7735 LCD on SPI1, a VL53L0X on
//! I2C0 and two push buttons to ground.
//!
//! | Function    | GPIO |
//! |-------------|------|
//! | LCD DC      | 8    |
//! | LCD CS      | 9    |
//! | LCD SCK     | 10   |
//! | LCD MOSI    | 11   |
//! | LCD RST     | 12   |
//! | I2C0 SDA    | 4    |
//! | I2C0 SCL    | 5    |
//! | Unit button | 14   |
//! | Side button | 15   |

use embassy_rp::peripherals::{
    I2C0, PIN_10, PIN_11, PIN_12, PIN_14, PIN_15, PIN_4, PIN_5, PIN_8, PIN_9, SPI1,
};
use embassy_rp::{Peri, Peripherals};

/// LCD bus and control lines
pub struct LcdPins {
    pub spi: Peri<'static, SPI1>,
    pub clk: Peri<'static, PIN_10>,
    pub mosi: Peri<'static, PIN_11>,
    pub dc: Peri<'static, PIN_8>,
    pub cs: Peri<'static, PIN_9>,
    pub rst: Peri<'static, PIN_12>,
}

/// Distance sensor bus
pub struct SensorPins {
    pub i2c: Peri<'static, I2C0>,
    pub sda: Peri<'static, PIN_4>,
    pub scl: Peri<'static, PIN_5>,
}

/// Everything the firmware uses, split out of the peripheral set
pub struct Board {
    pub lcd: LcdPins,
    pub sensor: SensorPins,
    pub unit_button: Peri<'static, PIN_14>,
    pub side_button: Peri<'static, PIN_15>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        Self {
            lcd: LcdPins {
                spi: p.SPI1,
                clk: p.PIN_10,
                mosi: p.PIN_11,
                dc: p.PIN_8,
                cs: p.PIN_9,
                rst: p.PIN_12,
            },
            sensor: SensorPins {
                i2c: p.I2C0,
                sda: p.PIN_4,
                scl: p.PIN_5,
            },
            unit_button: p.PIN_14,
            side_button: p.PIN_15,
        }
    }
}
