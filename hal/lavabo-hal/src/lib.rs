//! Lavabo Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that chip-specific
//! HALs implement. The core state machine and the drivers only ever see
//! these traits, so the same logic runs on the RP2040 and on the host
//! under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (lavabo-firmware)          │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │  lavabo-core    │   │ lavabo-drivers  │
//! └─────────────────┘   └─────────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lavabo-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ lavabo-hal-rp2040 │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (push buttons)
//! - [`i2c::I2cBus`] - I2C bus operations (distance sensor)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig};
