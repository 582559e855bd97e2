//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lavabo-core for the wash station hardware:
//!
//! - Distance sensor (VL53L0X time-of-flight)
//! - Colour LCD (ST7735, as an `embedded-graphics` draw target)
//! - Text panel rendering onto any RGB565 draw target

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
