//! Board-agnostic core logic for the hand-wash timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (range sensor, text panel)
//! - Input source (distance sensor or push buttons, chosen once at boot)
//! - Sequence state machine (ready, countdown, rinse, well done)
//! - Screen layouts and the idle redraw cache
//! - The polling loop context tying everything together
//! - Configuration type definitions
//!
//! Everything runs on one thread. Waits are blocking sleeps through
//! [`embedded_hal::delay::DelayNs`], so a started sequence always runs to
//! completion before the next input sample is taken.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod sequence;
pub mod traits;
pub mod washer;

#[cfg(test)]
pub(crate) mod mock;

pub use washer::{Activity, Washer};
