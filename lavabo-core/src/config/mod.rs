//! Configuration types
//!
//! Every timing and threshold is a fixed constant. The firmware build
//! script may override the defaults from `washer.toml`, but nothing is
//! configurable at runtime.

pub mod banner;
pub mod types;

pub use banner::BuildInfo;
pub use types::*;
