//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod panel;
pub mod sensor;

pub use panel::{Color, Panel};
pub use sensor::{RangeSensor, SensorError};
