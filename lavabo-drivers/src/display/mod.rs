//! Display drivers
//!
//! The LCD driver exposes an `embedded-graphics` draw target; the text
//! panel turns any such target into the core `Panel` trait.

pub mod st7735;
pub mod text;

pub use st7735::{Geometry, St7735, St7735Error};
pub use text::GraphicsPanel;
