//! Hand-wash sequence
//!
//! Defines the runtime behaviour once a trigger fires. The state machine
//! is explicit, finite, and deterministic: Idle → CountingDown → Rinsing
//! → Done → Idle, with no other paths.

pub mod controller;
pub mod events;
pub mod machine;
pub mod screen;

pub use controller::SequenceController;
pub use events::Event;
pub use machine::State;
pub use screen::{Background, Screen};
