//! Trigger input
//!
//! Unifies the distance sensor and the two push buttons into a single
//! "start washing" decision per polling tick.

pub mod buttons;
pub mod distance;
pub mod source;

pub use buttons::{Button, Buttons, EdgeDetector};
pub use distance::{average_of, poll_distance, DistanceReading, SAMPLES_PER_READING};
pub use source::{Evaluation, InputMode, InputSource, Sample};
