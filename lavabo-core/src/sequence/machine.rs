//! State machine definition
//!
//! All display output is a function of the current state. Once the
//! machine leaves Idle it only moves forward, and the only way back into
//! the countdown is a fresh trigger from Idle.

use super::events::Event;

/// Sequence states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Ready screen shown, waiting for a trigger
    Idle,
    /// Countdown running; holds the value currently due on screen
    CountingDown(u8),
    /// "Rinse hands" prompt
    Rinsing,
    /// "Well done" prompt
    Done,
}

impl State {
    /// Check if this is the resting state
    pub fn is_idle(&self) -> bool {
        matches!(self, State::Idle)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // A zero-length countdown goes straight to the rinse prompt
            (Idle, Triggered(0)) => Rinsing,
            (Idle, Triggered(from)) => CountingDown(from),

            (CountingDown(remaining), CountElapsed) if remaining > 1 => {
                CountingDown(remaining - 1)
            }
            (CountingDown(_), CountElapsed) => Rinsing,

            (Rinsing, RinseElapsed) => Done,

            (Done, DoneElapsed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
