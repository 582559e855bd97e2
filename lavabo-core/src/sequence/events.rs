//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Input source asserted; countdown starts from the given value
    Triggered(u8),
    /// One countdown value has been shown for its hold time
    CountElapsed,
    /// Rinse prompt hold finished
    RinseElapsed,
    /// Completion prompt hold finished
    DoneElapsed,
}
