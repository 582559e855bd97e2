//! Push button edge detection
//!
//! Both buttons are active-low with pull-ups. A press is recognised on the
//! falling edge only, once per released-to-pressed transition. There is no
//! debounce timer: the polling interval between snapshots is the debounce.

use lavabo_hal::gpio::Level;
use lavabo_hal::InputPin;

/// Physical trigger buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Large button on the front of the unit
    Unit,
    /// Secondary button on the side
    Side,
}

/// Falling-edge detector for one active-low line
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    previous: Level,
}

impl EdgeDetector {
    /// Create a detector that assumes the button starts released
    pub const fn new() -> Self {
        Self {
            previous: Level::High,
        }
    }

    /// Feed the latest sample; returns true on a high-to-low transition
    pub fn update(&mut self, current: Level) -> bool {
        let fell = self.previous == Level::High && current == Level::Low;
        self.previous = current;
        fell
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// The two trigger buttons with their remembered previous samples
pub struct Buttons<A, B> {
    unit: A,
    side: B,
    unit_edge: EdgeDetector,
    side_edge: EdgeDetector,
    /// Levels sampled by the last `refresh`
    snapshot: (Level, Level),
}

impl<A: InputPin, B: InputPin> Buttons<A, B> {
    /// Create the button pair
    pub fn new(unit: A, side: B) -> Self {
        Self {
            unit,
            side,
            unit_edge: EdgeDetector::new(),
            side_edge: EdgeDetector::new(),
            snapshot: (Level::High, Level::High),
        }
    }

    /// Sample both lines into the snapshot used by the next `poll`
    pub fn refresh(&mut self) {
        self.snapshot = (Level::sample(&self.unit), Level::sample(&self.side));
    }

    /// Run edge detection on the current snapshot
    ///
    /// Both detectors are always updated so each keeps tracking its own
    /// line. When both buttons fell in the same tick, the unit button is
    /// reported.
    pub fn poll(&mut self) -> Option<Button> {
        let (unit, side) = self.snapshot;
        let unit_fell = self.unit_edge.update(unit);
        let side_fell = self.side_edge.update(side);

        if unit_fell {
            Some(Button::Unit)
        } else if side_fell {
            Some(Button::Side)
        } else {
            None
        }
    }
}
