//! GPIO pin abstractions
//!
//! The wash station only reads pins: two momentary push buttons wired
//! active-low against the chip's internal pull-ups.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads are assumed to always succeed.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Electrical level of a sampled input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Sample a pin
    pub fn sample<P: InputPin + ?Sized>(pin: &P) -> Self {
        if pin.is_high() {
            Level::High
        } else {
            Level::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_sample_levels() {
        assert_eq!(Level::sample(&FixedPin(true)), Level::High);
        assert_eq!(Level::sample(&FixedPin(false)), Level::Low);
    }

    #[test]
    fn test_is_low_default() {
        assert!(FixedPin(false).is_low());
        assert!(!FixedPin(true).is_low());
    }
}
