//! Push-button inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use lavabo_hal::InputPin;

/// Button wired between the pin and ground
///
/// The internal pull-up keeps the line high while released.
pub struct ActiveLowButton<'d> {
    input: Input<'d>,
}

impl<'d> ActiveLowButton<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for ActiveLowButton<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
