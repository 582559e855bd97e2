//! Trigger decision for one polling tick
//!
//! The input mode is decided once at startup from sensor presence and is
//! never re-evaluated, so a sensor that shows up later (or answers
//! intermittently) cannot make the device flap between modes.

use embedded_hal::delay::DelayNs;
use lavabo_hal::InputPin;

use super::buttons::{Button, Buttons};
use super::distance::{poll_distance, DistanceReading};
use crate::config::WasherConfig;
use crate::traits::RangeSensor;

/// Where triggers come from for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Distance sensor found at startup
    Distance,
    /// No sensor: push buttons only (test mode)
    Buttons,
}

impl InputMode {
    /// Select the mode from the startup probe result
    pub fn from_sensor_present(present: bool) -> Self {
        if present {
            InputMode::Distance
        } else {
            InputMode::Buttons
        }
    }
}

/// What was sampled during an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// Averaged distance sample
    Distance(DistanceReading),
    /// Button edge, if any
    Button(Option<Button>),
}

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Evaluation {
    /// Raw observation behind the decision
    pub sample: Sample,
    /// Trigger asserted this tick
    pub triggered: bool,
}

/// Unified trigger input
pub struct InputSource<S, A, B> {
    mode: InputMode,
    sensor: S,
    buttons: Buttons<A, B>,
    trigger_distance_mm: u16,
    fallback_distance_mm: u16,
    settle_ms: u32,
}

impl<S, A, B> InputSource<S, A, B>
where
    S: RangeSensor,
    A: InputPin,
    B: InputPin,
{
    /// Create the input source
    ///
    /// `sensor_present` is the result of the startup probe and fixes the
    /// mode for the lifetime of this value.
    pub fn new(
        sensor: S,
        sensor_present: bool,
        buttons: Buttons<A, B>,
        config: &WasherConfig,
    ) -> Self {
        Self {
            mode: InputMode::from_sensor_present(sensor_present),
            sensor,
            buttons,
            trigger_distance_mm: config.trigger_distance_mm,
            fallback_distance_mm: config.fallback_distance_mm,
            settle_ms: config.sensor_settle_ms,
        }
    }

    /// The mode chosen at startup
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Sample the button lines for the next evaluation
    pub fn refresh(&mut self) {
        self.buttons.refresh();
    }

    /// Button edge detection on the latest snapshot
    pub fn poll_buttons(&mut self) -> Option<Button> {
        self.buttons.poll()
    }

    /// Averaged distance sample
    pub fn poll_distance<D: DelayNs>(&mut self, delay: &mut D) -> DistanceReading {
        poll_distance(&mut self.sensor, delay, self.settle_ms, self.fallback_distance_mm)
    }

    /// Decide whether to trigger this tick
    ///
    /// Must only be called while no trigger is pending.
    pub fn evaluate<D: DelayNs>(&mut self, delay: &mut D) -> Evaluation {
        match self.mode {
            InputMode::Distance => {
                let reading = self.poll_distance(delay);
                Evaluation {
                    sample: Sample::Distance(reading),
                    triggered: reading.triggers(self.trigger_distance_mm),
                }
            }
            InputMode::Buttons => {
                let pressed = self.poll_buttons();
                Evaluation {
                    sample: Sample::Button(pressed),
                    triggered: pressed.is_some(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::mock::{MockDelay, MockPin, ScriptedSensor};
    use crate::traits::SensorError;

    #[test]
    fn test_distance_mode_triggers_at_threshold() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::new(&[Ok(160), Ok(160), Ok(160), Ok(200), Ok(200), Ok(200)]);
        let buttons = Buttons::new(MockPin(&unit), MockPin(&side));
        let mut input = InputSource::new(sensor, true, buttons, &WasherConfig::DEFAULT);
        let mut delay = MockDelay::new();

        assert_eq!(input.mode(), InputMode::Distance);
        assert!(input.evaluate(&mut delay).triggered);
        assert!(!input.evaluate(&mut delay).triggered);
    }

    #[test]
    fn test_distance_mode_ignores_buttons() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::constant(500);
        let buttons = Buttons::new(MockPin(&unit), MockPin(&side));
        let mut input = InputSource::new(sensor, true, buttons, &WasherConfig::DEFAULT);
        let mut delay = MockDelay::new();

        unit.set(false);
        input.refresh();
        let eval = input.evaluate(&mut delay);
        assert!(!eval.triggered);
        assert!(matches!(eval.sample, Sample::Distance(_)));
    }

    #[test]
    fn test_timeout_never_triggers() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::new(&[Ok(10), Ok(10), Err(SensorError::Timeout)]);
        let buttons = Buttons::new(MockPin(&unit), MockPin(&side));
        let mut input = InputSource::new(sensor, true, buttons, &WasherConfig::DEFAULT);
        let mut delay = MockDelay::new();

        let eval = input.evaluate(&mut delay);
        assert!(!eval.triggered);
        assert_eq!(
            eval.sample,
            Sample::Distance(DistanceReading {
                distance_mm: WasherConfig::DEFAULT.fallback_distance_mm,
                timed_out: true,
            })
        );
    }

    #[test]
    fn test_button_mode_never_reads_sensor() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        // Hot-plugged sensor seeing a hand: must be ignored
        let sensor = ScriptedSensor::constant(50);
        let buttons = Buttons::new(MockPin(&unit), MockPin(&side));
        let mut input = InputSource::new(sensor, false, buttons, &WasherConfig::DEFAULT);
        let mut delay = MockDelay::new();

        assert_eq!(input.mode(), InputMode::Buttons);
        input.refresh();
        assert!(!input.evaluate(&mut delay).triggered);

        side.set(false);
        input.refresh();
        let eval = input.evaluate(&mut delay);
        assert!(eval.triggered);
        assert_eq!(eval.sample, Sample::Button(Some(Button::Side)));

        assert_eq!(input.sensor.reads, 0);
        assert_eq!(delay.elapsed_ms, 0);
    }
}
