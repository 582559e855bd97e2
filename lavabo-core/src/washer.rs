//! Polling loop context
//!
//! One explicit object owns the input source, the sequence controller and
//! the trigger flag. The firmware calls [`Washer::tick`] forever; each
//! observable step is reported as an [`Activity`] so the caller can log it.

use embedded_hal::delay::DelayNs;
use lavabo_hal::InputPin;

use crate::config::WasherConfig;
use crate::input::{Evaluation, InputMode, InputSource};
use crate::sequence::{SequenceController, State};
use crate::traits::{Panel, RangeSensor};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Input source was evaluated
    Evaluated(Evaluation),
    /// A sequence phase was entered
    Phase(State),
    /// Sequence finished, trigger cleared
    SequenceComplete,
    /// Ready screen was (re)drawn
    Ready,
}

/// The whole device, minus board bring-up
pub struct Washer<S, A, B, P> {
    input: InputSource<S, A, B>,
    controller: SequenceController<P>,
    trigger: bool,
    poll_interval_ms: u32,
}

impl<S, A, B, P> Washer<S, A, B, P>
where
    S: RangeSensor,
    A: InputPin,
    B: InputPin,
    P: Panel,
{
    /// Assemble the washer from its parts
    pub fn new(
        input: InputSource<S, A, B>,
        controller: SequenceController<P>,
        config: &WasherConfig,
    ) -> Self {
        Self {
            input,
            controller,
            trigger: false,
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// Input mode fixed at startup
    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Whether a trigger is pending
    pub fn trigger_pending(&self) -> bool {
        self.trigger
    }

    /// Current sequence state
    pub fn state(&self) -> State {
        self.controller.state()
    }

    /// Access the sequence controller
    pub fn controller(&self) -> &SequenceController<P> {
        &self.controller
    }

    /// One polling iteration
    ///
    /// Refreshes the button snapshot, sleeps the poll interval, evaluates
    /// the input source unless a trigger is pending, then either runs a
    /// full sequence (blocking) or makes sure the ready screen is shown.
    pub fn tick<D, F>(&mut self, delay: &mut D, mut report: F)
    where
        D: DelayNs,
        F: FnMut(Activity),
    {
        self.input.refresh();
        delay.delay_ms(self.poll_interval_ms);

        if !self.trigger {
            let evaluation = self.input.evaluate(delay);
            report(Activity::Evaluated(evaluation));
            self.trigger = evaluation.triggered;
        }

        if self.trigger {
            self.controller.run(delay, |phase| report(Activity::Phase(phase)));
            self.trigger = false;
            report(Activity::SequenceComplete);
        } else if self.controller.ensure_idle_screen() {
            report(Activity::Ready);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use heapless::Vec;

    use super::*;
    use crate::input::{Button, Buttons, DistanceReading, Sample};
    use crate::mock::{MockDelay, MockPanel, MockPin, ScriptedSensor};
    use crate::sequence::Background;
    use crate::traits::{Color, SensorError};

    type TestWasher<'a> = Washer<ScriptedSensor, MockPin<'a>, MockPin<'a>, MockPanel>;

    fn washer<'a>(
        sensor: ScriptedSensor,
        present: bool,
        unit: &'a Cell<bool>,
        side: &'a Cell<bool>,
    ) -> TestWasher<'a> {
        let config = WasherConfig::DEFAULT;
        let buttons = Buttons::new(MockPin(unit), MockPin(side));
        let input = InputSource::new(sensor, present, buttons, &config);
        let controller = SequenceController::new(MockPanel::new(), &config);
        Washer::new(input, controller, &config)
    }

    fn tick(washer: &mut TestWasher<'_>, delay: &mut MockDelay) -> Vec<Activity, 32> {
        let mut log = Vec::new();
        washer.tick(delay, |activity| {
            let _ = log.push(activity);
        });
        log
    }

    #[test]
    fn test_hand_present_runs_full_sequence() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::new(&[Ok(150), Ok(150), Ok(150)]);
        let mut washer = washer(sensor, true, &unit, &side);
        let mut delay = MockDelay::new();

        let log = tick(&mut washer, &mut delay);

        assert_eq!(
            log[0],
            Activity::Evaluated(Evaluation {
                sample: Sample::Distance(DistanceReading {
                    distance_mm: 150,
                    timed_out: false,
                }),
                triggered: true,
            })
        );
        assert_eq!(log[1], Activity::Phase(State::CountingDown(20)));
        assert_eq!(log[20], Activity::Phase(State::CountingDown(1)));
        assert_eq!(log[21], Activity::Phase(State::Rinsing));
        assert_eq!(log[22], Activity::Phase(State::Done));
        assert_eq!(log[23], Activity::SequenceComplete);
        assert_eq!(log.len(), 24);

        assert!(!washer.trigger_pending());
        assert_eq!(washer.state(), State::Idle);
        // poll + two settle pauses + sequence
        assert_eq!(delay.elapsed_ms, 200 + 100 + 20 * 990 + 4000 + 2000);

        // Sensor script exhausted: next tick times out and shows Ready
        let log = tick(&mut washer, &mut delay);
        assert_eq!(log.last(), Some(&Activity::Ready));
        assert_eq!(washer.controller().displayed(), Background::Ready);
    }

    #[test]
    fn test_no_hand_keeps_ready_without_redraw() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::constant(200);
        let mut washer = washer(sensor, true, &unit, &side);
        let mut delay = MockDelay::new();

        let first = tick(&mut washer, &mut delay);
        assert_eq!(first.len(), 2);
        assert_eq!(first[1], Activity::Ready);

        let second = tick(&mut washer, &mut delay);
        assert_eq!(second.len(), 1);
        assert!(matches!(
            second[0],
            Activity::Evaluated(Evaluation {
                triggered: false,
                ..
            })
        ));

        assert_eq!(washer.controller().panel().fills(), [Color::Black]);
        assert_eq!(washer.state(), State::Idle);
    }

    #[test]
    fn test_timeout_tick_does_not_trigger() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::new(&[Ok(100), Err(SensorError::Timeout), Ok(100)]);
        let mut washer = washer(sensor, true, &unit, &side);
        let mut delay = MockDelay::new();

        let log = tick(&mut washer, &mut delay);
        assert_eq!(log.len(), 2);
        assert!(!washer.trigger_pending());
        assert_eq!(washer.state(), State::Idle);
    }

    #[test]
    fn test_sensor_absent_uses_buttons_only() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        // Sensor attached after boot and seeing a hand
        let sensor = ScriptedSensor::constant(50);
        let mut washer = washer(sensor, false, &unit, &side);
        let mut delay = MockDelay::new();

        assert_eq!(washer.mode(), InputMode::Buttons);
        for _ in 0..3 {
            let log = tick(&mut washer, &mut delay);
            assert!(!log.iter().any(|a| matches!(a, Activity::Phase(_))));
        }

        unit.set(false);
        let log = tick(&mut washer, &mut delay);
        assert_eq!(
            log[0],
            Activity::Evaluated(Evaluation {
                sample: Sample::Button(Some(Button::Unit)),
                triggered: true,
            })
        );
        assert_eq!(log.last(), Some(&Activity::SequenceComplete));

        // Still held: no second run
        let log = tick(&mut washer, &mut delay);
        assert!(!log.iter().any(|a| matches!(a, Activity::Phase(_))));
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let unit = Cell::new(true);
        let side = Cell::new(true);
        let sensor = ScriptedSensor::constant(100);
        let mut washer = washer(sensor, true, &unit, &side);
        let mut delay = MockDelay::new();

        let log = tick(&mut washer, &mut delay);
        let phases: Vec<State, 32> = log
            .iter()
            .filter_map(|a| match a {
                Activity::Phase(state) => Some(*state),
                _ => None,
            })
            .collect();

        let mut previous = State::Idle;
        for phase in phases.iter().copied() {
            let allowed = match (previous, phase) {
                (State::Idle, State::CountingDown(20)) => true,
                (State::CountingDown(a), State::CountingDown(b)) => b + 1 == a,
                (State::CountingDown(1), State::Rinsing) => true,
                (State::Rinsing, State::Done) => true,
                _ => false,
            };
            assert!(allowed, "unexpected transition {:?} -> {:?}", previous, phase);
            previous = phase;
        }
        assert_eq!(previous, State::Done);
        assert_eq!(washer.state(), State::Idle);
    }
}
