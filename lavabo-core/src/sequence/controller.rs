//! Sequence controller
//!
//! Owns the sequence state and the panel. Every phase renders its screen
//! and then blocks for the phase's hold time, so once started a sequence
//! cannot be interrupted; the caller regains control only when the
//! machine is back in Idle.

use embedded_hal::delay::DelayNs;

use super::events::Event;
use super::machine::State;
use super::screen::{Background, Screen};
use crate::config::WasherConfig;
use crate::traits::Panel;

/// Sequence state plus all display output
pub struct SequenceController<P> {
    panel: P,
    state: State,
    /// Mirror of what is on the panel
    displayed: Background,
    countdown_from: u8,
    count_hold_ms: u32,
    rinse_hold_ms: u32,
    done_hold_ms: u32,
}

impl<P: Panel> SequenceController<P> {
    /// Create a controller in Idle with an unknown panel
    pub fn new(panel: P, config: &WasherConfig) -> Self {
        Self {
            panel,
            state: State::Idle,
            displayed: Background::Unknown,
            countdown_from: config.countdown_from,
            count_hold_ms: config.count_hold_ms,
            rinse_hold_ms: config.rinse_hold_ms,
            done_hold_ms: config.done_hold_ms,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Last rendered background
    pub fn displayed(&self) -> Background {
        self.displayed
    }

    /// Access the panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Render a screen and remember its background
    pub fn show(&mut self, screen: Screen<'_>) {
        screen.render(&mut self.panel);
        self.displayed = screen.background();
    }

    /// Draw the ready screen unless it is already showing
    ///
    /// Returns true when a redraw was issued. Has no effect outside Idle.
    pub fn ensure_idle_screen(&mut self) -> bool {
        if !self.state.is_idle() || self.displayed == Background::Ready {
            return false;
        }
        self.show(Screen::Ready);
        true
    }

    /// Leave Idle and start the countdown
    ///
    /// Returns false if a sequence is already running.
    pub fn start(&mut self) -> bool {
        if !self.state.is_idle() {
            return false;
        }
        self.state = self.state.transition(Event::Triggered(self.countdown_from));
        true
    }

    /// Execute the current phase: render, hold, transition
    ///
    /// Returns the state whose phase just ran, or None in Idle.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Option<State> {
        let current = self.state;
        let event = match current {
            State::Idle => return None,
            State::CountingDown(remaining) => {
                self.show(Screen::Count(remaining));
                delay.delay_ms(self.count_hold_ms);
                Event::CountElapsed
            }
            State::Rinsing => {
                self.show(Screen::Rinse);
                delay.delay_ms(self.rinse_hold_ms);
                Event::RinseElapsed
            }
            State::Done => {
                self.show(Screen::WellDone);
                delay.delay_ms(self.done_hold_ms);
                Event::DoneElapsed
            }
        };
        self.state = current.transition(event);
        Some(current)
    }

    /// Run a full sequence from Idle back to Idle
    ///
    /// `observe` is called with each phase as it is entered, before its
    /// screen is drawn.
    pub fn run<D, F>(&mut self, delay: &mut D, mut observe: F)
    where
        D: DelayNs,
        F: FnMut(State),
    {
        if !self.start() {
            return;
        }
        while !self.state.is_idle() {
            observe(self.state);
            self.step(delay);
        }
    }
}
