//! Test doubles for the hardware traits

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use heapless::{Deque, String, Vec};
use lavabo_hal::InputPin;

use crate::traits::{Color, Panel, RangeSensor, SensorError};

const MAX_OPS: usize = 256;

/// Recorded panel operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOp {
    Fill(Color),
    Cursor(u16, u16),
    Size(u8),
    TextColor(Color),
    Print(String<12>),
}

/// Panel that records every operation
pub struct MockPanel {
    ops: Vec<PanelOp, MAX_OPS>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[PanelOp] {
        &self.ops
    }

    pub fn fills(&self) -> Vec<Color, MAX_OPS> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PanelOp::Fill(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn printed(&self) -> Vec<&str, MAX_OPS> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PanelOp::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: PanelOp) {
        self.ops.push(op).expect("mock panel log full");
    }
}

impl Panel for MockPanel {
    fn fill_screen(&mut self, color: Color) {
        self.record(PanelOp::Fill(color));
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.record(PanelOp::Cursor(x, y));
    }

    fn set_text_size(&mut self, size: u8) {
        self.record(PanelOp::Size(size));
    }

    fn set_text_color(&mut self, color: Color) {
        self.record(PanelOp::TextColor(color));
    }

    fn print(&mut self, text: &str) {
        let mut s = String::new();
        s.push_str(text).expect("mock panel text too long");
        self.record(PanelOp::Print(s));
    }
}

/// Delay that only adds up the requested time
pub struct MockDelay {
    pub elapsed_ms: u64,
    pub calls: u32,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0,
            calls: 0,
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.elapsed_ms += (ns / 1_000_000) as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.elapsed_ms += ms as u64;
    }
}

/// Sensor replaying a fixed script of results
pub struct ScriptedSensor {
    script: Deque<Result<u16, SensorError>, 64>,
    pub reads: u32,
}

impl ScriptedSensor {
    pub fn new(results: &[Result<u16, SensorError>]) -> Self {
        let mut script = Deque::new();
        for result in results {
            script.push_back(*result).expect("script too long");
        }
        Self { script, reads: 0 }
    }

    /// Sensor that always sees something at `mm`
    pub fn constant(mm: u16) -> Self {
        let mut sensor = Self::new(&[]);
        while sensor.script.push_back(Ok(mm)).is_ok() {}
        sensor
    }
}

impl RangeSensor for ScriptedSensor {
    fn read_range_mm(&mut self) -> Result<u16, SensorError> {
        self.reads += 1;
        self.script.pop_front().unwrap_or(Err(SensorError::Timeout))
    }
}

/// Input pin whose level the test controls through a shared cell
pub struct MockPin<'a>(pub &'a Cell<bool>);

impl InputPin for MockPin<'_> {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}
