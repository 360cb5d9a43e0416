//! Fakes of the hardware traits shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType};
use embedded_hal_async::digital::Wait;

use crate::error::ErrorCode;
use crate::traits::{
    Button, CycleCounter, Device, Edge, Led, RotationSensor, SensorChannel, SensorValue,
};

/// Ordered record of every hardware call made by the fakes.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<&'static str>>>);

impl Journal {
    fn push(&self, entry: &'static str) {
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.borrow().iter().any(|e| *e == entry)
    }
}

pub struct FakeSensor {
    journal: Journal,
    readings: VecDeque<i32>,
    latched: i32,
    ready: bool,
    fetch_error: Option<ErrorCode>,
    channel_error: Option<ErrorCode>,
}

impl FakeSensor {
    /// Each fetch latches the next value; the last one repeats once exhausted.
    pub fn with_values(journal: &Journal, values: &[i32]) -> Self {
        Self {
            journal: journal.clone(),
            readings: values.iter().copied().collect(),
            latched: 0,
            ready: true,
            fetch_error: None,
            channel_error: None,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn fail_fetch(&mut self, code: ErrorCode) {
        self.fetch_error = Some(code);
    }

    pub fn fail_channel(&mut self, code: ErrorCode) {
        self.channel_error = Some(code);
    }
}

impl Device for FakeSensor {
    fn name(&self) -> &'static str {
        "TIM1"
    }

    fn is_ready(&self) -> bool {
        self.journal.push("TIM1.is_ready");
        self.ready
    }
}

impl RotationSensor for FakeSensor {
    fn sample_fetch(&mut self) -> Result<(), ErrorCode> {
        self.journal.push("TIM1.sample_fetch");
        if let Some(code) = self.fetch_error {
            return Err(code);
        }
        if let Some(next) = self.readings.pop_front() {
            self.latched = next;
        }
        Ok(())
    }

    fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, ErrorCode> {
        self.journal.push("TIM1.channel_get");
        if let Some(code) = self.channel_error {
            return Err(code);
        }
        match channel {
            SensorChannel::Rotation => Ok(SensorValue {
                val1: self.latched,
                val2: 0,
            }),
            SensorChannel::Direction => Err(ErrorCode::Unsupported),
        }
    }
}

pub struct FakeLed {
    journal: Journal,
    lit: bool,
    toggles: u32,
    ready: bool,
    configure_error: Option<ErrorCode>,
}

impl FakeLed {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            lit: false,
            toggles: 0,
            ready: true,
            configure_error: None,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn fail_configure(&mut self, code: ErrorCode) {
        self.configure_error = Some(code);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn toggles(&self) -> u32 {
        self.toggles
    }
}

impl Device for FakeLed {
    fn name(&self) -> &'static str {
        "PC13"
    }

    fn is_ready(&self) -> bool {
        self.journal.push("PC13.is_ready");
        self.ready
    }
}

impl Led for FakeLed {
    fn configure_output(&mut self) -> Result<(), ErrorCode> {
        self.journal.push("PC13.configure_output");
        match self.configure_error {
            Some(code) => Err(code),
            None => {
                self.lit = true;
                Ok(())
            }
        }
    }

    fn on(&mut self) {
        self.journal.push("PC13.on");
        self.lit = true;
    }

    fn off(&mut self) {
        self.journal.push("PC13.off");
        self.lit = false;
    }

    fn toggle(&mut self) {
        self.journal.push("PC13.toggle");
        self.lit = !self.lit;
        self.toggles += 1;
    }
}

pub struct FakeButton {
    journal: Journal,
    ready: bool,
    armed: Option<Edge>,
    input_error: Option<ErrorCode>,
    interrupt_error: Option<ErrorCode>,
}

impl FakeButton {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            ready: true,
            armed: None,
            input_error: None,
            interrupt_error: None,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn fail_input(&mut self, code: ErrorCode) {
        self.input_error = Some(code);
    }

    pub fn fail_interrupt(&mut self, code: ErrorCode) {
        self.interrupt_error = Some(code);
    }

    pub fn armed(&self) -> Option<Edge> {
        self.armed
    }
}

impl Device for FakeButton {
    fn name(&self) -> &'static str {
        "PB15"
    }

    fn is_ready(&self) -> bool {
        self.journal.push("PB15.is_ready");
        self.ready
    }
}

impl Button for FakeButton {
    fn configure_input(&mut self) -> Result<(), ErrorCode> {
        self.journal.push("PB15.configure_input");
        self.input_error.map_or(Ok(()), Err)
    }

    fn configure_interrupt(&mut self, edge: Edge) -> Result<(), ErrorCode> {
        self.journal.push("PB15.configure_interrupt");
        if let Some(code) = self.interrupt_error {
            return Err(code);
        }
        self.armed = Some(edge);
        Ok(())
    }
}

/// Raised by [`FakeEdges`] once its scripted edges run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeError;

impl embedded_hal::digital::Error for EdgeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin that replays a fixed sequence of edges.
pub struct FakeEdges {
    edges: VecDeque<Edge>,
}

impl FakeEdges {
    pub fn new(edges: &[Edge]) -> Self {
        Self {
            edges: edges.iter().copied().collect(),
        }
    }

    fn skip_until(&mut self, wanted: Edge) -> Result<(), EdgeError> {
        while let Some(edge) = self.edges.pop_front() {
            if wanted == Edge::Any || edge == wanted {
                return Ok(());
            }
        }
        Err(EdgeError)
    }
}

impl ErrorType for FakeEdges {
    type Error = EdgeError;
}

impl Wait for FakeEdges {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.skip_until(Edge::Rising)
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.skip_until(Edge::Falling)
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.skip_until(Edge::Rising)
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.skip_until(Edge::Falling)
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.skip_until(Edge::Any)
    }
}

/// Cycle counter that advances by a fixed step on every read.
pub struct StepClock {
    next: Cell<u32>,
    step: u32,
}

impl StepClock {
    pub fn starting_at(start: u32, step: u32) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl CycleCounter for StepClock {
    fn cycles(&self) -> u32 {
        let now = self.next.get();
        self.next.set(now.wrapping_add(self.step));
        now
    }
}
