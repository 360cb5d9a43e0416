//! Button edge handling on interrupt context.
//!
//! Presses are written to a [`PressLog`] with atomics. Nothing in the poll
//! loop reads it: a press shows up in the diagnostics only and has no effect
//! on rotation handling.

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal_async::digital::Wait;

use crate::traits::{CycleCounter, Edge};

/// Press count and timestamp of the latest press.
#[derive(Debug, Default)]
pub struct PressLog {
    presses: AtomicU32,
    last_cycles: AtomicU32,
}

impl PressLog {
    pub const fn new() -> Self {
        Self {
            presses: AtomicU32::new(0),
            last_cycles: AtomicU32::new(0),
        }
    }

    pub fn record(&self, cycles: u32) {
        self.last_cycles.store(cycles, Ordering::Relaxed);
        self.presses.fetch_add(1, Ordering::Release);
    }

    pub fn presses(&self) -> u32 {
        self.presses.load(Ordering::Acquire)
    }

    /// Cycle count of the latest press, `None` before the first one.
    pub fn last_cycles(&self) -> Option<u32> {
        match self.presses() {
            0 => None,
            _ => Some(self.last_cycles.load(Ordering::Relaxed)),
        }
    }
}

/// Waits for the armed edge on a button pin and timestamps each one.
pub struct ButtonWatcher<P, C> {
    pin: P,
    clock: C,
    edge: Edge,
}

impl<P, C> ButtonWatcher<P, C>
where
    P: Wait,
    C: CycleCounter,
{
    pub fn new(pin: P, clock: C, edge: Edge) -> Self {
        Self { pin, clock, edge }
    }

    /// Wait for the next qualifying edge, record it in `log` and return the
    /// cycle count read at that moment.
    pub async fn next_press(&mut self, log: &PressLog) -> Result<u32, P::Error> {
        match self.edge {
            Edge::Rising => self.pin.wait_for_rising_edge().await?,
            Edge::Falling => self.pin.wait_for_falling_edge().await?,
            Edge::Any => self.pin.wait_for_any_edge().await?,
        }

        let cycles = self.clock.cycles();
        log.record(cycles);
        Ok(cycles)
    }
}
