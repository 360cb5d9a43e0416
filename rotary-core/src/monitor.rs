//! Sample/compare/toggle step of the poll loop.

use crate::error::Error;
use crate::traits::{Led, RotationSensor, SensorChannel};

/// Tracks the last reported rotation value.
///
/// The previous value starts at zero, so a counter that already holds a
/// nonzero count at boot is reported (and toggles the LED) on the first poll.
#[derive(Debug, Default)]
pub struct RotationMonitor {
    previous: i32,
}

impl RotationMonitor {
    pub const fn new() -> Self {
        Self { previous: 0 }
    }

    /// The last value for which the LED was toggled.
    pub fn previous(&self) -> i32 {
        self.previous
    }

    /// Compare a reading against the previous one.
    ///
    /// Returns `Some(value)` and stores it when it differs, `None` otherwise.
    pub fn observe(&mut self, value: i32) -> Option<i32> {
        if value == self.previous {
            return None;
        }
        self.previous = value;
        Some(value)
    }

    /// Run one loop iteration: fetch, read the rotation channel, and toggle
    /// `led` when the value changed.
    ///
    /// # Errors
    /// * [`Error::Fetch`] when the sample cannot be latched
    /// * [`Error::Channel`] when the rotation channel cannot be read
    pub fn poll<S, L>(&mut self, sensor: &mut S, led: &mut L) -> Result<Option<i32>, Error>
    where
        S: RotationSensor,
        L: Led,
    {
        sensor.sample_fetch().map_err(Error::Fetch)?;

        let channel = SensorChannel::Rotation;
        let rotation = sensor
            .channel_get(channel)
            .map_err(|code| Error::Channel { channel, code })?;

        let changed = self.observe(rotation.val1);
        if changed.is_some() {
            led.toggle();
        }
        Ok(changed)
    }
}
