//! Signed rotation position accumulated from a wrapping 16-bit counter.

use crate::error::ErrorCode;
use crate::traits::{SensorChannel, SensorValue};

/// Folds successive readings of a 16-bit hardware count into an `i32`.
///
/// Each step is taken as the shortest signed distance between two readings,
/// so the position keeps counting past the register range in both
/// directions as long as fewer than 32768 pulses arrive between two calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    last_count: u16,
    position: i32,
}

impl Position {
    /// Anchor at `count`; the position starts at 0.
    pub const fn new(count: u16) -> Self {
        Self {
            last_count: count,
            position: 0,
        }
    }

    /// Take a new hardware reading and return the updated position.
    pub fn advance(&mut self, count: u16) -> i32 {
        let delta = count.wrapping_sub(self.last_count) as i16 as i32;
        self.position = self.position.wrapping_add(delta);
        self.last_count = count;
        self.position
    }

    pub fn get(&self) -> i32 {
        self.position
    }

    /// Value of `channel` for this position.
    ///
    /// # Errors
    /// [`ErrorCode::Unsupported`] for channels a counter cannot provide.
    pub fn channel(&self, channel: SensorChannel) -> Result<SensorValue, ErrorCode> {
        match channel {
            SensorChannel::Rotation => Ok(SensorValue {
                val1: self.position,
                val2: 0,
            }),
            SensorChannel::Direction => Err(ErrorCode::Unsupported),
        }
    }
}
