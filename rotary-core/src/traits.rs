//! Hardware boundary of the firmware.
//!
//! Drivers in the firmware crate implement these traits for real pins and
//! timers; the tests in this crate implement them with fakes.

use crate::error::ErrorCode;

/// Anything that has to report ready before it may be configured or used.
pub trait Device {
    /// Name used in diagnostics, e.g. `"TIM1"` or `"PB15"`.
    fn name(&self) -> &'static str;

    /// Readiness predicate checked by [`acquire`](crate::acquire).
    fn is_ready(&self) -> bool;
}

pub trait Led: Device {
    /// Switch the line to an output driven to its active level.
    fn configure_output(&mut self) -> Result<(), ErrorCode>;
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);
}

pub trait Button: Device {
    fn configure_input(&mut self) -> Result<(), ErrorCode>;
    fn configure_interrupt(&mut self, edge: Edge) -> Result<(), ErrorCode>;
}

/// Signal transition a button interrupt is armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
    Any,
}

impl Edge {
    /// The edge on which a line becomes active.
    pub const fn activating(active_low: bool) -> Self {
        if active_low { Edge::Falling } else { Edge::Rising }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorChannel {
    /// Accumulated pulse count.
    Rotation,
    /// Counting direction of the latest step.
    Direction,
}

/// A channel reading split into integer and fractional (millionths) parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValue {
    pub val1: i32,
    pub val2: i32,
}

/// A pulse counter that latches a sample and exposes it per channel.
pub trait RotationSensor: Device {
    /// Latch a fresh sample from the hardware.
    fn sample_fetch(&mut self) -> Result<(), ErrorCode>;

    /// Read a channel of the most recently latched sample.
    fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, ErrorCode>;
}

/// Free-running hardware cycle counter.
pub trait CycleCounter {
    fn cycles(&self) -> u32;
}
