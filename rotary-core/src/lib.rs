//! Hardware-independent core of the rotary monitor firmware.
//!
//! The firmware crate binds these pieces to real peripherals:
//!
//! - [`acquire`] checks and configures the counter, LED and button once at boot
//! - [`RotationMonitor`] is the sample/compare/toggle step of the poll loop
//! - [`ButtonWatcher`] waits for button edges and stamps them with a cycle count
//! - [`Position`] turns a wrapping 16-bit hardware count into a signed position
//!
//! # Crate Features
//!
//! - **`defmt`** — `defmt::Format` for the error and value types.

#![cfg_attr(not(test), no_std)]

pub mod acquire;
pub mod button;
pub mod error;
pub mod monitor;
pub mod position;
pub mod traits;

#[cfg(test)]
mod testing;

pub use acquire::{Board, acquire};
pub use button::{ButtonWatcher, PressLog};
pub use error::{Error, ErrorCode};
pub use monitor::RotationMonitor;
pub use position::Position;
pub use traits::{
    Button, CycleCounter, Device, Edge, Led, RotationSensor, SensorChannel, SensorValue,
};
