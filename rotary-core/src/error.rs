//! Error types for acquisition and polling.

use core::fmt;

use crate::traits::SensorChannel;

/// Reason a driver reported for a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// The driver does not implement the request.
    Unsupported,
    /// The hardware rejected or failed the access.
    Io,
    /// The peripheral is in use elsewhere.
    Busy,
    /// The hardware did not answer in time.
    Timeout,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            ErrorCode::Unsupported => "unsupported",
            ErrorCode::Io => "i/o",
            ErrorCode::Busy => "busy",
            ErrorCode::Timeout => "timeout",
        };
        f.write_str(text)
    }
}

/// Every way startup or the poll loop can fail. All of them are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No compatible counter peripheral exists on this board.
    NoDevice,

    /// The counter exists but its driver did not come up.
    NotReady { device: &'static str },

    /// The GPIO port behind the LED is not ready.
    LedNotReady { device: &'static str },

    /// The GPIO port behind the button is not ready.
    ButtonNotReady { device: &'static str },

    /// Direction setup of a pin was rejected.
    Configure { device: &'static str, code: ErrorCode },

    /// Arming the edge interrupt of a pin was rejected.
    Interrupt { device: &'static str, code: ErrorCode },

    /// Latching a counter sample failed.
    Fetch(ErrorCode),

    /// Reading a channel of the latched sample failed.
    Channel { channel: SensorChannel, code: ErrorCode },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NoDevice => write!(f, "no device found"),
            Error::NotReady { device } => write!(
                f,
                "Device \"{}\" is not ready; check the driver initialization logs for errors",
                device
            ),
            Error::LedNotReady { device } => write!(f, "GPIO not ready for LED at {}", device),
            Error::ButtonNotReady { device } => {
                write!(f, "button device {} is not ready", device)
            }
            Error::Configure { device, code } => {
                write!(f, "failed to configure {} ({})", device, code)
            }
            Error::Interrupt { device, code } => {
                write!(f, "failed to configure interrupt on {} ({})", device, code)
            }
            Error::Fetch(code) => write!(f, "Failed to fetch sample ({})", code),
            Error::Channel { code, .. } => write!(f, "Failed to get data ({})", code),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NoDevice => defmt::write!(f, "no device found"),
            Error::NotReady { device } => defmt::write!(
                f,
                "Device \"{=str}\" is not ready; check the driver initialization logs for errors",
                device
            ),
            Error::LedNotReady { device } => {
                defmt::write!(f, "GPIO not ready for LED at {=str}", device)
            }
            Error::ButtonNotReady { device } => {
                defmt::write!(f, "button device {=str} is not ready", device)
            }
            Error::Configure { device, code } => {
                defmt::write!(f, "failed to configure {=str} ({})", device, code)
            }
            Error::Interrupt { device, code } => {
                defmt::write!(f, "failed to configure interrupt on {=str} ({})", device, code)
            }
            Error::Fetch(code) => defmt::write!(f, "Failed to fetch sample ({})", code),
            Error::Channel { code, .. } => defmt::write!(f, "Failed to get data ({})", code),
        }
    }
}
