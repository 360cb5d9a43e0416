//! One-shot startup sequence that checks and configures every device.

use crate::error::Error;
use crate::traits::{Button, Edge, Led, RotationSensor};

/// Devices that passed acquisition, owned for the rest of the program.
pub struct Board<S, L, B> {
    pub counter: S,
    pub led: L,
    pub button: B,
}

/// Validate and configure the counter, the LED and the button, in that order.
///
/// The first failure is returned and nothing after it is touched: a missing
/// counter never reaches the LED, and a rejected LED never reaches the button.
/// On success the LED is an output driven to its inactive level and the
/// button interrupt is armed for `edge`.
///
/// # Errors
/// * [`Error::NoDevice`] if `counter` is `None`
/// * [`Error::NotReady`], [`Error::LedNotReady`] or [`Error::ButtonNotReady`]
///   for the first device whose readiness check fails
/// * [`Error::Configure`] if the LED or button direction is rejected
/// * [`Error::Interrupt`] if the button edge interrupt is rejected
pub fn acquire<S, L, B>(
    counter: Option<S>,
    mut led: L,
    mut button: B,
    edge: Edge,
) -> Result<Board<S, L, B>, Error>
where
    S: RotationSensor,
    L: Led,
    B: Button,
{
    let counter = counter.ok_or(Error::NoDevice)?;
    if !counter.is_ready() {
        return Err(Error::NotReady {
            device: counter.name(),
        });
    }

    if !led.is_ready() {
        return Err(Error::LedNotReady { device: led.name() });
    }
    led.configure_output().map_err(|code| Error::Configure {
        device: led.name(),
        code,
    })?;
    led.off();

    if !button.is_ready() {
        return Err(Error::ButtonNotReady {
            device: button.name(),
        });
    }
    button.configure_input().map_err(|code| Error::Configure {
        device: button.name(),
        code,
    })?;
    button.configure_interrupt(edge).map_err(|code| Error::Interrupt {
        device: button.name(),
        code,
    })?;

    Ok(Board {
        counter,
        led,
        button,
    })
}
