use embassy_stm32::gpio::{Flex, Level, Speed};
use rotary_core::{Device, ErrorCode, Led};

/// LED on a plain GPIO line, switched to output by
/// [`configure_output`](Led::configure_output).
pub struct GpioLed<'d> {
    pin: Flex<'d>,
    name: &'static str,
    active_low: bool,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Flex<'d>, name: &'static str, active_low: bool) -> Self {
        Self {
            pin,
            name,
            active_low,
        }
    }

    fn active(&self) -> Level {
        if self.active_low { Level::Low } else { Level::High }
    }

    fn inactive(&self) -> Level {
        if self.active_low { Level::High } else { Level::Low }
    }
}

impl<'d> Device for GpioLed<'d> {
    fn name(&self) -> &'static str {
        self.name
    }

    // Owning the pin singleton is all the readiness a GPIO needs.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<'d> Led for GpioLed<'d> {
    fn configure_output(&mut self) -> Result<(), ErrorCode> {
        // Latch the level first so the pin comes up driven active.
        self.pin.set_level(self.active());
        self.pin.set_as_output(Speed::Low);
        Ok(())
    }

    fn on(&mut self) {
        self.pin.set_level(self.active());
    }

    fn off(&mut self) {
        self.pin.set_level(self.inactive());
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}

impl<'d> Drop for GpioLed<'d> {
    fn drop(&mut self) {
        // Flex floats the pin after this.
        self.off();
    }
}
