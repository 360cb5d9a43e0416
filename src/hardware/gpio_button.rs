use core::convert::Infallible;

use embassy_stm32::exti::ExtiInput;
use embedded_hal::digital::ErrorType;
use embedded_hal_async::digital::Wait;
use rotary_core::{Button, Device, Edge, ErrorCode};

/// Push button on an EXTI-capable input.
///
/// `ExtiInput::new` already sets the pin to input with its pull resistor and
/// routes the EXTI line, so configuration here only records the armed edge.
pub struct GpioButton<'d> {
    pin: ExtiInput<'d>,
    name: &'static str,
    edge: Option<Edge>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: ExtiInput<'d>, name: &'static str) -> Self {
        Self {
            pin,
            name,
            edge: None,
        }
    }

    /// Edge recorded by `configure_interrupt`, if it has run.
    pub fn armed_edge(&self) -> Option<Edge> {
        self.edge
    }
}

impl<'d> Device for GpioButton<'d> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_ready(&self) -> bool {
        true
    }
}

impl<'d> Button for GpioButton<'d> {
    fn configure_input(&mut self) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn configure_interrupt(&mut self, edge: Edge) -> Result<(), ErrorCode> {
        self.edge = Some(edge);
        Ok(())
    }
}

impl<'d> ErrorType for GpioButton<'d> {
    type Error = Infallible;
}

impl<'d> Wait for GpioButton<'d> {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_high().await;
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_low().await;
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_rising_edge().await;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_falling_edge().await;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_any_edge().await;
        Ok(())
    }
}
