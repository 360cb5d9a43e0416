use embassy_stm32::timer::{GeneralInstance4Channel, qei::Qei};
use rotary_core::{Device, ErrorCode, Position, RotationSensor, SensorChannel, SensorValue};

/// Timer in quadrature encoder mode exposed as a rotation sensor.
///
/// The hardware count is 16 bits wide and wraps; [`Position`] turns it into
/// a continuous signed reading on every fetch.
pub struct QeiCounter<'d, T: GeneralInstance4Channel> {
    qei: Qei<'d, T>,
    name: &'static str,
    position: Position,
}

impl<'d, T: GeneralInstance4Channel> QeiCounter<'d, T> {
    pub fn new(qei: Qei<'d, T>, name: &'static str) -> Self {
        // Anchor at the current count so boot starts at position 0.
        let position = Position::new(qei.count());
        Self {
            qei,
            name,
            position,
        }
    }
}

impl<'d, T: GeneralInstance4Channel> Device for QeiCounter<'d, T> {
    fn name(&self) -> &'static str {
        self.name
    }

    // Qei::new enables the timer; there is no later failure to detect.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<'d, T: GeneralInstance4Channel> RotationSensor for QeiCounter<'d, T> {
    fn sample_fetch(&mut self) -> Result<(), ErrorCode> {
        self.position.advance(self.qei.count());
        Ok(())
    }

    fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, ErrorCode> {
        self.position.channel(channel)
    }
}
