//! Compile-time board selection.
//!
//! Pin map and clock tree of the supported board. Exactly one `board-*`
//! feature picks the chip in `embassy-stm32` and the constants below.
//!
//! Blue Pill (STM32F103C8):
//!   LED     -> PC13 (onboard, active low)
//!   Button  -> PB15 (to GND, internal pull-up, EXTI15)
//!   Encoder -> PA8 (TIM1_CH1), PA9 (TIM1_CH2)

#[cfg(not(feature = "board-bluepill"))]
compile_error!("Unsupported board: enable the `board-bluepill` feature");

use embassy_stm32::{
    Peripherals,
    exti::ExtiInput,
    gpio::{Flex, Pull},
    interrupt::Priority,
    peripherals,
    time::Hertz,
    timer::qei::{Qei, QeiPin},
};
use embassy_time::Duration;
use rotary_core::Edge;

use crate::hardware::{gpio_button::GpioButton, gpio_led::GpioLed, qei_counter::QeiCounter};

pub const NAME: &str = "stm32f103c8 blue pill";

/// Settling time for the encoder and button lines after reset.
pub const STARTUP_DELAY: Duration = Duration::from_millis(250);

pub const LED_ACTIVE_LOW: bool = true;
pub const BUTTON_ACTIVE_LOW: bool = true;

/// Button interrupt fires on the inactive -> active transition.
pub const BUTTON_EDGE: Edge = Edge::activating(BUTTON_ACTIVE_LOW);

/// Priority of the executor that runs the button watcher. It has to preempt
/// the thread-mode poll loop, which never yields.
pub const BUTTON_PRIORITY: Priority = Priority::P6;

/// Devices of this board, before acquisition has checked them.
pub struct Parts {
    pub counter: Option<QeiCounter<'static, peripherals::TIM1>>,
    pub led: GpioLed<'static>,
    pub button: GpioButton<'static>,
}

/// Clock tree: 8 MHz HSE through the PLL to 72 MHz.
pub fn config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9, // 8 MHz * 9 = 72 MHz
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2; // 36 MHz max on APB1
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// Hand the board's pins and timer to their drivers.
pub fn split(p: Peripherals) -> Parts {
    let qei = Qei::new(p.TIM1, QeiPin::new_ch1(p.PA8), QeiPin::new_ch2(p.PA9));

    Parts {
        counter: Some(QeiCounter::new(qei, "TIM1")),
        led: GpioLed::new(Flex::new(p.PC13), "PC13", LED_ACTIVE_LOW),
        button: GpioButton::new(ExtiInput::new(p.PB15, p.EXTI15, Pull::Up), "PB15"),
    }
}
