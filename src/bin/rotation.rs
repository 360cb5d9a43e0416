//! Rotary Encoder Monitor
//! =============================================================================================
//!
//! Polls a quadrature encoder on TIM1 and reports every change of the
//! rotation count. The onboard LED toggles on each change. Button presses
//! are logged with a DWT cycle timestamp from interrupt context and do not
//! influence the rotation handling.
//!
//! Hardware connections: see `rotary_monitor::board`.
//!
//! Any setup or sampling failure is logged and the main task returns.
//!
//! Run with `cargo firmware`

#![no_std]
#![no_main]

use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::InterruptExt;
use embassy_time::Timer;
use rotary_core::{Board, ButtonWatcher, Device, PressLog, RotationMonitor, acquire};
use rotary_monitor::{
    board,
    hardware::{cycle_counter::DwtCycleCounter, gpio_button::GpioButton},
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

// Spare vector: USART3 is not used by this firmware.
#[interrupt]
unsafe fn USART3() {
    unsafe { BUTTON_EXECUTOR.on_interrupt() }
}

/// Button Interrupt Task
///
/// Runs on the interrupt executor, so it preempts the busy poll loop.
#[embassy_executor::task]
async fn button_task(
    mut watcher: ButtonWatcher<GpioButton<'static>, DwtCycleCounter>,
    presses: &'static PressLog,
) {
    loop {
        match watcher.next_press(presses).await {
            Ok(cycles) => defmt::info!("Button pressed at {}", cycles),
            Err(never) => match never {},
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(board::config());

    Timer::after(board::STARTUP_DELAY).await;

    defmt::info!("Startup of board: {=str}", board::NAME);

    let parts = board::split(p);
    let Board {
        mut counter,
        mut led,
        button,
    } = match acquire(parts.counter, parts.led, parts.button, board::BUTTON_EDGE) {
        Ok(devices) => devices,
        Err(e) => {
            defmt::error!("Error: {}", e);
            return;
        }
    };

    let Some(clock) = DwtCycleCounter::enable() else {
        defmt::error!("Error: cycle counter unavailable, button timestamps cannot be taken");
        return;
    };

    static PRESSES: StaticCell<PressLog> = StaticCell::new();
    let presses: &'static PressLog = PRESSES.init(PressLog::new());

    defmt::info!("Set up button at {=str}", button.name());
    let edge = button.armed_edge().unwrap_or(board::BUTTON_EDGE);

    interrupt::USART3.set_priority(board::BUTTON_PRIORITY);
    let button_spawner = BUTTON_EXECUTOR.start(interrupt::USART3);
    defmt::unwrap!(button_spawner.spawn(button_task(
        ButtonWatcher::new(button, clock, edge),
        presses,
    )));

    defmt::info!("Found device \"{=str}\", getting sensor data", counter.name());

    // Busy poll: no sleep, no yield. Only interrupts run besides this loop.
    let mut monitor = RotationMonitor::new();
    loop {
        match monitor.poll(&mut counter, &mut led) {
            Ok(Some(rotation)) => defmt::info!("Rotation: {}", rotation),
            Ok(None) => {}
            Err(e) => {
                defmt::error!("{}", e);
                return;
            }
        }
    }
}
