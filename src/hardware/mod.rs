pub mod cycle_counter;
pub mod gpio_button;
pub mod gpio_led;
pub mod qei_counter;
