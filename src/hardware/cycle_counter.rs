use cortex_m::peripheral::DWT;
use rotary_core::CycleCounter;

/// Reads the DWT cycle counter (CYCCNT), which runs at the core clock.
pub struct DwtCycleCounter {
    _enabled: (),
}

impl DwtCycleCounter {
    /// Start the cycle counter. Returns `None` when the core peripherals
    /// were already taken or the core has no cycle counter.
    pub fn enable() -> Option<Self> {
        let mut core = cortex_m::Peripherals::take()?;
        if !DWT::has_cycle_counter() {
            return None;
        }
        core.DCB.enable_trace();
        core.DWT.enable_cycle_counter();
        Some(Self { _enabled: () })
    }
}

impl CycleCounter for DwtCycleCounter {
    fn cycles(&self) -> u32 {
        DWT::cycle_count()
    }
}
