#![no_std]
#![no_main]

use cortex_m_rt::entry;
use debounced_input::{
    ActiveLevel, ButtonConfig, ButtonPin, DebouncedInput, Millis, Pull, TimeSource,
};
use panic_halt as _;

// ============================================================================
// Minimal Pin Implementation
// ============================================================================

/// Zero-size pin implementation for measuring library overhead
pub struct MinimalPin;

impl ButtonPin for MinimalPin {
    fn configure(&mut self, pull: Pull) {
        core::hint::black_box(pull);
    }

    fn is_high(&mut self) -> bool {
        core::hint::black_box(false)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource for MinimalTimeSource {
    fn now(&self) -> Millis {
        Millis(core::hint::black_box(0))
    }
}

// ============================================================================
// Test Buttons
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_buttons() {
    let time_source = MinimalTimeSource;

    // Plain debounced button with edge helpers
    let mut button = DebouncedInput::new(MinimalPin, &time_source, 20);
    button.begin();
    core::hint::black_box(button.poll());
    core::hint::black_box(button.pressed());
    core::hint::black_box(button.toggled());
    core::hint::black_box(button.has_changed());
    core::hint::black_box(button);

    // Auto-repeat button driven through released()
    let mut repeat = DebouncedInput::new(MinimalPin, &time_source, 20);
    repeat.set_repeat(500, 100);
    core::hint::black_box(repeat.released());
    core::hint::black_box(repeat.repeat_count());
    core::hint::black_box(repeat);

    // Fully configured button driven through the event stream
    let config = ButtonConfig::new(10)
        .active_level(ActiveLevel::High)
        .repeat(300, 0);
    let mut events = DebouncedInput::with_config(MinimalPin, &time_source, config);
    events.begin();
    core::hint::black_box(events.event());
    core::hint::black_box(events);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_buttons();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
