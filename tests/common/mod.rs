//! Shared test infrastructure for debounced-input integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use debounced_input::{
    ButtonPin, ButtonState, DebouncedInput, Millis, Pull, TimeSource,
};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: Cell::new(millis),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping at 2^32
    pub fn advance(&self, millis: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(millis);
    }

    pub fn millis(&self) -> u32 {
        self.current_time.get()
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Millis {
        Millis(self.current_time.get())
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Electrical state of a wire the test drives, shared with the [`MockPin`]
/// owned by the debouncer.
pub struct PinLine {
    high: Cell<bool>,
    pull: Cell<Option<Pull>>,
    reads: Cell<u32>,
}

impl PinLine {
    /// A line idling high, as an active-low button with pull-up would.
    pub fn new() -> Self {
        Self::with_level(true)
    }

    pub fn with_level(high: bool) -> Self {
        Self {
            high: Cell::new(high),
            pull: Cell::new(None),
            reads: Cell::new(0),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    pub fn toggle(&self) {
        self.high.set(!self.high.get());
    }

    pub fn is_high(&self) -> bool {
        self.high.get()
    }

    /// Pull resistor requested by the last `configure` call
    pub fn pull(&self) -> Option<Pull> {
        self.pull.get()
    }

    /// Number of times the pin was sampled
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }
}

/// Pin handed to the debouncer
pub struct MockPin<'a> {
    line: &'a PinLine,
}

impl ButtonPin for MockPin<'_> {
    fn configure(&mut self, pull: Pull) {
        self.line.pull.set(Some(pull));
    }

    fn is_high(&mut self) -> bool {
        self.line.reads.set(self.line.reads.get() + 1);
        self.line.high.get()
    }
}

pub type TestButton<'a> = DebouncedInput<'a, MockPin<'a>, MockTimeSource>;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Active-low: a low line means pressed
pub fn press(line: &PinLine) {
    line.set_high(false);
}

pub fn release(line: &PinLine) {
    line.set_high(true);
}

/// Polls once per millisecond until the clock reads `until` (inclusive),
/// starting one millisecond after the current time.
pub fn poll_until(button: &mut TestButton<'_>, timer: &MockTimeSource, until: u32) -> ButtonState {
    let mut state = button.state();
    while timer.millis() != until {
        timer.advance(1);
        state = button.poll();
    }
    state
}

/// Polls once per millisecond for `millis` milliseconds and records every state seen
pub fn poll_trace<const N: usize>(
    button: &mut TestButton<'_>,
    timer: &MockTimeSource,
    millis: u32,
) -> heapless::Vec<ButtonState, N> {
    let mut trace = heapless::Vec::new();
    for _ in 0..millis {
        timer.advance(1);
        let _ = trace.push(button.poll());
    }
    trace
}

/// Holds the button down from the current time and polls until the press is committed.
///
/// Returns the time of the commit.
pub fn press_and_settle(button: &mut TestButton<'_>, line: &PinLine, timer: &MockTimeSource) -> u32 {
    press(line);
    button.poll();
    let settle_at = timer.millis().wrapping_add(u32::from(button.debounce_ms()));
    poll_until(button, timer, settle_at);
    settle_at
}

/// Lets go of the button and polls until the release is committed.
pub fn release_and_settle(button: &mut TestButton<'_>, line: &PinLine, timer: &MockTimeSource) -> u32 {
    release(line);
    button.poll();
    let settle_at = timer.millis().wrapping_add(u32::from(button.debounce_ms()));
    poll_until(button, timer, settle_at);
    settle_at
}
