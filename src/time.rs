//! Millisecond time abstraction for platform-agnostic timing.
//!
//! The debouncer only ever needs a free-running 32-bit millisecond counter.
//! [`Millis`] wraps that counter and keeps all arithmetic modular, so a clock
//! that rolls over at 2^32 (every ~49.7 days) keeps working.

/// Half of the `u32` range. Deadlines further away than this are ambiguous.
const HALF_RANGE: u32 = 1 << 31;

/// A point in time on a wrapping 32-bit millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Adds `millis`, wrapping at 2^32.
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Millis(self.0.wrapping_add(millis))
    }

    /// Milliseconds elapsed since `earlier`, modulo 2^32.
    pub const fn wrapping_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Returns `true` once this instant is at or past `deadline`.
    ///
    /// The comparison is made on the wrapped difference, so it stays correct
    /// across counter rollover as long as both instants are less than
    /// 2^31 ms (~24.8 days) apart.
    pub const fn has_reached(self, deadline: Millis) -> bool {
        self.wrapping_since(deadline) < HALF_RANGE
    }
}

/// Trait for abstracting the monotonic millisecond clock.
///
/// Implementations typically read a SysTick-driven counter or a HAL timer.
/// The counter is expected to wrap at 2^32.
pub trait TimeSource {
    /// Returns the current time instant.
    fn now(&self) -> Millis;
}
