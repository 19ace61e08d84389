//! Digital input pin abstraction.

/// Pull resistor requested when the pin is configured as an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Pull the line high; the button shorts it to ground.
    Up,
    /// Pull the line low; the button connects it to the supply.
    Down,
}

/// Trait for abstracting the physical input pin.
///
/// Implement this for your GPIO hardware. The debouncer owns the pin and
/// only ever calls [`configure`](ButtonPin::configure) from
/// [`DebouncedInput::begin`](crate::DebouncedInput::begin), so constructing a
/// debouncer never touches the hardware.
pub trait ButtonPin {
    /// Puts the pin into input mode with the given pull resistor.
    fn configure(&mut self, pull: Pull);

    /// Returns the instantaneous electrical level, `true` for high.
    fn is_high(&mut self) -> bool;
}

#[cfg(feature = "embedded-hal")]
pub use self::hal::HalPin;

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{ButtonPin, Pull};
    use core::convert::Infallible;
    use embedded_hal::digital::InputPin;

    /// Adapter for embedded-hal 1.0 input pins.
    ///
    /// HAL pins carry their mode and pull configuration in their type, so
    /// [`configure`](ButtonPin::configure) does nothing here. Only pins whose
    /// reads cannot fail are accepted.
    #[derive(Debug)]
    pub struct HalPin<P>(pub P);

    impl<P> HalPin<P> {
        /// Wraps a HAL input pin.
        pub fn new(pin: P) -> Self {
            HalPin(pin)
        }

        /// Returns the wrapped HAL pin.
        pub fn into_inner(self) -> P {
            self.0
        }
    }

    impl<P> ButtonPin for HalPin<P>
    where
        P: InputPin<Error = Infallible>,
    {
        fn configure(&mut self, _pull: Pull) {}

        fn is_high(&mut self) -> bool {
            match self.0.is_high() {
                Ok(level) => level,
                Err(never) => match never {},
            }
        }
    }
}
