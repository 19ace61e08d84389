//! Core types for button state and configuration.

use crate::pin::Pull;

/// Debounce window used by [`ButtonConfig::default`].
pub const DEFAULT_DEBOUNCE_MS: u16 = 100;

/// Logical state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button is held down.
    Pressed,

    /// Button is up.
    Released,
}

impl ButtonState {
    /// Returns `true` for [`ButtonState::Pressed`].
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

impl core::fmt::Display for ButtonState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonState::Pressed => write!(f, "pressed"),
            ButtonState::Released => write!(f, "released"),
        }
    }
}

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button shorts the pin to ground; uses a pull-up.
    #[default]
    Low,

    /// Button connects the pin to the supply; uses a pull-down.
    High,
}

impl ActiveLevel {
    /// Maps an electrical level to a logical button state.
    pub const fn state_for(self, is_high: bool) -> ButtonState {
        match (self, is_high) {
            (ActiveLevel::Low, false) | (ActiveLevel::High, true) => ButtonState::Pressed,
            _ => ButtonState::Released,
        }
    }

    /// Pull resistor that keeps the pin in the released state.
    pub const fn pull(self) -> Pull {
        match self {
            ActiveLevel::Low => Pull::Up,
            ActiveLevel::High => Pull::Down,
        }
    }
}

/// Auto-repeat timing.
///
/// In a [`ButtonConfig`] this is the requested timing, with `delay_ms`
/// counted from the moment the button went down. Once applied to an input the
/// debounce window has been subtracted, so `delay_ms` counts from the end of
/// the window that committed the press. An `interval_ms` of zero makes the
/// repeat fire exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatConfig {
    /// Delay before the first repeat tick.
    pub delay_ms: u16,

    /// Period between subsequent ticks, zero for single-shot.
    pub interval_ms: u16,
}

impl RepeatConfig {
    /// Derives effective timing from a requested initial delay.
    ///
    /// The debounce window already elapses before a press is reported, so it
    /// is subtracted from the requested delay (clamped at zero).
    pub const fn from_requested(delay_ms: u16, interval_ms: u16, debounce_ms: u16) -> Self {
        Self {
            delay_ms: delay_ms.saturating_sub(debounce_ms),
            interval_ms,
        }
    }

    /// Returns `true` when the repeat fires only once per press.
    pub const fn is_single_shot(&self) -> bool {
        self.interval_ms == 0
    }
}

/// Construction-time settings for a [`DebouncedInput`](crate::DebouncedInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Quiet time required before a level change is accepted.
    pub debounce_ms: u16,

    /// Which electrical level counts as pressed.
    pub active_level: ActiveLevel,

    /// Requested repeat timing, if any.
    pub repeat: Option<RepeatConfig>,
}

impl ButtonConfig {
    /// Creates an active-low configuration without auto-repeat.
    pub const fn new(debounce_ms: u16) -> Self {
        Self {
            debounce_ms,
            active_level: ActiveLevel::Low,
            repeat: None,
        }
    }

    /// Sets the active level.
    pub const fn active_level(mut self, active_level: ActiveLevel) -> Self {
        self.active_level = active_level;
        self
    }

    /// Enables auto-repeat. See [`DebouncedInput::set_repeat`](crate::DebouncedInput::set_repeat).
    pub const fn repeat(mut self, delay_ms: u16, interval_ms: u16) -> Self {
        self.repeat = Some(RepeatConfig {
            delay_ms,
            interval_ms,
        });
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig::new(DEFAULT_DEBOUNCE_MS)
    }
}

/// A single edge or repeat event reported by
/// [`DebouncedInput::event`](crate::DebouncedInput::event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button was pressed.
    Pressed,

    /// The button was released after accruing `repeats` repeat ticks.
    Released {
        /// Repeat count latched at the release.
        repeats: u16,
    },

    /// The held button produced its n-th repeat tick.
    Repeat(u16),
}

impl core::fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonEvent::Pressed => write!(f, "pressed"),
            ButtonEvent::Released { repeats } => {
                write!(f, "released after {} repeats", repeats)
            }
            ButtonEvent::Repeat(count) => write!(f, "repeat #{}", count),
        }
    }
}
