//! Debounced digital input with edge detection and auto-repeat.
//!
//! Provides [`DebouncedInput`], a poll-driven state machine that turns a
//! bouncing pin reading into a stable [`ButtonState`] plus one-shot edge
//! events and repeat ticks while the button is held.

use crate::pin::ButtonPin;
use crate::time::{Millis, TimeSource};
use crate::types::{ActiveLevel, ButtonConfig, ButtonEvent, ButtonState, RepeatConfig};

/// A single debounced button.
///
/// The input tracks two levels: the instantaneous `raw_state` read on every
/// poll, and the committed `stable_state` that is reported to callers. Every
/// change of the raw level restarts a quiet window of `debounce_ms`; the
/// stable state only follows the raw level once that window has passed
/// without further changes.
///
/// Nothing happens between polls. Call [`poll`](Self::poll) (or one of the
/// edge helpers, which poll internally) on every iteration of your main loop,
/// well within the debounce window, or transitions may be merged or missed.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
pub struct DebouncedInput<'t, P: ButtonPin, T: TimeSource> {
    pin: P,
    time_source: &'t T,
    debounce_ms: u16,
    active_level: ActiveLevel,
    raw_state: ButtonState,
    stable_state: ButtonState,
    ignore_until: Millis,
    press_started: Millis,
    changed: bool,
    reported_repeats: u16,
    event_repeats: u16,
    repeat: Option<RepeatConfig>,
}

impl<'t, P: ButtonPin, T: TimeSource> DebouncedInput<'t, P, T> {
    /// Creates an active-low input with the given debounce window.
    ///
    /// Construction has no side effects on the hardware; call
    /// [`begin`](Self::begin) to configure the pin.
    pub fn new(pin: P, time_source: &'t T, debounce_ms: u16) -> Self {
        Self::with_config(pin, time_source, ButtonConfig::new(debounce_ms))
    }

    /// Creates an input from a full [`ButtonConfig`].
    pub fn with_config(pin: P, time_source: &'t T, config: ButtonConfig) -> Self {
        let mut input = Self {
            pin,
            time_source,
            debounce_ms: config.debounce_ms,
            active_level: config.active_level,
            raw_state: ButtonState::Released,
            stable_state: ButtonState::Released,
            ignore_until: Millis(0),
            press_started: Millis(0),
            changed: false,
            reported_repeats: 0,
            event_repeats: 0,
            repeat: None,
        };

        if let Some(requested) = config.repeat {
            input.set_repeat(requested.delay_ms, requested.interval_ms);
        }

        input
    }

    /// Configures the pin as an input with the pull resistor matching the
    /// active level.
    pub fn begin(&mut self) {
        self.pin.configure(self.active_level.pull());
    }

    /// Samples the pin and advances the state machine.
    ///
    /// Returns the debounced state after this poll.
    pub fn poll(&mut self) -> ButtonState {
        let (level, now) = self.sample();
        self.update(level, now)
    }

    fn sample(&mut self) -> (ButtonState, Millis) {
        let level = self.active_level.state_for(self.pin.is_high());
        (level, self.time_source.now())
    }

    fn update(&mut self, level: ButtonState, now: Millis) -> ButtonState {
        if level != self.raw_state {
            self.raw_state = level;
            self.ignore_until = now.wrapping_add(u32::from(self.debounce_ms));
            #[cfg(feature = "defmt")]
            defmt::trace!("raw {} at {}ms, quiet until {}ms", level, now.0, self.ignore_until.0);
        } else if self.raw_state != self.stable_state && now.has_reached(self.ignore_until) {
            self.commit(now);
        }

        self.stable_state
    }

    fn commit(&mut self, now: Millis) {
        let previous = self.stable_state;
        self.stable_state = self.raw_state;

        match self.stable_state {
            ButtonState::Released => {
                self.reported_repeats = self.repeats_since_press(now);
            }
            ButtonState::Pressed => {
                self.reported_repeats = 0;
                self.event_repeats = 0;
            }
        }

        self.ignore_until = now.wrapping_add(u32::from(self.debounce_ms));
        if self.stable_state.is_pressed() {
            self.press_started = self.ignore_until;
        }
        self.changed = previous != self.stable_state;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "stable {} at {}ms, repeats {}",
            self.stable_state,
            now.0,
            self.reported_repeats
        );
    }

    /// Repeat ticks accrued by the current press.
    ///
    /// While pressed this is the live count; once released it is the count
    /// latched at the moment of release. Does not poll.
    pub fn repeat_count(&self) -> u16 {
        match self.stable_state {
            ButtonState::Pressed => self.repeats_since_press(self.time_source.now()),
            ButtonState::Released => self.reported_repeats,
        }
    }

    /// Polls and returns `true` if the stable state just changed.
    ///
    /// Consumes the change latch.
    pub fn toggled(&mut self) -> bool {
        self.poll();
        self.has_changed()
    }

    /// Returns and clears the change latch. Does not poll.
    ///
    /// After each stable transition exactly one call returns `true`.
    pub fn has_changed(&mut self) -> bool {
        core::mem::take(&mut self.changed)
    }

    /// Polls and returns `true` on a fresh press edge.
    ///
    /// The change latch is only consumed when the button is pressed.
    pub fn pressed(&mut self) -> bool {
        self.poll() == ButtonState::Pressed && self.has_changed()
    }

    /// Polls and returns `true` on a press edge or a new repeat tick.
    ///
    /// Despite the name this fires while the button is *held*: once for the
    /// press itself (consuming the change latch) and once more every time the
    /// repeat count increases. It always returns `false` while released.
    /// Use [`event`](Self::event) to observe actual releases.
    pub fn released(&mut self) -> bool {
        let (level, now) = self.sample();

        if self.update(level, now) == ButtonState::Pressed {
            let previous = self.reported_repeats;
            self.reported_repeats = self.repeats_since_press(now);
            self.has_changed() || previous != self.reported_repeats
        } else {
            false
        }
    }

    /// Polls and returns the next edge or repeat event, if any.
    ///
    /// Consumes the change latch. Repeat ticks are tracked separately from
    /// [`released`](Self::released), so the two can be mixed freely.
    pub fn event(&mut self) -> Option<ButtonEvent> {
        let (level, now) = self.sample();
        let state = self.update(level, now);

        if self.has_changed() {
            return Some(match state {
                ButtonState::Pressed => ButtonEvent::Pressed,
                ButtonState::Released => ButtonEvent::Released {
                    repeats: self.reported_repeats,
                },
            });
        }

        if state.is_pressed() {
            let repeats = self.repeats_since_press(now);
            if repeats != self.event_repeats {
                self.event_repeats = repeats;
                return Some(ButtonEvent::Repeat(repeats));
            }
        }

        None
    }

    /// Enables auto-repeat.
    ///
    /// The first tick fires `delay_ms` after the button went down, then one
    /// tick every `interval_ms`. The debounce window counts toward the initial
    /// delay. An `interval_ms` of zero fires a single tick per press.
    pub fn set_repeat(&mut self, delay_ms: u16, interval_ms: u16) {
        let repeat = RepeatConfig::from_requested(delay_ms, interval_ms, self.debounce_ms);
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "repeat after {}ms every {}ms",
            repeat.delay_ms,
            repeat.interval_ms
        );
        self.repeat = Some(repeat);
    }

    /// Disables auto-repeat.
    pub fn clear_repeat(&mut self) {
        self.repeat = None;
    }

    fn repeats_since_press(&self, now: Millis) -> u16 {
        let Some(repeat) = self.repeat else {
            return 0;
        };

        let first_tick = self.press_started.wrapping_add(u32::from(repeat.delay_ms));
        if !now.has_reached(first_tick) {
            return 0;
        }

        if repeat.is_single_shot() {
            return 1;
        }

        let ticks = now.wrapping_since(first_tick) / u32::from(repeat.interval_ms);
        u16::try_from(ticks).unwrap_or(u16::MAX).saturating_add(1)
    }

    /// Current debounced state. Does not poll.
    pub fn state(&self) -> ButtonState {
        self.stable_state
    }

    /// Returns `true` if the debounced state is pressed. Does not poll.
    pub fn is_pressed(&self) -> bool {
        self.stable_state.is_pressed()
    }

    /// Last instantaneous reading, before debouncing.
    pub fn raw_state(&self) -> ButtonState {
        self.raw_state
    }

    /// Configured debounce window in milliseconds.
    pub fn debounce_ms(&self) -> u16 {
        self.debounce_ms
    }

    /// Configured active level.
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Effective repeat timing, if auto-repeat is enabled.
    pub fn repeat(&self) -> Option<RepeatConfig> {
        self.repeat
    }

    /// Releases the pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}
