//! crates/logging/src/clock.rs
//! Millisecond clocks feeding the line prefix.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of monotonic milliseconds for the line prefix.
///
/// The epoch is arbitrary (device boot, process start). The sink only ever
/// renders the value; it never does arithmetic on it.
pub trait Clock {
    /// Milliseconds elapsed since the clock's epoch.
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Clock counting from the moment it was constructed.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Starts a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to.
///
/// Useful for deterministic output in tests and scripted replays. The value is
/// atomic so a shared handle can be advanced while a logger holds it.
///
/// ```
/// use std::sync::Arc;
/// use logging::{Clock, ManualClock};
///
/// let clock = Arc::new(ManualClock::new(1_000));
/// let handle = Arc::clone(&clock);
/// handle.advance(250);
/// assert_eq!(clock.now_millis(), 1_250);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Creates a clock reading `millis`.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Sets the current reading.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }

    /// Moves the reading forward, saturating at `u64::MAX`.
    pub fn advance(&self, millis: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(millis))
            });
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }
}

/// Rendered line prefix: the clock reading zero-padded to eight digits and
/// followed by `" : "`.
///
/// Readings wider than eight digits are printed in full.
///
/// ```
/// use logging::TimestampPrefix;
///
/// assert_eq!(TimestampPrefix(42).to_string(), "00000042 : ");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimestampPrefix(pub u64);

impl TimestampPrefix {
    /// Digits the reading is padded to.
    pub const WIDTH: usize = 8;
    /// Separator between the reading and the payload.
    pub const SEPARATOR: &'static str = " : ";
}

impl fmt::Display for TimestampPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}{}", self.0, Self::SEPARATOR, width = Self::WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_zero_padded() {
        assert_eq!(TimestampPrefix(0).to_string(), "00000000 : ");
        assert_eq!(TimestampPrefix(1234).to_string(), "00001234 : ");
        assert_eq!(TimestampPrefix(99_999_999).to_string(), "99999999 : ");
    }

    #[test]
    fn prefix_wider_than_width_is_not_truncated() {
        assert_eq!(TimestampPrefix(123_456_789).to_string(), "123456789 : ");
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new(10);
        assert_eq!(clock.now_millis(), 10);
        clock.advance(5);
        assert_eq!(clock.now_millis(), 15);
        clock.set(3);
        assert_eq!(clock.now_millis(), 3);
        clock.set(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now_millis(), u64::MAX);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }

    #[test]
    fn shared_handles_delegate() {
        let clock = Arc::new(ManualClock::new(7));
        assert_eq!(Clock::now_millis(&clock), 7);
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now_millis(&by_ref), 7);
        let boxed: Box<dyn Clock> = Box::new(ManualClock::new(9));
        assert_eq!(boxed.now_millis(), 9);
    }
}
