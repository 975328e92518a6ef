//! crates/logging/src/guard.rs
//! RAII handle for a logical line assembled from several pieces.

use std::fmt;
use std::io::Write;
use std::sync::MutexGuard;

use crate::clock::Clock;
use crate::levels::Level;
use crate::line_mode::LineMode;
use crate::logger::Logger;
use crate::sink::LogSink;

/// Keeps a [`Logger`] locked while one line is written piecewise.
///
/// Opening the guard writes the timestamp prefix. Pieces appended with
/// [`text`](Self::text) follow without a prefix; [`hex_dump`](Self::hex_dump)
/// and [`finish`](Self::finish) terminate the line. A guard dropped without
/// being terminated writes the newline itself, so a line is never left open
/// for another thread to continue.
///
/// When the level is filtered out the guard holds no lock and every method is
/// a no-op.
///
/// # Examples
///
/// ```
/// use logging::{Level, LogConfig, Logger, ManualClock};
///
/// let logger = Logger::new(Vec::new(), ManualClock::new(3), LogConfig::default());
/// logger
///     .line(Level::Info)
///     .text(format_args!("AppKey : "))
///     .hex_dump(&[0xab, 0xcd]);
///
/// assert_eq!(logger.into_sink().into_inner(), b"00000003 : AppKey : ab cd \n".to_vec());
/// ```
#[must_use = "dropping the guard immediately terminates the line"]
pub struct LineGuard<'a, W: Write, C: Clock> {
    level: Level,
    sink: Option<MutexGuard<'a, LogSink<W, C>>>,
    terminated: bool,
}

impl<'a, W: Write, C: Clock> LineGuard<'a, W, C> {
    pub(crate) fn open(logger: &'a Logger<W, C>, level: Level) -> Self {
        let sink = logger.enabled(level).then(|| logger.lock());
        let mut guard = Self {
            level,
            sink,
            terminated: false,
        };
        if let Some(sink) = guard.sink.as_mut() {
            let _ = sink.write_prefix(level);
        }
        guard
    }

    /// Reports whether the guard holds the lock, i.e. the level is enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sink.is_some()
    }

    /// Returns the level of the line.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Appends formatted text to the line.
    pub fn text(mut self, args: fmt::Arguments<'_>) -> Self {
        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.write_payload(self.level, args, LineMode::WithoutNewline);
        }
        self
    }

    /// Appends `data` as hex and terminates the line.
    pub fn hex_dump(mut self, data: &[u8]) {
        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.write_hex_dump(self.level, data);
        }
        self.terminated = true;
    }

    /// Terminates the line.
    pub fn finish(self) {
        drop(self);
    }
}

impl<W: Write, C: Clock> Drop for LineGuard<'_, W, C> {
    fn drop(&mut self) {
        if self.terminated {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.end_line(self.level);
        }
    }
}

impl<W: Write, C: Clock> fmt::Debug for LineGuard<'_, W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineGuard")
            .field("level", &self.level)
            .field("active", &self.is_active())
            .field("terminated", &self.terminated)
            .finish()
    }
}
