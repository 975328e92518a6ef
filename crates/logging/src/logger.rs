//! crates/logging/src/logger.rs
//! Thread-safe, fail-silent front over a [`LogSink`].

use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use is_terminal::IsTerminal;

use crate::clock::{Clock, MonotonicClock};
use crate::config::LogConfig;
use crate::guard::LineGuard;
use crate::levels::{Level, LevelFilter};
use crate::line_mode::{LineMode, LinePosition};
use crate::sink::LogSink;

/// Shared logger serializing every emission through one mutex.
///
/// Each call holds the lock for the whole record, so records written from
/// different threads never interleave. The threshold is mirrored in an atomic
/// and checked before locking; filtered calls never contend.
///
/// Write failures are swallowed: logging must not perturb the caller. Use
/// [`LogSink`] directly when errors matter.
///
/// # Examples
///
/// ```
/// use logging::{Level, LogConfig, Logger, ManualClock};
///
/// let logger = Logger::new(Vec::new(), ManualClock::new(7), LogConfig::default());
/// logger.begin(Level::Info, format_args!("DevEui : "));
/// logger.hex_dump(Level::Info, &[0x01, 0x02]);
///
/// let out = logger.into_sink().into_inner();
/// assert_eq!(out, b"00000007 : DevEui : 01 02 \n".to_vec());
/// ```
pub struct Logger<W, C = MonotonicClock> {
    threshold: AtomicU8,
    sink: Mutex<LogSink<W, C>>,
}

impl<W, C> Logger<W, C> {
    /// Creates a logger writing to `writer`.
    #[must_use]
    pub fn new(writer: W, clock: C, config: LogConfig) -> Self {
        Self::from_sink(LogSink::new(writer, clock, config))
    }

    /// Wraps an existing sink.
    #[must_use]
    pub fn from_sink(sink: LogSink<W, C>) -> Self {
        Self {
            threshold: AtomicU8::new(sink.threshold().as_u8()),
            sink: Mutex::new(sink),
        }
    }

    /// Reports whether a record at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.threshold().permits(level)
    }

    /// Returns the active threshold.
    #[must_use]
    pub fn threshold(&self) -> LevelFilter {
        LevelFilter::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Replaces the active threshold.
    pub fn set_threshold(&self, threshold: LevelFilter) {
        let mut sink = self.lock();
        sink.set_threshold(threshold);
        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
    }

    /// Runs `f` with exclusive access to the sink.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut LogSink<W, C>) -> R) -> R {
        let mut sink = self.lock();
        let result = f(&mut sink);
        let threshold = sink.threshold();
        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
        result
    }

    /// Consumes the logger and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> LogSink<W, C> {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the sink, recovering from a poisoned lock.
    pub(crate) fn lock(&self) -> MutexGuard<'_, LogSink<W, C>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W, C> Logger<W, C>
where
    W: Write,
    C: Clock,
{
    /// Writes one record.
    ///
    /// `position` decides whether the timestamp prefix is rendered and
    /// `line_mode` whether the line is terminated.
    pub fn emit(
        &self,
        level: Level,
        position: LinePosition,
        args: fmt::Arguments<'_>,
        line_mode: LineMode,
    ) {
        if !self.enabled(level) {
            return;
        }
        let _ = self.lock().emit(level, position, args, line_mode);
    }

    /// Writes a complete line: prefix, payload, newline.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, LinePosition::Start, args, LineMode::WithNewline);
    }

    /// Opens a line: prefix and payload, no newline.
    pub fn begin(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, LinePosition::Start, args, LineMode::WithoutNewline);
    }

    /// Continues a line: payload only.
    pub fn log_raw(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(
            level,
            LinePosition::Continuation,
            args,
            LineMode::WithoutNewline,
        );
    }

    /// Writes `data` as hex followed by a newline.
    pub fn hex_dump(&self, level: Level, data: &[u8]) {
        if !self.enabled(level) {
            return;
        }
        let _ = self.lock().write_hex_dump(level, data);
    }

    /// Writes `start`, the hex rendering of `data`, then `end`.
    pub fn hex_dump_bracketed(&self, level: Level, data: &[u8], start: &str, end: &str) {
        if !self.enabled(level) {
            return;
        }
        let _ = self.lock().write_hex_dump_bracketed(level, data, start, end);
    }

    /// Opens a logical line that keeps the lock until it is finished.
    ///
    /// See [`LineGuard`].
    pub fn line(&self, level: Level) -> LineGuard<'_, W, C> {
        LineGuard::open(self, level)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) {
        let _ = self.lock().flush();
    }
}

impl Logger<Stdout, MonotonicClock> {
    /// Creates a logger on standard output.
    ///
    /// [`ColorMode::Auto`](crate::ColorMode::Auto) is resolved against
    /// whether stdout is a terminal.
    #[must_use]
    pub fn stdout(config: LogConfig) -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::from_sink(LogSink::for_stream(
            stdout,
            MonotonicClock::new(),
            config,
            is_terminal,
        ))
    }
}

impl<W, C> fmt::Debug for Logger<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}
