use std::fmt;

use crate::clock::MonotonicClock;
use crate::config::LogConfig;
use crate::levels::{Level, LevelFilter};

mod writing;

/// Leveled sink that renders records into an [`std::io::Write`] target.
///
/// The sink owns the writer, the [`Clock`](crate::Clock) feeding the line
/// prefix, and the resolved rendering switches (threshold, color,
/// timestamps). It performs no locking of its own; share it across threads
/// through a [`Logger`](crate::Logger).
///
/// Writes are exposed as two composable primitives:
/// [`write_prefix`](Self::write_prefix) renders the timestamp that opens a
/// logical line and [`write_payload`](Self::write_payload) renders the
/// decorated text. [`emit`](Self::emit) combines them.
///
/// # Examples
///
/// ```
/// use logging::{Level, LineMode, LinePosition, LogConfig, LogSink, ManualClock};
///
/// let mut sink = LogSink::new(Vec::new(), ManualClock::new(42), LogConfig::default());
///
/// sink.emit(Level::Info, LinePosition::Start, format_args!("x={}", 5), LineMode::WithNewline)?;
/// sink.emit(Level::Debug, LinePosition::Start, format_args!("hidden"), LineMode::WithNewline)?;
///
/// assert_eq!(sink.into_inner(), b"00000042 : x=5\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LogSink<W, C = MonotonicClock> {
    writer: W,
    clock: C,
    threshold: LevelFilter,
    color: bool,
    timestamps: bool,
}

impl<W, C> LogSink<W, C> {
    /// Creates a sink from `config`.
    ///
    /// The target is not assumed to be a terminal, so [`ColorMode::Auto`]
    /// resolves to no color; use [`for_stream`](Self::for_stream) when the
    /// caller knows better.
    ///
    /// [`ColorMode::Auto`]: crate::ColorMode::Auto
    #[must_use]
    pub fn new(writer: W, clock: C, config: LogConfig) -> Self {
        Self::for_stream(writer, clock, config, false)
    }

    /// Creates a sink, resolving the color preference for a stream that is
    /// (or is not) a terminal.
    #[must_use]
    pub fn for_stream(writer: W, clock: C, config: LogConfig, is_terminal: bool) -> Self {
        Self {
            writer,
            clock,
            threshold: config.threshold,
            color: config.color.resolve(is_terminal),
            timestamps: config.timestamps,
        }
    }

    /// Reports whether a record at `level` would be written.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        self.threshold.permits(level)
    }

    /// Returns the active threshold.
    #[must_use]
    pub const fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    /// Replaces the active threshold.
    pub fn set_threshold(&mut self, threshold: LevelFilter) {
        self.threshold = threshold;
    }

    /// Reports whether warnings and errors are wrapped in color escapes.
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Turns color decoration on or off.
    ///
    /// Has no visible effect when the crate was built without the `color`
    /// feature.
    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.color = enabled;
    }

    /// Reports whether line starts carry the timestamp prefix.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Turns the timestamp prefix on or off.
    pub fn set_timestamps(&mut self, timestamps: bool) {
        self.timestamps = timestamps;
    }

    /// Borrows the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, C> fmt::Debug for LogSink<W, C>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("writer", &self.writer)
            .field("threshold", &self.threshold)
            .field("color", &self.color)
            .field("timestamps", &self.timestamps)
            .finish_non_exhaustive()
    }
}
