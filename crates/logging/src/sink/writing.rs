use super::LogSink;
use crate::clock::{Clock, TimestampPrefix};
use crate::color::Decoration;
use crate::hexdump::write_hex_dump;
use crate::levels::Level;
use crate::line_mode::{LineMode, LinePosition};
use std::fmt;
use std::io::{self, Write};

impl<W, C> LogSink<W, C>
where
    W: Write,
    C: Clock,
{
    /// Writes the prefix that opens a logical line.
    ///
    /// Nothing is written when `level` is filtered out or timestamps are
    /// disabled.
    pub fn write_prefix(&mut self, level: Level) -> io::Result<()> {
        if !self.enabled(level) || !self.timestamps {
            return Ok(());
        }
        write!(self.writer, "{}", TimestampPrefix(self.clock.now_millis()))
    }

    /// Writes `args` wrapped in the decoration for `level`.
    ///
    /// With [`LineMode::WithNewline`] the newline follows the color reset.
    pub fn write_payload(
        &mut self,
        level: Level,
        args: fmt::Arguments<'_>,
        line_mode: LineMode,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let decoration = Decoration::for_level(level, self.color);
        self.writer.write_all(decoration.start.as_bytes())?;
        self.writer.write_fmt(args)?;
        self.writer.write_all(decoration.end.as_bytes())?;
        if line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes a record: the prefix when `position` starts a line, then the
    /// payload.
    ///
    /// A filtered `level` writes nothing at all.
    pub fn emit(
        &mut self,
        level: Level,
        position: LinePosition,
        args: fmt::Arguments<'_>,
        line_mode: LineMode,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        if position.is_start() {
            self.write_prefix(level)?;
        }
        self.write_payload(level, args, line_mode)
    }

    /// Writes `data` as `"xx "` per byte followed by a newline.
    ///
    /// Warnings and errors are bracketed by their color escapes when color is
    /// enabled; the newline comes after the reset.
    pub fn write_hex_dump(&mut self, level: Level, data: &[u8]) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let decoration = Decoration::for_level(level, self.color);
        self.writer.write_all(decoration.start.as_bytes())?;
        write_hex_dump(&mut self.writer, data)?;
        self.writer.write_all(decoration.end.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Writes `start`, the hex rendering of `data`, then `end`.
    ///
    /// `end` carries its own terminator if the caller wants one.
    pub fn write_hex_dump_bracketed(
        &mut self,
        level: Level,
        data: &[u8],
        start: &str,
        end: &str,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.writer.write_all(start.as_bytes())?;
        write_hex_dump(&mut self.writer, data)?;
        self.writer.write_all(end.as_bytes())
    }

    /// Terminates an open line.
    pub fn end_line(&mut self, level: Level) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.writer.write_all(b"\n")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::color::{COLOR_COMPILED, ColorMode};
    use crate::config::LogConfig;
    use crate::levels::LevelFilter;

    fn make_sink(threshold: LevelFilter) -> LogSink<Vec<u8>, ManualClock> {
        let config = LogConfig::with_threshold(threshold).color(ColorMode::Never);
        LogSink::new(Vec::new(), ManualClock::new(1234), config)
    }

    fn output(sink: LogSink<Vec<u8>, ManualClock>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8")
    }

    #[test]
    fn emit_writes_prefix_payload_and_newline() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.emit(
            Level::Info,
            LinePosition::Start,
            format_args!("x={}", 5),
            LineMode::WithNewline,
        )
        .unwrap();
        assert_eq!(output(sink), "00001234 : x=5\n");
    }

    #[test]
    fn continuation_skips_prefix() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.emit(
            Level::Info,
            LinePosition::Start,
            format_args!("a"),
            LineMode::WithoutNewline,
        )
        .unwrap();
        sink.emit(
            Level::Info,
            LinePosition::Continuation,
            format_args!("b"),
            LineMode::WithNewline,
        )
        .unwrap();
        assert_eq!(output(sink), "00001234 : ab\n");
    }

    #[test]
    fn timestamps_can_be_disabled() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.set_timestamps(false);
        sink.emit(
            Level::Warn,
            LinePosition::Start,
            format_args!("x={}", 5),
            LineMode::WithNewline,
        )
        .unwrap();
        assert_eq!(output(sink), "x=5\n");
    }

    #[test]
    fn filtered_levels_write_nothing() {
        let mut sink = make_sink(LevelFilter::Warn);
        sink.emit(
            Level::Info,
            LinePosition::Start,
            format_args!("hidden"),
            LineMode::WithNewline,
        )
        .unwrap();
        sink.write_prefix(Level::Debug).unwrap();
        sink.write_hex_dump(Level::Verbose, &[1, 2, 3]).unwrap();
        sink.write_hex_dump_bracketed(Level::Info, &[1], "<", ">").unwrap();
        sink.end_line(Level::Info).unwrap();
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn hex_dump_renders_lowercase_pairs() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.write_hex_dump(Level::Info, &[0x00, 0xFF, 0x1A]).unwrap();
        assert_eq!(output(sink), "00 ff 1a \n");
    }

    #[test]
    fn empty_hex_dump_writes_only_terminator() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.write_hex_dump(Level::Info, &[]).unwrap();
        assert_eq!(output(sink), "\n");
    }

    #[test]
    fn bracketed_hex_dump_uses_caller_strings() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.write_hex_dump_bracketed(Level::Info, &[0xde, 0xad], "[", "]\n")
            .unwrap();
        assert_eq!(output(sink), "[de ad ]\n");
    }

    #[test]
    fn color_wraps_payload_before_newline() {
        let config = LogConfig::with_threshold(LevelFilter::Verbose)
            .color(ColorMode::Always)
            .timestamps(false);
        let mut sink = LogSink::new(Vec::new(), ManualClock::new(0), config);
        sink.emit(
            Level::Error,
            LinePosition::Start,
            format_args!("boom"),
            LineMode::WithNewline,
        )
        .unwrap();
        sink.emit(
            Level::Info,
            LinePosition::Start,
            format_args!("calm"),
            LineMode::WithNewline,
        )
        .unwrap();
        let text = output(sink);
        if COLOR_COMPILED {
            assert_eq!(text, "\x1b[1;31mboom\x1b[m\ncalm\n");
        } else {
            assert_eq!(text, "boom\ncalm\n");
        }
    }

    #[test]
    fn colored_warning_hex_dump_resets_before_newline() {
        let config = LogConfig::with_threshold(LevelFilter::Verbose)
            .color(ColorMode::Always)
            .timestamps(false);
        let mut sink = LogSink::new(Vec::new(), ManualClock::new(0), config);
        sink.write_hex_dump(Level::Warn, &[0x01]).unwrap();
        let text = output(sink);
        if COLOR_COMPILED {
            assert_eq!(text, "\x1b[1;33m01 \x1b[m\n");
        } else {
            assert_eq!(text, "01 \n");
        }
    }

    #[test]
    fn auto_color_off_for_non_terminal_and_on_for_terminal() {
        let config = LogConfig::default();
        let sink = LogSink::new(Vec::<u8>::new(), ManualClock::new(0), config);
        assert!(!sink.color_enabled());
        let sink = LogSink::for_stream(Vec::<u8>::new(), ManualClock::new(0), config, true);
        assert_eq!(sink.color_enabled(), COLOR_COMPILED);
    }

    #[test]
    fn prefix_tracks_clock() {
        let mut sink = make_sink(LevelFilter::Info);
        sink.write_prefix(Level::Info).unwrap();
        sink.clock().advance(1);
        sink.write_prefix(Level::Info).unwrap();
        assert_eq!(output(sink), "00001234 : 00001235 : ");
    }

    #[test]
    fn threshold_can_change() {
        let mut sink = make_sink(LevelFilter::None);
        assert!(!sink.enabled(Level::Error));
        sink.set_threshold(LevelFilter::Error);
        assert!(sink.enabled(Level::Error));
        assert_eq!(sink.threshold(), LevelFilter::Error);
    }

    #[test]
    fn flush_succeeds() {
        let mut sink = make_sink(LevelFilter::Info);
        assert!(sink.flush().is_ok());
    }
}
