#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small leveled console for embedded-style demo programs. A
//! record carries a [`Level`]; it is written only when that level passes the
//! active [`LevelFilter`]. Written lines may start with a millisecond
//! timestamp taken from a [`Clock`], warnings and errors may be wrapped in
//! ANSI color, and byte buffers can be dumped as lowercase hex.
//!
//! # Design
//!
//! - [`LogSink`] owns an [`io::Write`](std::io::Write) target and renders
//!   records through two primitives: [`LogSink::write_prefix`] opens a logical
//!   line and [`LogSink::write_payload`] writes decorated text. Its methods
//!   return [`std::io::Result`] so they compose and test in isolation.
//! - [`Logger`] wraps a sink in a mutex, mirrors the threshold in an atomic
//!   for a lock-free fast path, and swallows write errors. [`Logger::line`]
//!   returns a [`LineGuard`] that keeps the lock for one line assembled from
//!   several pieces.
//! - [`init`] and [`global`] manage a process-wide [`DynLogger`] that the
//!   [`log!`] family of macros writes to by default.
//! - [`LogConfig`] gathers threshold, [`ColorMode`], and timestamp switch, and
//!   can be layered from directives and the [`LOG_ENV`] / [`NO_COLOR_ENV`]
//!   environment variables.
//!
//! # Invariants
//!
//! - A record is written iff `level <= threshold`; [`LevelFilter::None`]
//!   suppresses everything. Filtered macro call sites do not evaluate their
//!   arguments, and call sites above [`STATIC_MAX_LEVEL`] compile away.
//! - The timestamp prefix is `%08u : ` and appears only at the start of a
//!   logical line.
//! - Color escapes wrap only WARN and ERROR payloads; a newline is written
//!   after the reset escape.
//! - A hex dump renders exactly three bytes per input byte.
//! - Lines written concurrently through one [`Logger`] never interleave.
//!
//! # Errors
//!
//! Emitting never fails from the caller's point of view. Parsing levels,
//! color modes, and configuration directives reports [`ParseLevelError`],
//! [`ParseColorModeError`], or [`ConfigError`]; installing a second global
//! logger reports [`SetLoggerError`].
//!
//! # Examples
//!
//! ```
//! use logging::{Level, LevelFilter, LogConfig, Logger, ManualClock};
//!
//! let clock = ManualClock::new(1500);
//! let logger = Logger::new(Vec::new(), &clock, LogConfig::with_threshold(LevelFilter::Warn));
//!
//! logger.log(Level::Info, format_args!("suppressed"));
//! logger.log(Level::Warn, format_args!("x={}", 5));
//! clock.advance(20);
//! logger.line(Level::Error).text(format_args!("payload : ")).hex_dump(&[0xde, 0xad]);
//!
//! let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
//! assert_eq!(output, "00001500 : x=5\n00001520 : payload : de ad \n");
//! ```
//!
//! # See also
//!
//! - The `tracing_bridge` module (feature `tracing`) routes `tracing` events
//!   through a [`Logger`].

mod clock;
mod color;
mod config;
mod error;
mod global;
mod guard;
mod hexdump;
mod levels;
mod line_mode;
mod logger;
mod macros;
mod sink;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use clock::{Clock, ManualClock, MonotonicClock, TimestampPrefix};
pub use color::{COLOR_COMPILED, ColorMode, Decoration, ansi};
pub use config::{LOG_ENV, LogConfig, NO_COLOR_ENV};
pub use error::{ConfigError, ParseColorModeError, ParseLevelError, SetLoggerError};
pub use global::{DynLogger, global, init, init_with, try_global};
pub use guard::LineGuard;
pub use hexdump::{HexDump, write_hex_dump};
pub use levels::{Level, LevelFilter, STATIC_MAX_LEVEL};
pub use line_mode::{LineMode, LinePosition};
pub use logger::Logger;
pub use sink::LogSink;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing};
