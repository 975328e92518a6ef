//! crates/logging/src/global.rs
//! Process-wide console logger used by the logging macros.

use std::io::{self, Write};
use std::sync::OnceLock;

use is_terminal::IsTerminal;

use crate::clock::{Clock, MonotonicClock};
use crate::config::LogConfig;
use crate::error::SetLoggerError;
use crate::logger::Logger;
use crate::sink::LogSink;

/// Logger with a type-erased writer and clock, as stored globally.
pub type DynLogger = Logger<Box<dyn Write + Send>, Box<dyn Clock + Send + Sync>>;

static GLOBAL: OnceLock<DynLogger> = OnceLock::new();

/// Installs a stdout logger configured by `config`.
///
/// # Errors
///
/// Returns [`SetLoggerError`] when a logger was already installed, either
/// explicitly or lazily by a prior call to [`global`].
pub fn init(config: LogConfig) -> Result<(), SetLoggerError> {
    install(stdout_logger(config))
}

/// Installs a logger writing to `writer` with timestamps from `clock`.
///
/// [`ColorMode::Auto`](crate::ColorMode::Auto) resolves to no color because
/// the writer is not known to be a terminal.
///
/// # Errors
///
/// Returns [`SetLoggerError`] when a logger was already installed.
pub fn init_with<W, C>(writer: W, clock: C, config: LogConfig) -> Result<(), SetLoggerError>
where
    W: Write + Send + 'static,
    C: Clock + Send + Sync + 'static,
{
    install(Logger::new(Box::new(writer), Box::new(clock), config))
}

/// Returns the process-wide logger, installing a default one on first use.
///
/// The default writes to stdout and honours [`LOG_ENV`](crate::LOG_ENV) and
/// [`NO_COLOR_ENV`](crate::NO_COLOR_ENV); malformed variables fall back to
/// the built-in defaults.
pub fn global() -> &'static DynLogger {
    GLOBAL.get_or_init(|| stdout_logger(LogConfig::from_env().unwrap_or_default()))
}

/// Returns the process-wide logger if one was installed.
#[must_use]
pub fn try_global() -> Option<&'static DynLogger> {
    GLOBAL.get()
}

fn install(logger: DynLogger) -> Result<(), SetLoggerError> {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        logger
    });
    if installed {
        Ok(())
    } else {
        Err(SetLoggerError::new())
    }
}

fn stdout_logger(config: LogConfig) -> DynLogger {
    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    Logger::from_sink(LogSink::for_stream(
        Box::new(stdout),
        Box::new(MonotonicClock::new()),
        config,
        is_terminal,
    ))
}
