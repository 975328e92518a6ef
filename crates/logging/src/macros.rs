//! crates/logging/src/macros.rs
//! Leveled logging macros.
//!
//! Every macro accepts an optional leading `logger: <expr>,` naming the
//! [`Logger`](crate::Logger) to write to; without it the process-wide logger
//! from [`global`](crate::global) is used. Format arguments are only evaluated
//! when the level passes both [`STATIC_MAX_LEVEL`](crate::STATIC_MAX_LEVEL)
//! and the logger's runtime threshold.

/// Writes one complete line at the given [`Level`](crate::Level).
///
/// # Examples
///
/// ```
/// use logging::{log, Level, LogConfig, Logger, ManualClock};
///
/// let logger = Logger::new(Vec::new(), ManualClock::new(0), LogConfig::default().timestamps(false));
/// log!(logger: logger, Level::Info, "x={}", 5);
/// let expensive = || -> u32 { panic!("filtered arguments are not evaluated") };
/// log!(logger: logger, Level::Debug, "hidden {}", expensive());
///
/// assert_eq!(logger.into_sink().into_inner(), b"x=5\n".to_vec());
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        let logger = &$logger;
        if $crate::STATIC_MAX_LEVEL.permits(level) && logger.enabled(level) {
            logger.log(level, ::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $level, $($arg)+)
    };
}

/// Writes one line at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Writes one line at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Writes one line at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Writes one line at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Writes one line at [`Level::Verbose`](crate::Level::Verbose).
#[macro_export]
macro_rules! verbose_log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Verbose, $($arg)+)
    };
}

/// Opens a line: timestamp prefix and payload, no newline.
#[macro_export]
macro_rules! log_begin {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        let logger = &$logger;
        if $crate::STATIC_MAX_LEVEL.permits(level) && logger.enabled(level) {
            logger.begin(level, ::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log_begin!(logger: $crate::global(), $level, $($arg)+)
    };
}

/// Continues a line: payload only, no prefix and no newline.
#[macro_export]
macro_rules! log_raw {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        let logger = &$logger;
        if $crate::STATIC_MAX_LEVEL.permits(level) && logger.enabled(level) {
            logger.log_raw(level, ::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log_raw!(logger: $crate::global(), $level, $($arg)+)
    };
}

/// Writes a byte buffer as hex.
///
/// With two arguments the dump is followed by a newline; with four the
/// caller supplies the start and end strings.
///
/// ```
/// use logging::{log_hexdump, Level, LogConfig, Logger, ManualClock};
///
/// let logger = Logger::new(Vec::new(), ManualClock::new(0), LogConfig::default());
/// log_hexdump!(logger: logger, Level::Info, &[0xca, 0xfe]);
/// log_hexdump!(logger: logger, Level::Info, &[0x01], "[", "]\n");
///
/// assert_eq!(logger.into_sink().into_inner(), b"ca fe \n[01 ]\n".to_vec());
/// ```
#[macro_export]
macro_rules! log_hexdump {
    (logger: $logger:expr, $level:expr, $data:expr $(,)?) => {{
        let level: $crate::Level = $level;
        let logger = &$logger;
        if $crate::STATIC_MAX_LEVEL.permits(level) && logger.enabled(level) {
            logger.hex_dump(level, $data);
        }
    }};
    (logger: $logger:expr, $level:expr, $data:expr, $start:expr, $end:expr $(,)?) => {{
        let level: $crate::Level = $level;
        let logger = &$logger;
        if $crate::STATIC_MAX_LEVEL.permits(level) && logger.enabled(level) {
            logger.hex_dump_bracketed(level, $data, $start, $end);
        }
    }};
    ($level:expr, $data:expr $(,)?) => {
        $crate::log_hexdump!(logger: $crate::global(), $level, $data)
    };
    ($level:expr, $data:expr, $start:expr, $end:expr $(,)?) => {
        $crate::log_hexdump!(logger: $crate::global(), $level, $data, $start, $end)
    };
}
