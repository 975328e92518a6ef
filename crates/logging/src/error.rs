//! crates/logging/src/error.rs
//! Error types raised while parsing configuration or installing the global logger.
//!
//! Emission itself never fails from the caller's point of view; these errors
//! only surface while a program is configuring its console.

use thiserror::Error;

/// Error returned when a verbosity level name cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level '{input}' (expected none, error, warn, info, debug, or verbose)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error returned when a color mode name cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised color mode '{input}' (expected auto, always, or never)")]
pub struct ParseColorModeError {
    input: String,
}

impl ParseColorModeError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors produced while applying configuration directives.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The directive key is not recognised.
    #[error("unknown log directive '{0}'")]
    UnknownDirective(String),
    /// The directive was empty.
    #[error("empty log directive")]
    EmptyDirective,
    /// The `level` value was invalid.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
    /// The `color` value was invalid.
    #[error(transparent)]
    Color(#[from] ParseColorModeError),
    /// A boolean switch carried something other than on/off.
    #[error("invalid value '{value}' for '{key}' (expected on or off)")]
    InvalidSwitch {
        /// Directive key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// Error returned when the process-wide logger was already installed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("the global console logger is already installed")]
pub struct SetLoggerError {
    _private: (),
}

impl SetLoggerError {
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}
