//! crates/logging/src/levels.rs
//! Message severities and the verbosity threshold they are filtered against.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Severity attached to a single log record.
///
/// Lower numeric values carry higher priority: an [`Error`](Self::Error) is
/// emitted under every threshold except [`LevelFilter::None`], while a
/// [`Verbose`](Self::Verbose) record only passes the most permissive filter.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelFilter};
///
/// assert!(Level::Error < Level::Warn);
/// assert!(LevelFilter::Info.permits(Level::Warn));
/// assert!(!LevelFilter::Info.permits(Level::Debug));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Level {
    /// Failures the operator must see.
    Error = 1,
    /// Recoverable anomalies.
    Warn = 2,
    /// Regular progress reporting.
    Info = 3,
    /// Developer diagnostics.
    Debug = 4,
    /// Everything else.
    Verbose = 5,
}

impl Level {
    /// Every severity, from highest to lowest priority.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Returns the numeric value of the severity (`1..=5`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a severity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Verbose),
            _ => None,
        }
    }

    /// Returns the lowercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Returns the three-letter tag used in compact renderings.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERR",
            Self::Warn => "WRN",
            Self::Info => "INF",
            Self::Debug => "DBG",
            Self::Verbose => "VRB",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(input: String) -> Result<Self, ParseLevelError> {
        input.parse()
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.parse::<LevelFilter>()?.level() {
            Some(level) => Ok(level),
            None => Err(ParseLevelError::new(input)),
        }
    }
}

/// Verbosity threshold a [`Level`] is compared against.
///
/// The threshold admits every record whose level is numerically lower than or
/// equal to its own value. [`LevelFilter::None`] therefore suppresses all
/// output and [`LevelFilter::Verbose`] (aliased as [`LevelFilter::ALL`])
/// permits everything.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum LevelFilter {
    /// Suppress every record.
    None = 0,
    /// Errors only.
    Error = 1,
    /// Errors and warnings.
    Warn = 2,
    /// Everything up to informational records.
    #[default]
    Info = 3,
    /// Everything up to debug records.
    Debug = 4,
    /// Every record.
    Verbose = 5,
}

impl LevelFilter {
    /// Alias of [`LevelFilter::Verbose`].
    pub const ALL: Self = Self::Verbose;

    /// Every threshold, from most to least restrictive.
    pub const VARIANTS: [Self; 6] = [
        Self::None,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Reports whether a record at `level` passes this threshold.
    ///
    /// ```
    /// use logging::{Level, LevelFilter};
    ///
    /// assert!(LevelFilter::Warn.permits(Level::Warn));
    /// assert!(!LevelFilter::Warn.permits(Level::Info));
    /// assert!(!LevelFilter::None.permits(Level::Error));
    /// ```
    #[must_use]
    pub const fn permits(self, level: Level) -> bool {
        level as u8 <= self as u8
    }

    /// Returns the numeric value of the threshold (`0..=5`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a threshold.
    ///
    /// Values above `5` saturate to [`LevelFilter::Verbose`].
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            _ => Self::Verbose,
        }
    }

    /// Returns the most verbose [`Level`] admitted by the filter, if any.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        Level::from_u8(self as u8)
    }

    /// Returns the lowercase name of the threshold.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        Self::from_u8(level.as_u8())
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LevelFilter {
    type Error = ParseLevelError;

    fn try_from(input: String) -> Result<Self, ParseLevelError> {
        input.parse()
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    /// Parses a threshold name, its short tag, or its numeric value.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let filter = match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Self::None,
            "error" | "err" | "1" => Self::Error,
            "warn" | "wrn" | "warning" | "2" => Self::Warn,
            "info" | "inf" | "3" => Self::Info,
            "debug" | "dbg" | "4" => Self::Debug,
            "verbose" | "vrb" | "all" | "5" => Self::Verbose,
            _ => return Err(ParseLevelError::new(trimmed)),
        };
        Ok(filter)
    }
}

impl PartialEq<LevelFilter> for Level {
    fn eq(&self, other: &LevelFilter) -> bool {
        self.as_u8() == other.as_u8()
    }
}

impl PartialOrd<LevelFilter> for Level {
    fn partial_cmp(&self, other: &LevelFilter) -> Option<Ordering> {
        Some(self.as_u8().cmp(&other.as_u8()))
    }
}

impl PartialEq<Level> for LevelFilter {
    fn eq(&self, other: &Level) -> bool {
        self.as_u8() == other.as_u8()
    }
}

impl PartialOrd<Level> for LevelFilter {
    fn partial_cmp(&self, other: &Level) -> Option<Ordering> {
        Some(self.as_u8().cmp(&other.as_u8()))
    }
}

/// Compile-time verbosity ceiling selected through the `max-level-*` features.
///
/// The leveled macros compare against this constant before consulting the
/// runtime threshold, so call sites above the ceiling are removed by the
/// optimiser.
pub const STATIC_MAX_LEVEL: LevelFilter = if cfg!(feature = "max-level-none") {
    LevelFilter::None
} else if cfg!(feature = "max-level-error") {
    LevelFilter::Error
} else if cfg!(feature = "max-level-warn") {
    LevelFilter::Warn
} else if cfg!(feature = "max-level-info") {
    LevelFilter::Info
} else if cfg!(feature = "max-level-debug") {
    LevelFilter::Debug
} else {
    LevelFilter::Verbose
};
