//! crates/logging/src/color.rs
//! ANSI color decoration for warning and error payloads.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorModeError;
use crate::levels::Level;

/// Raw ANSI escape sequences understood by serial terminals.
///
/// Only [`BRIGHT_YELLOW`](ansi::BRIGHT_YELLOW), [`BRIGHT_RED`](ansi::BRIGHT_RED)
/// and [`RESET_ALL`](ansi::RESET_ALL) are used by the default decoration; the
/// rest of the palette is exported for callers building their own highlights.
pub mod ansi {
    /// Every sequence is empty when the `color` feature is disabled.
    const fn gated(sequence: &'static str) -> &'static str {
        if cfg!(feature = "color") {
            sequence
        } else {
            ""
        }
    }

    /// Resets every attribute.
    pub const RESET_ALL: &str = gated("\x1b[m");

    /// Black text on a red background.
    pub const BLACK_ON_RED: &str = gated("\x1b[0;30;41m");
    /// Red foreground.
    pub const RED: &str = gated("\x1b[0;31m");
    /// Green foreground.
    pub const GREEN: &str = gated("\x1b[0;32m");
    /// Yellow foreground.
    pub const YELLOW: &str = gated("\x1b[0;33m");
    /// Blue foreground.
    pub const BLUE: &str = gated("\x1b[0;34m");
    /// Magenta foreground.
    pub const MAGENTA: &str = gated("\x1b[0;35m");
    /// Cyan foreground.
    pub const CYAN: &str = gated("\x1b[0;36m");
    /// White foreground.
    pub const WHITE: &str = gated("\x1b[0;37m");
    /// Default foreground.
    pub const DEFAULT: &str = gated("\x1b[0;39m");

    /// Bold gray foreground.
    pub const GRAY: &str = gated("\x1b[1;30m");
    /// Bold red foreground.
    pub const BRIGHT_RED: &str = gated("\x1b[1;31m");
    /// Bold green foreground.
    pub const BRIGHT_GREEN: &str = gated("\x1b[1;32m");
    /// Bold yellow foreground.
    pub const BRIGHT_YELLOW: &str = gated("\x1b[1;33m");
    /// Bold blue foreground.
    pub const BRIGHT_BLUE: &str = gated("\x1b[1;34m");
    /// Bold magenta foreground.
    pub const BRIGHT_MAGENTA: &str = gated("\x1b[1;35m");
    /// Bold cyan foreground.
    pub const BRIGHT_CYAN: &str = gated("\x1b[1;36m");
    /// Bold white foreground.
    pub const BRIGHT_WHITE: &str = gated("\x1b[1;37m");

    /// Black background.
    pub const BG_BLACK: &str = gated("\x1b[0;40m");
    /// Red background.
    pub const BG_RED: &str = gated("\x1b[0;41m");
    /// Green background.
    pub const BG_GREEN: &str = gated("\x1b[0;42m");
    /// Yellow background.
    pub const BG_YELLOW: &str = gated("\x1b[0;43m");
    /// Blue background.
    pub const BG_BLUE: &str = gated("\x1b[0;44m");
    /// Magenta background.
    pub const BG_MAGENTA: &str = gated("\x1b[0;45m");
    /// Cyan background.
    pub const BG_CYAN: &str = gated("\x1b[0;46m");
    /// White background.
    pub const BG_WHITE: &str = gated("\x1b[0;47m");
    /// Default background.
    pub const BG_RESET: &str = gated("\x1b[0;49m");
}

/// Whether the crate was built with the `color` feature.
pub const COLOR_COMPILED: bool = cfg!(feature = "color");

/// Pair of escape sequences wrapped around a payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decoration {
    /// Written before the payload.
    pub start: &'static str,
    /// Written after the payload and before any line terminator.
    pub end: &'static str,
}

impl Decoration {
    /// The identity decoration.
    pub const NONE: Self = Self { start: "", end: "" };

    /// Decoration applied to warnings.
    pub const WARN: Self = Self {
        start: ansi::BRIGHT_YELLOW,
        end: ansi::RESET_ALL,
    };

    /// Decoration applied to errors.
    pub const ERROR: Self = Self {
        start: ansi::BRIGHT_RED,
        end: ansi::RESET_ALL,
    };

    /// Selects the decoration for `level`.
    ///
    /// Only warnings and errors are highlighted. When `enabled` is false, or the
    /// crate was built without the `color` feature, the identity decoration is
    /// returned for every level.
    ///
    /// ```
    /// use logging::{Decoration, Level};
    ///
    /// assert_eq!(Decoration::for_level(Level::Info, true), Decoration::NONE);
    /// assert_eq!(Decoration::for_level(Level::Error, false), Decoration::NONE);
    /// ```
    #[must_use]
    pub const fn for_level(level: Level, enabled: bool) -> Self {
        if !enabled || !COLOR_COMPILED {
            return Self::NONE;
        }
        match level {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info | Level::Debug | Level::Verbose => Self::NONE,
        }
    }

    /// Reports whether the decoration writes nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

/// User-facing color preference.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum ColorMode {
    /// Colorize only when the output stream is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    /// Resolves the preference for a stream.
    ///
    /// `is_terminal` only matters in [`ColorMode::Auto`]. The result is always
    /// `false` when the crate was built without the `color` feature.
    #[must_use]
    pub const fn resolve(self, is_terminal: bool) -> bool {
        if !COLOR_COMPILED {
            return false;
        }
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ColorMode {
    type Error = ParseColorModeError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "yes" => Ok(Self::Always),
            "never" | "off" | "no" => Ok(Self::Never),
            _ => Err(ParseColorModeError::new(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_warn_and_error_are_decorated() {
        let expected_on = COLOR_COMPILED;
        assert_eq!(!Decoration::for_level(Level::Error, true).is_none(), expected_on);
        assert_eq!(!Decoration::for_level(Level::Warn, true).is_none(), expected_on);
        assert!(Decoration::for_level(Level::Info, true).is_none());
        assert!(Decoration::for_level(Level::Debug, true).is_none());
        assert!(Decoration::for_level(Level::Verbose, true).is_none());
    }

    #[test]
    fn disabled_decoration_is_identity() {
        for level in Level::ALL {
            assert_eq!(Decoration::for_level(level, false), Decoration::NONE);
        }
    }

    #[cfg(feature = "color")]
    #[test]
    fn error_uses_bright_red_and_reset() {
        let deco = Decoration::for_level(Level::Error, true);
        assert_eq!(deco.start, "\x1b[1;31m");
        assert_eq!(deco.end, "\x1b[m");
        let deco = Decoration::for_level(Level::Warn, true);
        assert_eq!(deco.start, "\x1b[1;33m");
    }

    #[test]
    fn color_mode_parse() {
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("on".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert_eq!("off".parse::<ColorMode>().unwrap(), ColorMode::Never);
        let err = "rainbow".parse::<ColorMode>().unwrap_err();
        assert_eq!(err.input(), "rainbow");
    }

    #[cfg(not(feature = "color"))]
    #[test]
    fn escapes_are_empty_without_color() {
        assert_eq!(Decoration::WARN, Decoration::NONE);
        assert_eq!(Decoration::ERROR, Decoration::NONE);
        for sequence in [ansi::RESET_ALL, ansi::RED, ansi::BRIGHT_YELLOW, ansi::BG_BLUE] {
            assert!(sequence.is_empty());
        }
    }

    #[test]
    fn color_mode_from_owned_string() {
        assert_eq!(ColorMode::try_from(String::from("Yes")), Ok(ColorMode::Always));
        assert_eq!(ColorMode::try_from(String::from("NO")), Ok(ColorMode::Never));
        assert!(ColorMode::try_from(String::from("rainbow")).is_err());
    }

    #[test]
    fn color_mode_resolution() {
        assert!(!ColorMode::Never.resolve(true));
        assert_eq!(ColorMode::Always.resolve(false), COLOR_COMPILED);
        assert_eq!(ColorMode::Auto.resolve(true), COLOR_COMPILED);
        assert!(!ColorMode::Auto.resolve(false));
    }
}
