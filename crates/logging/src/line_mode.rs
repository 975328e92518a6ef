/// Controls whether an emission terminates the current line.
///
/// [`LineMode::WithNewline`] is the default and matches the usual one record
/// per line. [`LineMode::WithoutNewline`] leaves the line open so a later
/// call (more text or a hex dump) can complete it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline after the payload and its color reset.
    #[default]
    WithNewline,
    /// Leave the line open.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

/// Where an emission sits within a logical line.
///
/// Only [`LinePosition::Start`] receives the timestamp prefix. A label
/// followed by a hex dump is written as a `Start` emission without newline and
/// a `Continuation` that ends the line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LinePosition {
    /// First piece of a line; the prefix is rendered.
    #[default]
    Start,
    /// Later piece of a line; no prefix.
    Continuation,
}

impl LinePosition {
    /// Reports whether the prefix should be rendered.
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }
}

impl From<bool> for LinePosition {
    /// `true` maps to [`LinePosition::Start`].
    fn from(line_start: bool) -> Self {
        if line_start {
            Self::Start
        } else {
            Self::Continuation
        }
    }
}
