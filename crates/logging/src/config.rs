//! crates/logging/src/config.rs
//! Console configuration: threshold, color preference, and timestamp prefix.

use crate::color::ColorMode;
use crate::error::ConfigError;
use crate::levels::LevelFilter;

/// Environment variable carrying comma-separated directives.
pub const LOG_ENV: &str = "LMH_LOG";

/// Environment variable that disables color when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Runtime configuration of a console logger.
///
/// # Examples
///
/// ```
/// use logging::{ColorMode, LevelFilter, LogConfig};
///
/// let mut config = LogConfig::default();
/// config.apply_directives("level=debug, color=never, timestamps=off")?;
///
/// assert_eq!(config.threshold, LevelFilter::Debug);
/// assert_eq!(config.color, ColorMode::Never);
/// assert!(!config.timestamps);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LogConfig {
    /// Most verbose level that is still emitted.
    #[cfg_attr(feature = "serde", serde(alias = "level"))]
    pub threshold: LevelFilter,
    /// Color preference for warnings and errors.
    pub color: ColorMode,
    /// Whether line starts carry the millisecond prefix.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: LevelFilter::Info,
            color: ColorMode::Auto,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Creates a configuration with the given threshold and default everything else.
    #[must_use]
    pub fn with_threshold(threshold: LevelFilter) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Returns a copy with `color` replaced.
    #[must_use]
    pub const fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with `timestamps` replaced.
    #[must_use]
    pub const fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Applies a single directive such as `level=debug`, `color=never`, or
    /// `timestamps=off`. A bare level name is shorthand for `level=<name>`.
    pub fn apply_directive(&mut self, token: &str) -> Result<(), ConfigError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyDirective);
        }

        let Some((key, value)) = token.split_once('=') else {
            self.threshold = token.parse()?;
            return Ok(());
        };

        let key = key.trim();
        let value = value.trim();
        match key.to_ascii_lowercase().as_str() {
            "level" | "threshold" => self.threshold = value.parse()?,
            "color" | "colour" => self.color = value.parse()?,
            "timestamps" | "timestamp" => self.timestamps = parse_switch(key, value)?,
            _ => return Err(ConfigError::UnknownDirective(key.to_owned())),
        }
        Ok(())
    }

    /// Applies a comma-separated list of directives, skipping empty entries.
    pub fn apply_directives(&mut self, directives: &str) -> Result<(), ConfigError> {
        for token in directives.split(',').filter(|t| !t.trim().is_empty()) {
            self.apply_directive(token)?;
        }
        Ok(())
    }

    /// Layers the [`LOG_ENV`] and [`NO_COLOR_ENV`] variables over `self`.
    ///
    /// `lookup` abstracts the environment so callers and tests can supply
    /// their own variables.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(directives) = lookup(LOG_ENV) {
            self.apply_directives(&directives)?;
        }
        if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
            self.color = ColorMode::Never;
        }
        Ok(())
    }

    /// Builds a configuration from the defaults and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_with(|name| std::env::var(name).ok())?;
        Ok(config)
    }
}

/// Parses an on/off switch value.
fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = LogConfig::default();
        assert_eq!(config.threshold, LevelFilter::Info);
        assert_eq!(config.color, ColorMode::Auto);
        assert!(config.timestamps);
    }

    #[test]
    fn bare_level_is_shorthand() {
        let mut config = LogConfig::default();
        config.apply_directive("dbg").unwrap();
        assert_eq!(config.threshold, LevelFilter::Debug);
    }

    #[test]
    fn keyed_directives() {
        let mut config = LogConfig::default();
        config.apply_directive("level = warn").unwrap();
        config.apply_directive("colour=always").unwrap();
        config.apply_directive("timestamps=0").unwrap();
        assert_eq!(config.threshold, LevelFilter::Warn);
        assert_eq!(config.color, ColorMode::Always);
        assert!(!config.timestamps);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = LogConfig::default();
        let err = config.apply_directive("volume=11").unwrap_err();
        assert_eq!(err, ConfigError::UnknownDirective("volume".to_owned()));
    }

    #[test]
    fn empty_directive_is_rejected_but_empty_list_is_not() {
        let mut config = LogConfig::default();
        assert_eq!(
            config.apply_directive("  "),
            Err(ConfigError::EmptyDirective)
        );
        assert!(config.apply_directives(",,").is_ok());
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn invalid_switch_reports_key() {
        let mut config = LogConfig::default();
        match config.apply_directive("timestamps=sometimes") {
            Err(ConfigError::InvalidSwitch { key, value }) => {
                assert_eq!(key, "timestamps");
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn env_layering() {
        let mut config = LogConfig::default();
        config
            .apply_env_with(env(&[(LOG_ENV, "verbose,timestamps=off")]))
            .unwrap();
        assert_eq!(config.threshold, LevelFilter::Verbose);
        assert!(!config.timestamps);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn no_color_forces_never_unless_empty() {
        let mut config = LogConfig::default().color(ColorMode::Always);
        config.apply_env_with(env(&[(NO_COLOR_ENV, "")])).unwrap();
        assert_eq!(config.color, ColorMode::Always);

        config.apply_env_with(env(&[(NO_COLOR_ENV, "1")])).unwrap();
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn env_errors_propagate() {
        let mut config = LogConfig::default();
        assert!(config.apply_env_with(env(&[(LOG_ENV, "level=loud")])).is_err());
    }

    #[test]
    fn builders() {
        let config = LogConfig::with_threshold(LevelFilter::None)
            .color(ColorMode::Never)
            .timestamps(false);
        assert_eq!(config.threshold, LevelFilter::None);
        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.timestamps);
    }
}
