//! crates/cli/src/config.rs
//! Configuration file loading and layering of every settings source.

use std::fs;
use std::path::{Path, PathBuf};

use lmhandler::Region;
use logging::{ColorMode, LevelFilter, LogConfig};
use serde::Deserialize;

use crate::error::CliError;

/// Uplinks replayed when no layer says otherwise.
pub const DEFAULT_UPLINKS: u32 = 3;

/// Milliseconds the replay clock advances between events by default.
pub const DEFAULT_STEP_MS: u64 = 250;

/// Parsed contents of a configuration file.
///
/// ```toml
/// [log]
/// level = "debug"
/// color = "never"
/// timestamps = false
///
/// [session]
/// region = "US915"
/// uplinks = 5
/// otaa = false
/// step_ms = 100
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Console settings; missing keys keep their defaults.
    pub log: LogConfig,
    /// Replay settings.
    pub session: SessionTable,
}

/// `[session]` table of a configuration file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionTable {
    /// Regional plan name such as `EU868`.
    pub region: Option<String>,
    /// Number of uplinks to replay.
    pub uplinks: Option<u32>,
    /// Join over the air instead of by personalization.
    pub otaa: Option<bool>,
    /// Clock step between events in milliseconds.
    pub step_ms: Option<u64>,
}

impl ConfigFile {
    /// Parses configuration text; `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

/// Settings given on the command line; `None` leaves lower layers in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// `--level`.
    pub level: Option<String>,
    /// `--color`.
    pub color: Option<String>,
    /// `--no-timestamps`.
    pub no_timestamps: bool,
    /// `--config`.
    pub config: Option<PathBuf>,
    /// `--uplinks`.
    pub uplinks: Option<u32>,
    /// `--region`.
    pub region: Option<String>,
}

/// Replay parameters after layering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// Active regional plan.
    pub region: Region,
    /// Number of uplinks to replay.
    pub uplinks: u32,
    /// Join over the air instead of by personalization.
    pub otaa: bool,
    /// Clock step between events in milliseconds.
    pub step_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            region: Region::Eu868,
            uplinks: DEFAULT_UPLINKS,
            otaa: true,
            step_ms: DEFAULT_STEP_MS,
        }
    }
}

/// Fully layered settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Console configuration.
    pub log: LogConfig,
    /// Replay parameters.
    pub session: SessionSettings,
    /// Whether a configuration file contributed.
    pub from_file: bool,
}

impl Settings {
    /// Layers defaults, the configuration file, the environment, and the
    /// command line, in increasing precedence.
    ///
    /// `lookup` reads environment variables.
    pub fn resolve<F>(cli: &CommandLine, lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &cli.config {
            Some(path) => Some(ConfigFile::load(path)?),
            None => None,
        };
        Self::layer(file, cli, lookup)
    }

    /// Layers an already parsed file under the environment and command line.
    pub fn layer<F>(file: Option<ConfigFile>, cli: &CommandLine, lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(file) = file {
            settings.from_file = true;
            settings.log = file.log;
            let table = file.session;
            if let Some(region) = table.region {
                settings.session.region = region.parse()?;
            }
            if let Some(uplinks) = table.uplinks {
                settings.session.uplinks = uplinks;
            }
            if let Some(otaa) = table.otaa {
                settings.session.otaa = otaa;
            }
            if let Some(step_ms) = table.step_ms {
                settings.session.step_ms = step_ms;
            }
        }

        settings
            .log
            .apply_env_with(lookup)
            .map_err(|source| CliError::logging("environment", source))?;

        if let Some(level) = &cli.level {
            settings.log.threshold = level
                .parse::<LevelFilter>()
                .map_err(|source| CliError::logging("--level", source.into()))?;
        }
        if let Some(color) = &cli.color {
            settings.log.color = color
                .parse::<ColorMode>()
                .map_err(|source| CliError::logging("--color", source.into()))?;
        }
        if cli.no_timestamps {
            settings.log.timestamps = false;
        }
        if let Some(uplinks) = cli.uplinks {
            settings.session.uplinks = uplinks;
        }
        if let Some(region) = &cli.region {
            settings.session.region = region.parse()?;
        }

        Ok(settings)
    }
}
