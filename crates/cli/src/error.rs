//! crates/cli/src/error.rs
//! Failures that stop the console before the session is replayed.

use std::io;
use std::path::PathBuf;

use lmhandler::ParseRegionError;
use logging::ConfigError;
use thiserror::Error;

/// Errors reported on stderr with exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Arguments(#[from] clap::Error),
    /// A logging setting was rejected, from any layer.
    #[error("{origin}: {source}")]
    Logging {
        /// Layer the setting came from.
        origin: &'static str,
        /// Underlying directive error.
        #[source]
        source: ConfigError,
    },
    /// The configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigIo {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration file is not valid TOML for this tool.
    #[error("invalid config file '{}': {source}", path.display())]
    ConfigParse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A region name was not recognised.
    #[error(transparent)]
    Region(#[from] ParseRegionError),
    /// The rendered session could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    pub(crate) const fn logging(origin: &'static str, source: ConfigError) -> Self {
        Self::Logging { origin, source }
    }
}
