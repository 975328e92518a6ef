#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `lmh-console` front-end. It layers console settings
//! from defaults, an optional TOML file, the environment, and the command
//! line, then replays a scripted LoRaWAN end-device session through
//! [`lmhandler::MsgDisplay`] so every formatter can be seen with the chosen
//! threshold, color, and timestamp settings.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments, an owned writer for standard
//! output, and a handle for standard error. The writer moves into the console
//! [`logging::Logger`], so each line reaches it as soon as it is rendered.
//! A [`clap`](https://docs.rs/clap/) command definition recognises the
//! supported options; [`Settings::resolve`] applies
//! the layers; [`Session::replay`] drives the display with a
//! [`logging::ManualClock`] stepped between events, so the output is
//! reproducible. The front-end's own diagnostics are `tracing` events routed
//! into the same console through [`logging::tracing_bridge::ConsoleLayer`].
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit status `1`.
//! - Help output is a static snapshot, so the wording is stable.
//! - A `none` threshold produces no output at all.
//!
//! # Errors
//!
//! Argument, configuration, and region errors are reported on stderr as
//! [`CliError`] messages with exit status `1`.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stderr = Vec::new();
//! let exit_code = run(["lmh-console", "--version"], std::io::sink(), &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/lmh-console.rs` for the binary that wires [`run`] into `main`.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use is_terminal::IsTerminal;
use lmhandler::MsgDisplay;
use logging::tracing_bridge::ConsoleLayer;
use logging::{LogSink, Logger, ManualClock};
use tracing_subscriber::layer::SubscriberExt;

mod arguments;
mod config;
mod error;
mod session;

use arguments::{HELP_TEXT, ParsedArgs, parse_args};

pub use config::{
    CommandLine, ConfigFile, DEFAULT_STEP_MS, DEFAULT_UPLINKS, SessionSettings, SessionTable,
    Settings,
};
pub use error::CliError;
pub use session::Session;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The environment is read from the process and `color = auto` resolves
/// against whether the process stdout is a terminal. Console lines are
/// written to `stdout` as they are produced. Returns the exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write + Send + 'static,
    Err: Write,
{
    let interactive = io::stdout().is_terminal();
    run_with_env(
        arguments,
        |name| env::var(name).ok(),
        interactive,
        stdout,
        stderr,
    )
}

/// Runs the CLI with an explicit environment.
///
/// `lookup` reads environment variables and `interactive` tells whether
/// `stdout` is a terminal.
pub fn run_with_env<I, S, F, Out, Err>(
    arguments: I,
    lookup: F,
    interactive: bool,
    stdout: Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    F: Fn(&str) -> Option<String>,
    Out: Write + Send + 'static,
    Err: Write,
{
    let outcome = parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|parsed| execute(parsed, lookup, interactive, stdout));
    let status = match outcome {
        Ok(()) => 0,
        Err(CliError::Arguments(error)) => {
            let _ = write!(stderr, "{error}");
            1
        }
        Err(error) => {
            let _ = writeln!(stderr, "lmh-console: error: {error}");
            1
        }
    };
    let _ = stderr.flush();
    status
}

fn execute<F, Out>(
    parsed: ParsedArgs,
    lookup: F,
    interactive: bool,
    mut stdout: Out,
) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
    Out: Write + Send + 'static,
{
    if parsed.show_help {
        return stdout
            .write_all(HELP_TEXT.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::Output);
    }
    if parsed.show_version {
        return writeln!(stdout, "lmh-console {}", env!("CARGO_PKG_VERSION"))
            .and_then(|()| stdout.flush())
            .map_err(CliError::Output);
    }

    let settings = Settings::resolve(&parsed.command_line, lookup)?;
    let clock = Arc::new(ManualClock::new(0));
    let logger = Arc::new(Logger::from_sink(LogSink::for_stream(
        stdout,
        Arc::clone(&clock),
        settings.log,
        interactive,
    )));

    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(Arc::clone(&logger)));
    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(
            region = %settings.session.region,
            uplinks = settings.session.uplinks,
            config_file = settings.from_file,
            "replaying session"
        );
        Session::new(settings.session).replay(&MsgDisplay::new(&logger), &clock);
        tracing::debug!("session complete");
    });

    logger
        .with_sink(|sink| sink.get_mut().flush())
        .map_err(CliError::Output)
}

/// Converts a numeric status into an [`ExitCode`], clamping to the portable range.
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
            String::from_utf8(bytes).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_env<const N: usize>(
        args: [&str; N],
        lookup: impl Fn(&str) -> Option<String>,
        interactive: bool,
    ) -> (i32, String, String) {
        let stdout = Captured::default();
        let mut stderr = Vec::new();
        let status = run_with_env(args, lookup, interactive, stdout.clone(), &mut stderr);
        (status, stdout.contents(), String::from_utf8(stderr).unwrap())
    }

    fn run_quiet<const N: usize>(args: [&str; N]) -> (i32, String, String) {
        run_env(args, |_| None, false)
    }

    #[test]
    fn help_prints_static_text() {
        let (status, stdout, stderr) = run_quiet(["lmh-console", "--help"]);
        assert_eq!(status, 0);
        assert_eq!(stdout, HELP_TEXT);
        assert!(stderr.is_empty());
    }

    #[test]
    fn version_prints_banner() {
        let (status, stdout, _) = run_quiet(["lmh-console", "-V"]);
        assert_eq!(status, 0);
        assert_eq!(stdout, format!("lmh-console {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn default_run_replays_session() {
        let (status, stdout, stderr) = run_quiet(["lmh-console"]);
        assert_eq!(status, 0, "{stderr}");
        assert!(stdout.starts_with("00000000 : -- [ NVM CTXS RESTORED ] size=384\n"));
        assert!(stdout.contains("-- [ JOINED ]  OTAA DevAddr=26011B7C DR_5\n"));
        assert!(!stdout.contains("replaying session"));
    }

    #[test]
    fn debug_level_shows_front_end_events() {
        let (status, stdout, _) = run_quiet(["lmh-console", "-l", "debug", "--uplinks", "1"]);
        assert_eq!(status, 0);
        assert!(stdout.starts_with(
            "00000000 : replaying session region=EU868 uplinks=1 config_file=false\n"
        ));
        assert!(stdout.ends_with(": session complete\n"));
    }

    #[test]
    fn none_level_prints_nothing() {
        let (status, stdout, stderr) = run_quiet(["lmh-console", "--level", "none"]);
        assert_eq!(status, 0);
        assert!(stdout.is_empty());
        assert!(stderr.is_empty());
    }

    #[test]
    fn no_timestamps_drops_prefix() {
        let (_, stdout, _) = run_quiet(["lmh-console", "--no-timestamps", "--uplinks", "0"]);
        assert!(stdout.starts_with("-- [ NVM CTXS RESTORED ] size=384\n"));
    }

    #[test]
    fn always_color_decorates_warnings() {
        let (_, stdout, _) = run_quiet(["lmh-console", "--color", "always", "-l", "warn"]);
        if logging::COLOR_COMPILED {
            assert!(stdout.contains(logging::ansi::BRIGHT_YELLOW));
        } else {
            assert!(!stdout.contains('\x1b'));
        }
    }

    #[test]
    fn auto_color_follows_terminal_flag() {
        let (status, stdout, _) = run_env(["lmh-console", "-l", "warn"], |_| None, true);
        assert_eq!(status, 0);
        assert_eq!(stdout.contains('\x1b'), logging::COLOR_COMPILED);
    }

    #[test]
    fn environment_is_layered_under_arguments() {
        let env = |name: &str| (name == "LMH_LOG").then(|| "none".to_owned());
        let (status, stdout, _) = run_env(["lmh-console"], env, false);
        assert_eq!(status, 0);
        assert!(stdout.is_empty());

        let (status, stdout, _) = run_env(["lmh-console", "-l", "info"], env, false);
        assert_eq!(status, 0);
        assert!(!stdout.is_empty());
    }

    #[test]
    fn replay_writes_through_the_given_writer() {
        let stdout = Captured::default();
        let observed = stdout.clone();
        let mut stderr = Vec::new();
        let status = run_with_env(
            ["lmh-console", "--uplinks", "0"],
            |_| None,
            false,
            stdout,
            &mut stderr,
        );
        assert_eq!(status, 0);
        assert_eq!(Arc::strong_count(&observed.0), 1);
        assert!(observed.contents().starts_with("00000000 : -- [ NVM CTXS RESTORED ]"));
    }

    #[test]
    fn bad_level_exits_with_one() {
        let (status, stdout, stderr) = run_quiet(["lmh-console", "--level", "loud"]);
        assert_eq!(status, 1);
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("lmh-console: error: --level: "), "{stderr}");
    }

    #[test]
    fn unknown_option_exits_with_one() {
        let (status, _, stderr) = run_quiet(["lmh-console", "--bogus"]);
        assert_eq!(status, 1);
        assert!(stderr.contains("--bogus"));
    }

    #[test]
    fn unknown_region_exits_with_one() {
        let (status, _, stderr) = run_quiet(["lmh-console", "--region", "XX000"]);
        assert_eq!(status, 1);
        assert!(stderr.contains("XX000"));
    }

    #[test]
    fn exit_code_is_clamped() {
        assert_eq!(exit_code_from(-3), ExitCode::from(0));
        assert_eq!(exit_code_from(1), ExitCode::from(1));
        assert_eq!(exit_code_from(4096), ExitCode::from(u8::MAX));
    }
}
