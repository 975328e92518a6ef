//! crates/cli/src/arguments.rs
//! Command definition and argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};

use crate::config::CommandLine;

/// Program name used when the argument list is empty.
pub(crate) const PROGRAM_NAME: &str = "lmh-console";

/// Deterministic help text describing the supported options.
pub(crate) const HELP_TEXT: &str = concat!(
    "lmh-console ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Replays a LoRaWAN end-device session on the console.\n",
    "\n",
    "Usage: lmh-console [-h] [-V] [-l LEVEL] [--color WHEN] [--no-timestamps]\n",
    "                   [-c FILE] [--uplinks N] [--region REGION]\n",
    "\n",
    "Options:\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "  -l, --level LEVEL      Most verbose level printed: none, error, warn, info,\n",
    "                         debug, or verbose.\n",
    "      --color WHEN       Color warnings and errors: auto, always, or never.\n",
    "      --no-timestamps    Omit the millisecond prefix at line starts.\n",
    "  -c, --config FILE      Read [log] and [session] settings from a TOML file.\n",
    "      --uplinks N        Number of uplinks to replay.\n",
    "      --region REGION    Regional plan, such as EU868 or US915.\n",
    "\n",
    "Settings are layered in increasing precedence: built-in defaults, the\n",
    "config file, the LMH_LOG and NO_COLOR environment variables, and finally\n",
    "the command line.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) command_line: CommandLine,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Most verbose level printed.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .visible_alias("colour")
                .value_name("WHEN")
                .help("Color warnings and errors.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-timestamps")
                .long("no-timestamps")
                .help("Omit the millisecond prefix.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Read settings from a TOML file.")
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("uplinks")
                .long("uplinks")
                .value_name("N")
                .help("Number of uplinks to replay.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .value_name("REGION")
                .help("Regional plan.")
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let command_line = CommandLine {
        level: matches.remove_one::<String>("level"),
        color: matches.remove_one::<String>("color"),
        no_timestamps: matches.get_flag("no-timestamps"),
        config: matches.remove_one::<OsString>("config").map(PathBuf::from),
        uplinks: matches.remove_one::<u32>("uplinks"),
        region: matches.remove_one::<String>("region"),
    };

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        command_line,
    })
}
