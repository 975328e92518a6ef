#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::ffi::OsString;
use std::io::{self, Write};
use std::{env, process::ExitCode};

/// Runs the console front-end and maps its status to an [`ExitCode`].
#[must_use]
fn run_with<I, Out, Err>(args: I, stdout: Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write + Send + 'static,
    Err: Write,
{
    let status = cli::run(args, stdout, stderr);
    let _ = stderr.flush();
    cli::exit_code_from(status)
}

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    run_with(env::args_os(), io::stdout(), &mut stderr)
}

#[cfg(test)]
mod tests {
    use super::run_with;
    use std::ffi::OsString;
    use std::io;
    use std::process::ExitCode;

    #[test]
    fn version_flag_reports_success() {
        let mut stderr = Vec::new();
        let exit = run_with(["lmh-console", "--version"], io::sink(), &mut stderr);

        assert_eq!(exit, ExitCode::SUCCESS, "--version should succeed");
        assert!(stderr.is_empty(), "--version must not write to stderr");
    }

    #[test]
    fn unknown_flag_reports_failure() {
        let mut stderr = Vec::new();
        let exit = run_with(
            [
                OsString::from("lmh-console"),
                OsString::from("--definitely-invalid-option"),
            ],
            io::sink(),
            &mut stderr,
        );

        assert_eq!(exit, ExitCode::FAILURE, "invalid flags should be rejected");
        assert!(!stderr.is_empty(), "invalid flag should emit diagnostics");
    }
}
