use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn console() -> Command {
    let mut command = Command::cargo_bin("lmh-console").expect("binary is built");
    command.env_remove("LMH_LOG").env_remove("NO_COLOR");
    command
}

fn stdout_of(command: &mut Command) -> String {
    let output = command.output().expect("binary runs");
    assert!(
        output.status.success(),
        "unexpected failure: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stderr.is_empty(), "stderr should stay empty");
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

// ============================================================================
// Help and version
// ============================================================================

/// `--help` prints the usage summary on stdout.
#[test]
fn help_lists_usage() {
    let stdout = stdout_of(console().arg("--help"));
    assert!(stdout.contains("Usage: lmh-console"));
    assert!(stdout.contains("--region REGION"));
}

/// `-V` prints the name and version.
#[test]
fn version_names_the_program() {
    let stdout = stdout_of(console().arg("-V"));
    assert_eq!(stdout, format!("lmh-console {}\n", env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Failures
// ============================================================================

/// An unknown level is rejected with status 1 and nothing on stdout.
#[test]
fn bad_level_exits_with_one() {
    let output = console()
        .args(["--level", "shouty"])
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("'shouty'"), "{stderr}");
}

/// A missing configuration file is reported with its path.
#[test]
fn missing_config_file_exits_with_one() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let output = console()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("absent.toml"), "{stderr}");
}

/// Malformed TOML is rejected.
#[test]
fn malformed_config_file_exits_with_one() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[log\nlevel = ").expect("write config");
    let output = console()
        .arg("-c")
        .arg(&path)
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Replay output
// ============================================================================

/// The default replay starts at time zero with the context restore.
#[test]
fn default_replay_renders_session() {
    let stdout = stdout_of(&mut console());
    assert!(stdout.starts_with("00000000 : -- [ NVM CTXS RESTORED ] size=384\n"));
    assert!(stdout.contains("-- [ BEACON ] time sec=1381505418 GW DESC=0 INFO=00 80 00 00 00 01 \n"));
    assert!(stdout.contains("-- [ MCPS-Request - MCPS_UNCONFIRMED]  status=Duty-cycle restricted Next Tx in= 4500 ms\n"));
}

/// A `none` threshold silences every line.
#[test]
fn none_level_prints_nothing() {
    let stdout = stdout_of(console().args(["--level", "none"]));
    assert!(stdout.is_empty());
}

/// `LMH_LOG` applies when the command line says nothing.
#[test]
fn environment_sets_threshold() {
    let stdout = stdout_of(console().env("LMH_LOG", "level=warn,timestamps=off"));
    assert_eq!(stdout, "-- [ BEACON NOT RECEIVED ]\n");
}

// ============================================================================
// Configuration precedence
// ============================================================================

/// The file overrides defaults, the environment overrides the file, and the
/// command line overrides both.
#[test]
fn config_file_environment_and_arguments_layer_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("lmh.toml");
    fs::write(
        &path,
        "[log]\nlevel = \"error\"\ntimestamps = false\ncolor = \"never\"\n\n[session]\nuplinks = 1\nregion = \"US915\"\n",
    )
    .expect("write config");

    // File alone: errors only, and this session has none.
    let stdout = stdout_of(console().arg("--config").arg(&path));
    assert!(stdout.is_empty());

    // Environment raises the threshold above the file.
    let stdout = stdout_of(console().arg("--config").arg(&path).env("LMH_LOG", "warn"));
    assert_eq!(stdout, "Unsupported region\n-- [ BEACON NOT RECEIVED ]\n");

    // Command line wins over both.
    let stdout = stdout_of(
        console()
            .arg("--config")
            .arg(&path)
            .env("LMH_LOG", "warn")
            .args(["--level", "info", "--region", "EU868"]),
    );
    assert_eq!(stdout.matches("-- [ UPLINK FRAME ]").count(), 1);
    assert!(stdout.contains("\tDR_5 frequency=868100000 power=0 channel mask=7\n"));
    assert!(!stdout.contains("Unsupported region"));
}
