//! Runs the built `cmdrun` binary and checks output and exit codes.

use std::process::Command;

fn run_cmdrun(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cmdrun"))
        .args(["--color", "never", "--config", "/nonexistent/cmdrun.toml"])
        .args(args)
        .env_remove("CMDRUN_LOG_LEVEL")
        .env_remove("CMDRUN_LOG_TIMESTAMPS")
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_no_args_prints_help() {
    let (code, stdout, _) = run_cmdrun(&[]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("Available commands:\n"));
    assert!(stdout.contains("echo - Print the arguments separated by spaces"));
}

#[test]
fn test_help_word_prints_help() {
    let (code, stdout, _) = run_cmdrun(&["help"]);
    assert_eq!(code, 1);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter_map(|l| l.split(" - ").next())
        .collect();
    assert_eq!(names, vec!["echo", "sum", "levels", "version"]);
}

#[test]
fn test_echo_succeeds() {
    let (code, stdout, _) = run_cmdrun(&["echo", "hello", "world"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "hello world\n");
}

#[test]
fn test_unknown_command() {
    let (code, stdout, _) = run_cmdrun(&["unknown-cmd"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "[ERROR]: Command 'unknown-cmd' does not exist\n");
}

#[test]
fn test_failing_command() {
    let (code, stdout, _) = run_cmdrun(&["sum", "1", "x"]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("[ERROR]: 'x' is not an integer"));
}

#[test]
fn test_hyphenated_handler_args() {
    let (code, stdout, _) = run_cmdrun(&["sum", "5", "-7"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "-2\n");
}

#[test]
fn test_log_level_flag() {
    let (code, stdout, _) = run_cmdrun(&["--log-level", "Warn", "levels"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Current level: Warn\n[ERROR] sample error message\n[WARN] sample warn message\n"
    );
}

#[test]
fn test_invalid_log_level_fails_startup() {
    let (code, stdout, stderr) = run_cmdrun(&["--log-level", "loud", "echo"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Invalid log level"));
}
