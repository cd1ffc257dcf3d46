//! Binary-level tests
//!
//! Runs the compiled `tx-ledger` executable against temporary input files and
//! checks stdout, stderr, and the exit status.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn write_input(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn run_binary(args: &[&std::ffi::OsStr], log_level: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tx-ledger"));
    command.args(args).env_remove("TX_LEDGER_LOG");
    if let Some(level) = log_level {
        command.env("TX_LEDGER_LOG", level);
    }
    command.output().expect("Failed to run tx-ledger")
}

#[test]
fn test_cli_prints_report_on_stdout() {
    let input = write_input(
        "type, client, tx, amount\n\
         deposit, 1, 1, 1.0\n\
         deposit, 2, 2, 2.0\n\
         deposit, 1, 3, 2.0\n\
         withdrawal, 1, 4, 1.5\n\
         withdrawal, 2, 5, 3.0\n",
    );

    let output = run_binary(&[input.path().as_os_str()], None);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "client, available, held, total, locked\n\
         1, 1.5000, 0.0000, 1.5000, false\n\
         2, -1.0000, 0.0000, -1.0000, false\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_missing_file_exits_with_one_line_diagnostic() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.csv");

    let output = run_binary(&[missing.as_os_str()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr was: {}", stderr);
    assert!(stderr.starts_with("tx-ledger: opening transactions file"));
    assert!(stderr.contains("absent.csv"));
}

#[test]
fn test_cli_bad_header_writes_no_report() {
    let input = write_input("foo, bar, baz, qux, quax\ndeposit, 1, 1, 1.0\n");

    let output = run_binary(&[input.path().as_os_str()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "tx-ledger: invalid header: got \"foo, bar, baz, qux, quax\", want \"type, client, tx, amount\"\n"
    );
}

#[test]
fn test_cli_bad_row_discards_earlier_rows() {
    let input = write_input("type, client, tx, amount\ndeposit, 1, 1, 1.0\nrefund, 1, 2, 1.0\n");

    let output = run_binary(&[input.path().as_os_str()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "tx-ledger: unrecognized transaction type \"refund\" at line 3\n"
    );
}

#[test]
fn test_cli_without_arguments_fails() {
    let output = run_binary(&[], None);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_logs_go_to_stderr() {
    let input = write_input("type, client, tx, amount\ndeposit, 1, 1, 1.0\ndispute, 1, 7\n");

    let output = run_binary(&[input.path().as_os_str()], Some("debug"));

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "client, available, held, total, locked\n1, 1.0000, 0.0000, 1.0000, false\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("referenced transaction not found"));
}

#[test]
fn test_cli_invalid_log_level_falls_back() {
    let input = write_input("type, client, tx, amount\n");

    let output = run_binary(&[input.path().as_os_str()], Some("chatty"));

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid log level 'chatty', defaulting to 'error'"));
}
